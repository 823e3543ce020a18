// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! crypt(3) base64 encoding of the final digest.
//!
//! The digest is not encoded in natural order: bytes are regrouped through
//! a fixed transposition into 21 triples plus one trailing byte. Each triple
//! `(b0, b1, b2)` forms the 24-bit value `b2 << 16 | b1 << 8 | b0`, emitted
//! least significant 6 bits first. The trailing byte yields 2 characters.

use alloc::string::String;

use crate::consts::{ENCODED_LEN, HASH_LEN};

/// crypt(3) base64 alphabet
pub const B64_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digest byte order for encoding, three entries per output group
const TRANSPOSE: [u8; HASH_LEN] = [
    42, 21, 0, //
    1, 43, 22, //
    23, 2, 44, //
    45, 24, 3, //
    4, 46, 25, //
    26, 5, 47, //
    48, 27, 6, //
    7, 49, 28, //
    29, 8, 50, //
    51, 30, 9, //
    10, 52, 31, //
    32, 11, 53, //
    54, 33, 12, //
    13, 55, 34, //
    35, 14, 56, //
    57, 36, 15, //
    16, 58, 37, //
    38, 17, 59, //
    60, 39, 18, //
    19, 61, 40, //
    41, 20, 62, //
    63,
];

#[inline(always)]
fn b64(value: u32) -> u8 {
    B64_ALPHABET[(value & 0x3f) as usize]
}

/// Encodes `digest` into `out` (86 characters of [`B64_ALPHABET`])
pub fn encode_digest_into(digest: &[u8; HASH_LEN], out: &mut [u8; ENCODED_LEN]) {
    let (groups, last) = TRANSPOSE.split_at(HASH_LEN - 1);

    for (chunk, triple) in out.chunks_exact_mut(4).zip(groups.chunks_exact(3)) {
        let w = (digest[triple[2] as usize] as u32) << 16
            | (digest[triple[1] as usize] as u32) << 8
            | digest[triple[0] as usize] as u32;

        chunk[0] = b64(w);
        chunk[1] = b64(w >> 6);
        chunk[2] = b64(w >> 12);
        chunk[3] = b64(w >> 18);
    }

    let w = digest[last[0] as usize] as u32;
    out[ENCODED_LEN - 2] = b64(w);
    out[ENCODED_LEN - 1] = b64(w >> 6);
}

/// Encodes `digest` as an 86-character string
pub fn encode_digest(digest: &[u8; HASH_LEN]) -> String {
    let mut out = [0u8; ENCODED_LEN];
    encode_digest_into(digest, &mut out);

    out.iter().map(|&b| b as char).collect()
}

/// Whether `b` belongs to [`B64_ALPHABET`]
#[inline]
pub(crate) fn is_b64_char(b: u8) -> bool {
    matches!(b, b'.' | b'/' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

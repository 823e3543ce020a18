// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::ENCODED_LEN;
use crate::encoding::{encode_digest, encode_digest_into, is_b64_char, B64_ALPHABET};

#[test]
fn test_b64_alphabet_matches_salt_alphabet() {
    assert_eq!(B64_ALPHABET, sha512crypt_rand::CRYPT_ALPHABET);
}

#[test]
fn test_is_b64_char_matches_alphabet() {
    for b in 0..=u8::MAX {
        assert_eq!(
            is_b64_char(b),
            B64_ALPHABET.contains(&b),
            "is_b64_char mismatch for {b:#04x}"
        );
    }
}

#[test]
fn test_encode_digest_all_zero() {
    let encoded = encode_digest(&[0u8; 64]);

    assert_eq!(encoded.len(), ENCODED_LEN);
    assert!(encoded.bytes().all(|b| b == b'.'));
}

#[test]
fn test_encode_digest_all_ones() {
    // The trailing byte only carries 8 bits: 0xff -> 'z' then '1'
    let encoded = encode_digest(&[0xffu8; 64]);

    assert_eq!(&encoded[..84], "z".repeat(84));
    assert_eq!(&encoded[84..], "z1");
}

#[test]
fn test_encode_digest_follows_transposition() {
    let digest: [u8; 64] = core::array::from_fn(|i| i as u8);

    assert_eq!(
        encode_digest(&digest),
        "eI/./gW3L6.9hUl.2sG4OIk9kgV/5215RUUAnsF08En5UgEBq201BQX6Xs.CtEm1EcH7a2lCwQW2Ho18dEVDz."
    );
}

#[test]
fn test_encode_digest_first_group_byte_order() {
    // Byte 42 is the low byte of the first group
    let mut digest = [0u8; 64];
    digest[42] = 0x80;
    let encoded = encode_digest(&digest);

    assert_eq!(&encoded[..4], ".0..");
    assert!(encoded[4..].bytes().all(|b| b == b'.'));

    // Byte 0 is the high byte of the first group (bits 16..23)
    let mut digest = [0u8; 64];
    digest[0] = 0x01;
    let encoded = encode_digest(&digest);

    assert_eq!(&encoded[..4], "..E.");
    assert!(encoded[4..].bytes().all(|b| b == b'.'));
}

#[test]
fn test_encode_digest_trailing_byte() {
    let mut digest = [0u8; 64];
    digest[63] = 0x41;
    let encoded = encode_digest(&digest);

    assert!(encoded[..84].bytes().all(|b| b == b'.'));
    assert_eq!(&encoded[84..], "//");
}

#[test]
fn test_encode_digest_into_matches_encode_digest() {
    let digest: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
    let mut out = [0u8; ENCODED_LEN];

    encode_digest_into(&digest, &mut out);

    assert_eq!(out.as_slice(), encode_digest(&digest).as_bytes());
    assert!(out.iter().all(|b| is_b64_char(*b)));
}

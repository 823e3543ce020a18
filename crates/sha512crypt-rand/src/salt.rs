// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Crypt-safe salt generation.
//!
//! Salts are drawn from the 64-character crypt alphabet only. A generic
//! base64 alphabet would introduce `+` and `=`, which other crypt(3)
//! implementations reject.

use alloc::string::String;

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Length of a generated salt in characters (the sha512crypt maximum)
pub const SALT_LEN: usize = 16;

/// The crypt alphabet `[./0-9A-Za-z]`, in crypt(3) base64 order
pub const CRYPT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Fills `out` with [`SALT_LEN`] crypt-alphabet characters.
///
/// Each random byte is reduced to its low 6 bits, which indexes the 64-entry
/// alphabet without modulo bias.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if `entropy` fails.
pub fn generate_salt_into<E: EntropySource>(
    entropy: &E,
    out: &mut [u8; SALT_LEN],
) -> Result<(), EntropyError> {
    let mut raw = [0u8; SALT_LEN];

    if let Err(err) = entropy.fill_bytes(&mut raw) {
        raw.zeroize();
        return Err(err);
    }

    for (dst, byte) in out.iter_mut().zip(raw.iter()) {
        *dst = CRYPT_ALPHABET[(byte & 0x3f) as usize];
    }

    raw.zeroize();

    Ok(())
}

/// Generates a [`SALT_LEN`]-character salt over [`CRYPT_ALPHABET`].
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if `entropy` fails.
pub fn generate_salt<E: EntropySource>(entropy: &E) -> Result<String, EntropyError> {
    let mut salt = [0u8; SALT_LEN];
    generate_salt_into(entropy, &mut salt)?;

    let out = salt.iter().map(|&b| b as char).collect();
    salt.zeroize();

    Ok(out)
}

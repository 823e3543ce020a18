// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! sha512crypt digest derivation (key stretching).
//!
//! Follows "Unix crypt using SHA-256 and SHA-512" by Ulrich Drepper
//! <https://www.akkadia.org/drepper/SHA-crypt.txt>, steps 1-21, with the
//! round count supplied by the caller.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::consts::HASH_LEN;
use crate::sha512::Sha512State;

/// Repeat `digest` cyclically and cut it to exactly `len` bytes
pub(crate) fn repeat_and_truncate(digest: &[u8; HASH_LEN], len: usize) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(digest.iter().copied().cycle().take(len).collect())
}

/// Intermediate digest A: the two-pass construction seeding the rounds
fn intermediate_digest(password: &[u8], salt: &[u8]) -> Zeroizing<[u8; HASH_LEN]> {
    // Digest B = SHA512(password || salt || password)
    let mut digest_b = Zeroizing::new([0u8; HASH_LEN]);
    {
        let mut state = Sha512State::new();
        state.update(password);
        state.update(salt);
        state.update(password);
        state.finalize(&mut digest_b);
    }

    // A = SHA512(password || salt || B extended to |password| || bit-walk of |password|)
    let mut digest_a = Zeroizing::new([0u8; HASH_LEN]);
    {
        let mut state = Sha512State::new();
        state.update(password);
        state.update(salt);
        state.update_extended(&digest_b[..], password.len());

        let mut cnt = password.len();
        while cnt > 0 {
            if cnt & 1 != 0 {
                state.update(&digest_b[..]);
            } else {
                state.update(password);
            }
            cnt >>= 1;
        }

        state.finalize(&mut digest_a);
    }

    digest_a
}

/// Byte sequence P: SHA512(password repeated |password| times), extended to |password|
fn password_sequence(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut dp = Zeroizing::new([0u8; HASH_LEN]);

    let mut state = Sha512State::new();
    state.update_repeated(password, password.len());
    state.finalize(&mut dp);

    repeat_and_truncate(&dp, password.len())
}

/// Byte sequence S: SHA512(salt repeated 16 + A[0] times), extended to |salt|
fn salt_sequence(salt: &[u8], digest_a: &[u8; HASH_LEN]) -> Zeroizing<Vec<u8>> {
    let mut ds = Zeroizing::new([0u8; HASH_LEN]);

    let mut state = Sha512State::new();
    state.update_repeated(salt, 16 + digest_a[0] as usize);
    state.finalize(&mut ds);

    repeat_and_truncate(&ds, salt.len())
}

/// Computes the raw 64-byte sha512crypt digest of `password` under `salt`.
///
/// Deterministic and infallible. `salt` is used as given; callers enforce
/// the 16-byte limit.
///
/// # Arguments
/// * `password` - Password bytes, any length
/// * `salt` - Salt bytes
/// * `rounds` - Number of stretching rounds (5000 for stored hashes)
pub fn sha512crypt_digest(password: &[u8], salt: &[u8], rounds: u32) -> [u8; HASH_LEN] {
    let digest_a = intermediate_digest(password, salt);
    let p = password_sequence(password);
    let s = salt_sequence(salt, &digest_a);

    let mut digest = Zeroizing::new(*digest_a);
    for i in 0..rounds {
        let mut state = Sha512State::new();

        if i & 1 != 0 {
            state.update(&p);
        } else {
            state.update(&digest[..]);
        }

        if i % 3 != 0 {
            state.update(&s);
        }

        if i % 7 != 0 {
            state.update(&p);
        }

        if i & 1 != 0 {
            state.update(&digest[..]);
        } else {
            state.update(&p);
        }

        state.finalize(&mut digest);
    }

    *digest
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Public hash / verify API.

use alloc::string::String;

use sha512crypt_rand::{generate_salt, EntropySource, SystemEntropySource};
use zeroize::Zeroizing;

use crate::consts::{CRYPT_TAG, ENCODED_LEN, MAX_SALT_LEN, PREFIX, ROUNDS};
use crate::digest::sha512crypt_digest;
use crate::encoding::encode_digest_into;
use crate::error::CryptError;
use crate::stored::{salt_field, scheme_tag, Candidates};

/// Hashes `password` under exactly `salt`, never generating one.
///
/// An empty salt is hashed as-is. The salt is not checked against the
/// crypt alphabet: a salt containing `$` is hashed, but [`verify`] reads the
/// salt only up to the next `$`, so the result never verifies.
///
/// # Errors
///
/// Returns [`CryptError::SaltTooLong`] if `salt` exceeds 16 bytes.
pub fn hash_with_salt<P: AsRef<[u8]>>(password: P, salt: &str) -> Result<String, CryptError> {
    if salt.len() > MAX_SALT_LEN {
        return Err(CryptError::SaltTooLong { len: salt.len() });
    }

    let digest = Zeroizing::new(sha512crypt_digest(
        password.as_ref(),
        salt.as_bytes(),
        ROUNDS,
    ));

    let mut encoded = Zeroizing::new([0u8; ENCODED_LEN]);
    encode_digest_into(&digest, &mut encoded);

    let mut out = String::with_capacity(PREFIX.len() + salt.len() + 1 + ENCODED_LEN);
    out.push_str(PREFIX);
    out.push_str(salt);
    out.push('$');
    out.extend(encoded.iter().map(|&b| b as char));

    Ok(out)
}

/// Hashes `password`, drawing a random salt from `entropy` when `salt` is
/// `None` or empty.
///
/// # Errors
///
/// - [`CryptError::SaltTooLong`] if `salt` exceeds 16 bytes
/// - [`CryptError::Entropy`] if a salt was needed and `entropy` failed
pub fn hash_with_entropy<P, E>(
    password: P,
    salt: Option<&str>,
    entropy: &E,
) -> Result<String, CryptError>
where
    P: AsRef<[u8]>,
    E: EntropySource,
{
    match salt {
        Some(salt) if !salt.is_empty() => hash_with_salt(password, salt),
        _ => {
            let salt = generate_salt(entropy)?;
            hash_with_salt(password, &salt)
        }
    }
}

/// Hashes `password` into `{CRYPT}$6$<salt>$<86 chars>`.
///
/// When `salt` is `None` or empty, 16 characters of `[./0-9A-Za-z]` are drawn
/// from the OS CSPRNG. A caller-supplied salt containing `$` yields a hash
/// that never verifies; see [`hash_with_salt`].
///
/// # Errors
///
/// - [`CryptError::SaltTooLong`] if `salt` exceeds 16 bytes
/// - [`CryptError::Entropy`] if the OS entropy source failed
///
/// # Example
///
/// ```rust
/// let stored = sha512crypt::hash("hunter2", Some("saltsalt")).expect("Failed to hash");
///
/// assert!(stored.starts_with("{CRYPT}$6$saltsalt$"));
/// assert!(sha512crypt::verify("hunter2", stored.as_str()));
/// ```
pub fn hash<P: AsRef<[u8]>>(password: P, salt: Option<&str>) -> Result<String, CryptError> {
    hash_with_entropy(password, salt, &SystemEntropySource {})
}

/// Whether `password` reproduces one stored candidate
fn matches_candidate(password: &[u8], candidate: &str) -> bool {
    if scheme_tag(candidate) != Some(CRYPT_TAG) {
        return false;
    }

    // A missing or empty salt could only be re-hashed under a fresh random
    // salt, which never reproduces the candidate.
    let Some(salt) = salt_field(candidate).filter(|salt| !salt.is_empty()) else {
        return false;
    };

    match hash_with_salt(password, salt) {
        Ok(recomputed) => recomputed == candidate,
        Err(_) => false,
    }
}

/// Verifies `password` against one or many stored hashes.
///
/// Candidates not tagged `{CRYPT}` are skipped. Returns `true` if any
/// candidate matches, `false` otherwise (including no candidates).
///
/// # Example
///
/// ```rust
/// let stored = sha512crypt::hash("hunter2", None).expect("Failed to hash");
/// let legacy = "{SSHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g=";
///
/// assert!(sha512crypt::verify("hunter2", &[legacy, stored.as_str()]));
/// assert!(!sha512crypt::verify("hunter3", &[legacy, stored.as_str()]));
/// ```
pub fn verify<'a, P, C>(password: P, candidates: C) -> bool
where
    P: AsRef<[u8]>,
    C: Into<Candidates<'a>>,
{
    let password = password.as_ref();
    let candidates: Candidates<'a> = candidates.into();

    candidates
        .iter()
        .any(|candidate| matches_candidate(password, candidate))
}

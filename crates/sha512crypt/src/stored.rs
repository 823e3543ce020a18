// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stored hash text format: `{CRYPT}$6$<salt>$<encoded digest>`.

use alloc::vec::Vec;
use core::fmt;

use crate::consts::{ENCODED_LEN, MAX_SALT_LEN, PREFIX};
use crate::encoding::is_b64_char;
use crate::error::CryptError;

/// Scheme tag of a stored hash: the text of the first non-empty `{...}`.
///
/// Text before the tag is ignored, so `"x{CRYPT}$6$..."` is tagged `CRYPT`.
pub fn scheme_tag(candidate: &str) -> Option<&str> {
    let mut rest = candidate;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after.find('}')?;

        if close > 0 {
            return Some(&after[..close]);
        }

        rest = after;
    }

    None
}

/// Salt field of a stored hash: the text between the second and third `$`
pub fn salt_field(candidate: &str) -> Option<&str> {
    candidate.split('$').nth(2)
}

/// Validated, borrowed view of a stored hash produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredHash<'a> {
    salt: &'a str,
    encoded: &'a str,
}

impl<'a> StoredHash<'a> {
    /// Parses `{CRYPT}$6$<salt>$<encoded>`.
    ///
    /// # Errors
    ///
    /// - [`CryptError::MalformedHash`] on a wrong prefix, a missing separator,
    ///   or an encoded digest that is not 86 crypt base64 characters
    /// - [`CryptError::SaltTooLong`] if the salt exceeds 16 bytes
    pub fn parse(stored: &'a str) -> Result<Self, CryptError> {
        let body = stored
            .strip_prefix(PREFIX)
            .ok_or(CryptError::MalformedHash)?;
        let (salt, encoded) = body.split_once('$').ok_or(CryptError::MalformedHash)?;

        if salt.len() > MAX_SALT_LEN {
            return Err(CryptError::SaltTooLong { len: salt.len() });
        }

        if encoded.len() != ENCODED_LEN || !encoded.bytes().all(is_b64_char) {
            return Err(CryptError::MalformedHash);
        }

        Ok(Self { salt, encoded })
    }

    /// Salt as stored
    pub fn salt(&self) -> &'a str {
        self.salt
    }

    /// 86-character encoded digest
    pub fn encoded(&self) -> &'a str {
        self.encoded
    }
}

impl fmt::Display for StoredHash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}${}", PREFIX, self.salt, self.encoded)
    }
}

/// One or many stored hashes to verify a password against.
///
/// Built from a single `&str`/`&String`, or from a slice, array or `Vec` of
/// string-likes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates<'a>(Vec<&'a str>);

impl<'a> Candidates<'a> {
    /// Iterate candidates in order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no candidates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Candidates<'a> {
    fn from(candidate: &'a str) -> Self {
        Self(alloc::vec![candidate])
    }
}

impl<'a> From<&'a alloc::string::String> for Candidates<'a> {
    fn from(candidate: &'a alloc::string::String) -> Self {
        Self(alloc::vec![candidate.as_str()])
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for Candidates<'a> {
    fn from(candidates: &'a [S]) -> Self {
        Self(candidates.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for Candidates<'a> {
    fn from(candidates: &'a [S; N]) -> Self {
        Self::from(candidates.as_slice())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for Candidates<'a> {
    fn from(candidates: &'a Vec<S>) -> Self {
        Self::from(candidates.as_slice())
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! sha512crypt password hashing with secure memory handling
//!
//! Produces and verifies `{CRYPT}$6$<salt>$<digest>` strings, the LDAP
//! flavour of the glibc `crypt(3)` SHA-512 scheme, at the default 5000
//! rounds. SHA-512 is implemented in pure Rust; all intermediate digests and
//! compression scratch are zeroized.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHA-512)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - Unix crypt using SHA-256 and SHA-512 (Ulrich Drepper)
//!   <https://www.akkadia.org/drepper/SHA-crypt.txt>
//!
//! ## Example
//!
//! ```rust
//! use sha512crypt::{hash, verify, CryptError};
//!
//! let stored = hash("mySuperSecretPassword", Some("myDopeCustomSalt")).unwrap();
//! assert_eq!(
//!     stored,
//!     "{CRYPT}$6$myDopeCustomSalt$4ENRn.vwcs09z0fjr6Jt3NMOFVkn.p9v7ilDcK/CwRnQm48Y5HawkiGivh4gBTLwSY4SQNfCAe05E1nCTpZ0u."
//! );
//! assert!(verify("mySuperSecretPassword", stored.as_str()));
//!
//! assert!(matches!(
//!     hash("pw", Some("saltLargerThan16Chars")),
//!     Err(CryptError::SaltTooLong { len: 21 })
//! ));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod crypt;
mod digest;
mod encoding;
mod error;
mod sha512;
mod stored;
mod word;

pub use consts::{CRYPT_TAG, ENCODED_LEN, HASH_LEN, MAX_SALT_LEN, PREFIX, ROUNDS};
pub use crypt::{hash, hash_with_entropy, hash_with_salt, verify};
pub use digest::sha512crypt_digest;
pub use encoding::{encode_digest, encode_digest_into, B64_ALPHABET};
pub use error::CryptError;
pub use sha512::{sha512, Sha512State};
pub use stored::{salt_field, scheme_tag, Candidates, StoredHash};

pub use sha512crypt_rand::{EntropyError, EntropySource, SystemEntropySource};

#[cfg(feature = "test-utils")]
pub use sha512crypt_rand::test_utils;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sha512crypt_rand::EntropyError;
use thiserror::Error;

/// sha512crypt error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptError {
    /// Salt exceeds 16 bytes
    #[error("the maximum length of salt is 16 characters (got {len})")]
    SaltTooLong {
        /// Length of the rejected salt in bytes
        len: usize,
    },

    /// Stored hash does not follow `{CRYPT}$6$<salt>$<86 chars>`
    #[error("malformed stored hash")]
    MalformedHash,

    /// Random salt could not be generated
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-512 output size in bytes
pub const HASH_LEN: usize = 64;

/// SHA-512 block size in bytes
pub const BLOCK_LEN: usize = 128;

/// Number of stretching rounds (the sha512crypt default; `rounds=N` is not supported)
pub const ROUNDS: u32 = 5000;

/// Maximum salt length in bytes
pub const MAX_SALT_LEN: usize = 16;

/// Length of the encoded digest in a stored hash
pub const ENCODED_LEN: usize = 86;

/// Scheme tag between the braces of a stored hash
pub const CRYPT_TAG: &str = "CRYPT";

/// Prefix of every stored hash produced by this crate
pub const PREFIX: &str = "{CRYPT}$6$";

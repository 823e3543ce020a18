// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sha512crypt_rand
//!
//! Entropy sources and salt generation for the sha512crypt password hashing
//! scheme.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`generate_salt`]: 16-character salt over the crypt alphabet `[./0-9A-Za-z]`
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use sha512crypt_rand::{generate_salt, SystemEntropySource, CRYPT_ALPHABET};
//!
//! let salt = generate_salt(&SystemEntropySource {}).expect("Failed to generate salt");
//!
//! assert_eq!(salt.len(), 16);
//! assert!(salt.bytes().all(|b| CRYPT_ALPHABET.contains(&b)));
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASM: `crypto.getRandomValues` (`wasm_js` backend)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod salt;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use salt::{generate_salt, generate_salt_into, CRYPT_ALPHABET, SALT_LEN};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

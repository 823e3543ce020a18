// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod digest;
mod encoding;

/// Decode a lowercase hex string (test vectors only)
pub(crate) fn hex(s: &str) -> alloc::vec::Vec<u8> {
    assert_eq!(s.len() % 2, 0, "odd hex length");

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("Failed to parse hex"))
        .collect()
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word64 - 64-bit word wrapper with guaranteed zeroization on drop.
//!
//! Native `u64` arithmetic already wraps modulo 2^64, so carries between
//! 32-bit halves never need to be tracked by hand. The wrapper keeps the
//! SHA-512 scratch registers in one place so they are wiped with the state.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// 64-bit word wrapper with guaranteed zeroization.
///
/// - `#[repr(transparent)]` ensures same layout as u64
/// - Drop zeroizes via `ZeroizeOnDrop`
/// - Mutating operations are `_assign` / `set_*` variants writing in place
#[derive(Default, Zeroize, ZeroizeOnDrop)]
#[repr(transparent)]
pub struct Word64(u64);

impl Word64 {
    /// Create new Word64 with given value
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create zero Word64
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Overwrite with a raw value
    #[inline(always)]
    pub fn set(&mut self, value: u64) {
        self.0 = value;
    }

    /// Copy value from another Word64
    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word64) {
        self.0 = src.0;
    }

    /// Load from 8 big-endian bytes
    #[inline(always)]
    pub fn load_be(&mut self, bytes: &[u8; 8]) {
        self.0 = u64::from_be_bytes(*bytes);
    }

    /// Store as 8 big-endian bytes
    #[inline(always)]
    pub fn store_be(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.0.to_be_bytes());
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Shifts and rotations
    // ═══════════════════════════════════════════════════════════════════════════

    /// ROTR^n(self), n in [1, 63]
    #[inline(always)]
    pub fn rotr(&self, n: u32) -> u64 {
        debug_assert!((1..64).contains(&n));
        self.0.rotate_right(n)
    }

    /// SHR^n(self), zero-filled
    #[inline(always)]
    pub fn shr(&self, n: u32) -> u64 {
        self.0 >> n
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Wrapping addition
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (mod 2^64)
    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word64) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// out = a + b (mod 2^64)
    #[inline(always)]
    pub fn set_sum2(out: &mut Word64, a: &Word64, b: &Word64) {
        out.0 = a.0.wrapping_add(b.0);
    }

    /// out = a + b + c + d (mod 2^64)
    #[inline(always)]
    pub fn set_sum4(out: &mut Word64, a: &Word64, b: &Word64, c: &Word64, d: &Word64) {
        out.0 = a.0.wrapping_add(b.0).wrapping_add(c.0).wrapping_add(d.0);
    }

    /// out = a + b + c + d + e (mod 2^64)
    #[inline(always)]
    pub fn set_sum5(
        out: &mut Word64,
        a: &Word64,
        b: &Word64,
        c: &Word64,
        d: &Word64,
        e: &Word64,
    ) {
        out.0 = a
            .0
            .wrapping_add(b.0)
            .wrapping_add(c.0)
            .wrapping_add(d.0)
            .wrapping_add(e.0);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-512 functions (FIPS 180-4 Section 4.1.3)
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    pub fn set_ch(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        out.0 = (x.0 & y.0) ^ (!x.0 & z.0);
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    #[inline(always)]
    pub fn set_maj(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        out.0 = (x.0 & y.0) ^ (x.0 & z.0) ^ (y.0 & z.0);
    }

    /// Σ0(x) = ROTR^28(x) ⊕ ROTR^34(x) ⊕ ROTR^39(x)
    #[inline(always)]
    pub fn set_bsig0(out: &mut Word64, x: &Word64) {
        out.0 = x.rotr(28) ^ x.rotr(34) ^ x.rotr(39);
    }

    /// Σ1(x) = ROTR^14(x) ⊕ ROTR^18(x) ⊕ ROTR^41(x)
    #[inline(always)]
    pub fn set_bsig1(out: &mut Word64, x: &Word64) {
        out.0 = x.rotr(14) ^ x.rotr(18) ^ x.rotr(41);
    }

    /// σ0(x) = ROTR^1(x) ⊕ ROTR^8(x) ⊕ SHR^7(x)
    #[inline(always)]
    pub fn set_ssig0(out: &mut Word64, x: &Word64) {
        out.0 = x.rotr(1) ^ x.rotr(8) ^ x.shr(7);
    }

    /// σ1(x) = ROTR^19(x) ⊕ ROTR^61(x) ⊕ SHR^6(x)
    #[inline(always)]
    pub fn set_ssig1(out: &mut Word64, x: &Word64) {
        out.0 = x.rotr(19) ^ x.rotr(61) ^ x.shr(6);
    }

    /// Get inner u64 value for testing/assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u64(&self) -> u64 {
        self.0
    }
}

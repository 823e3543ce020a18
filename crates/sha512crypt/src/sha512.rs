// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 implementation per FIPS 180-4 Section 6.4

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN};
use crate::word::Word64;

/// SHA-512 constants K per FIPS 180-4 Section 4.2.3
/// First 64 bits of fractional parts of cube roots of first 80 primes
const K: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

/// Initial hash values H(0) per FIPS 180-4 Section 5.3.5
/// First 64 bits of fractional parts of square roots of first 8 primes
const H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// SHA-512 streaming state.
///
/// Working variables, the message schedule and block buffers live in the
/// struct so a single `zeroize` (run on drop) wipes everything.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha512State {
    /// Hash state H(i)
    h: [Word64; 8],
    /// Message schedule W[0..79]
    w: [Word64; 80],

    wv_a: Word64,
    wv_b: Word64,
    wv_c: Word64,
    wv_d: Word64,
    wv_e: Word64,
    wv_f: Word64,
    wv_g: Word64,
    wv_h: Word64,

    /// T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
    t1: Word64,
    /// T2 = Σ0(a) + Maj(a,b,c)
    t2: Word64,
    /// Σ0 / σ0 scratch
    sig0: Word64,
    /// Σ1 / σ1 scratch
    sig1: Word64,
    /// Ch / Maj scratch
    logic: Word64,
    /// K[t]
    k: Word64,

    /// Input buffer for partial blocks
    buffer: [u8; BLOCK_LEN],
    /// Block under compression (avoids aliasing `buffer`)
    tmp_block: [u8; BLOCK_LEN],
    /// Big-endian word staging
    tmp_word: [u8; 8],
    /// Current position in buffer
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u128,
}

impl Default for Sha512State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512State {
    /// Create new SHA-512 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: core::array::from_fn(|i| Word64::new(H0[i])),
            w: core::array::from_fn(|_| Word64::zero()),
            wv_a: Word64::zero(),
            wv_b: Word64::zero(),
            wv_c: Word64::zero(),
            wv_d: Word64::zero(),
            wv_e: Word64::zero(),
            wv_f: Word64::zero(),
            wv_g: Word64::zero(),
            wv_h: Word64::zero(),
            t1: Word64::zero(),
            t2: Word64::zero(),
            sig0: Word64::zero(),
            sig1: Word64::zero(),
            logic: Word64::zero(),
            k: Word64::zero(),
            buffer: [0u8; BLOCK_LEN],
            tmp_block: [0u8; BLOCK_LEN],
            tmp_word: [0u8; 8],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorb `data`
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u128;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.tmp_block.copy_from_slice(&self.buffer);
                self.compress();
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        // Full blocks straight from the input
        while offset + BLOCK_LEN <= data.len() {
            self.tmp_block
                .copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            self.compress();
            offset += BLOCK_LEN;
        }

        // Buffer the tail
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Absorb `count` copies of `data`
    pub fn update_repeated(&mut self, data: &[u8], count: usize) {
        for _ in 0..count {
            self.update(data);
        }
    }

    /// Absorb `data` repeated cyclically and cut to exactly `len` bytes
    pub fn update_extended(&mut self, data: &[u8], len: usize) {
        if data.is_empty() {
            return;
        }

        self.update_repeated(data, len / data.len());
        self.update(&data[..len % data.len()]);
    }

    /// Pad, compress the final block(s) and write H(N) big-endian into `out`
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        let bit_len = self.total_len * 8;

        // 1 bit followed by zeros
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 128-bit length
        if self.buffer_len > BLOCK_LEN - 16 {
            self.buffer[self.buffer_len..].fill(0);

            self.tmp_block.copy_from_slice(&self.buffer);
            self.compress();
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 16].fill(0);
        self.buffer[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());

        self.tmp_block.copy_from_slice(&self.buffer);
        self.compress();

        for (word, chunk) in self.h.iter().zip(out.chunks_exact_mut(8)) {
            word.store_be(chunk);
        }
        // Drop zeroizes the rest
    }

    /// Compress `tmp_block` into H per FIPS 180-4 Section 6.4.2
    fn compress(&mut self) {
        // W[0..15] from the block (big-endian)
        for t in 0..16 {
            self.tmp_word
                .copy_from_slice(&self.tmp_block[t * 8..(t + 1) * 8]);
            self.w[t].load_be(&self.tmp_word);
        }
        self.tmp_word.zeroize();

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..80 {
            Word64::set_ssig1(&mut self.sig1, &self.w[t - 2]);
            Word64::set_ssig0(&mut self.sig0, &self.w[t - 15]);

            let (prev, rest) = self.w.split_at_mut(t);
            Word64::set_sum4(&mut rest[0], &self.sig1, &prev[t - 7], &self.sig0, &prev[t - 16]);
        }

        self.wv_a.copy_from(&self.h[0]);
        self.wv_b.copy_from(&self.h[1]);
        self.wv_c.copy_from(&self.h[2]);
        self.wv_d.copy_from(&self.h[3]);
        self.wv_e.copy_from(&self.h[4]);
        self.wv_f.copy_from(&self.h[5]);
        self.wv_g.copy_from(&self.h[6]);
        self.wv_h.copy_from(&self.h[7]);

        for t in 0..80 {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            Word64::set_bsig1(&mut self.sig1, &self.wv_e);
            Word64::set_ch(&mut self.logic, &self.wv_e, &self.wv_f, &self.wv_g);
            self.k.set(K[t]);
            Word64::set_sum5(
                &mut self.t1,
                &self.wv_h,
                &self.sig1,
                &self.logic,
                &self.k,
                &self.w[t],
            );

            // T2 = Σ0(a) + Maj(a,b,c)
            Word64::set_bsig0(&mut self.sig0, &self.wv_a);
            Word64::set_maj(&mut self.logic, &self.wv_a, &self.wv_b, &self.wv_c);
            Word64::set_sum2(&mut self.t2, &self.sig0, &self.logic);

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv_h.copy_from(&self.wv_g);
            self.wv_g.copy_from(&self.wv_f);
            self.wv_f.copy_from(&self.wv_e);
            Word64::set_sum2(&mut self.wv_e, &self.wv_d, &self.t1);
            self.wv_d.copy_from(&self.wv_c);
            self.wv_c.copy_from(&self.wv_b);
            self.wv_b.copy_from(&self.wv_a);
            Word64::set_sum2(&mut self.wv_a, &self.t1, &self.t2);
        }

        // H(i) = H(i-1) + working variables
        self.h[0].wrapping_add_assign(&self.wv_a);
        self.h[1].wrapping_add_assign(&self.wv_b);
        self.h[2].wrapping_add_assign(&self.wv_c);
        self.h[3].wrapping_add_assign(&self.wv_d);
        self.h[4].wrapping_add_assign(&self.wv_e);
        self.h[5].wrapping_add_assign(&self.wv_f);
        self.h[6].wrapping_add_assign(&self.wv_g);
        self.h[7].wrapping_add_assign(&self.wv_h);

        self.wipe_scratch();
    }

    /// Zeroize everything except H(i) and the pending input
    fn wipe_scratch(&mut self) {
        self.w.zeroize();
        self.wv_a.zeroize();
        self.wv_b.zeroize();
        self.wv_c.zeroize();
        self.wv_d.zeroize();
        self.wv_e.zeroize();
        self.wv_f.zeroize();
        self.wv_g.zeroize();
        self.wv_h.zeroize();
        self.t1.zeroize();
        self.t2.zeroize();
        self.sig0.zeroize();
        self.sig1.zeroize();
        self.logic.zeroize();
        self.k.zeroize();
        self.tmp_block.zeroize();
    }

    /// Whether all per-block scratch is zero
    #[cfg(test)]
    pub(crate) fn scratch_is_wiped(&self) -> bool {
        self.w.iter().all(|w| w.as_u64() == 0)
            && [
                &self.wv_a, &self.wv_b, &self.wv_c, &self.wv_d, &self.wv_e, &self.wv_f,
                &self.wv_g, &self.wv_h, &self.t1, &self.t2, &self.sig0, &self.sig1,
                &self.logic, &self.k,
            ]
            .iter()
            .all(|w| w.as_u64() == 0)
            && self.tmp_block.iter().all(|b| *b == 0)
    }
}

/// One-shot SHA-512 of `input`
pub fn sha512(input: &[u8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    let mut state = Sha512State::new();
    state.update(input);
    state.finalize(&mut out);
    out
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for the sha512crypt key-stretching digest
//
// References:
// [1] Unix crypt using SHA-256 and SHA-512 (Ulrich Drepper)
//     https://www.akkadia.org/drepper/SHA-crypt.txt
//     Test vectors at the end of the document

use super::hex;
use crate::consts::ROUNDS;
use crate::digest::{repeat_and_truncate, sha512crypt_digest};
use crate::encoding::encode_digest;

#[test]
fn test_sha512crypt_digest_glibc_vector() {
    // crypt("test", "$6$G/gkPn17kHYo0gTF$") at the default 5000 rounds
    let digest = sha512crypt_digest(b"test", b"G/gkPn17kHYo0gTF", ROUNDS);

    assert_eq!(
        encode_digest(&digest),
        "xhDFU0QYExdMH2ghOWKrrVtu1BuTpNMSJURCXk43.EYekmK8iwV6RNqftUUC8mqDel1J7m3JEbUkbu4YyqSyv/"
    );
}

#[test]
fn test_sha512crypt_digest_drepper_custom_rounds() {
    // "$6$rounds=1400$anotherlongsalts$..." (salt already cut to 16 bytes)
    let digest = sha512crypt_digest(
        b"a very much longer text to encrypt.  This one even stretches over morethan one line.",
        b"anotherlongsalts",
        1400,
    );

    assert_eq!(
        encode_digest(&digest),
        "POfYwTEok97VWcjxIiSOjiykti.o/pQs.wPvMxQ6Fm7I6IoYN3CmLs66x9t0oSwbtEW7o7UmJEiDwGqd8p4ur1"
    );
}

#[test]
fn test_sha512crypt_digest_single_round() {
    let digest = sha512crypt_digest(b"test", b"G/gkPn17kHYo0gTF", 1);

    let expected = hex(
        "66401bbec2e24568817685fe183ff9928c5a309bdad7d66df83229dabf1f24bb\
         142264f9364bd94a23eccf3e7f4730f2ac4a0ee0f5102bb4b79798a026e75fd8",
    );

    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_sha512crypt_digest_empty_password_and_salt() {
    let digest = sha512crypt_digest(b"", b"", ROUNDS);

    let expected = hex(
        "ba8d0a85628a0015a55dbcdada1105fcaf5f4a0d63da1306c7ad947e400ada6b\
         07d3c9dfb5b285a8f84501a911084128a3672631dd4b7a31fc62d391d1470ee9",
    );

    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_sha512crypt_digest_is_deterministic() {
    let a = sha512crypt_digest(b"hunter2", b"saltsalt", 10);
    let b = sha512crypt_digest(b"hunter2", b"saltsalt", 10);

    assert_eq!(a, b);
}

#[test]
fn test_sha512crypt_digest_depends_on_every_input() {
    let base = sha512crypt_digest(b"hunter2", b"saltsalt", 10);

    assert_ne!(base, sha512crypt_digest(b"hunter3", b"saltsalt", 10));
    assert_ne!(base, sha512crypt_digest(b"hunter2", b"saltsalT", 10));
    assert_ne!(base, sha512crypt_digest(b"hunter2", b"saltsalt", 11));
}

#[test]
fn test_repeat_and_truncate() {
    let digest: [u8; 64] = core::array::from_fn(|i| i as u8);

    assert!(repeat_and_truncate(&digest, 0).is_empty());
    assert_eq!(repeat_and_truncate(&digest, 5).as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(repeat_and_truncate(&digest, 64).as_slice(), digest.as_slice());

    let long = repeat_and_truncate(&digest, 130);
    assert_eq!(long.len(), 130);
    assert_eq!(&long[..64], digest.as_slice());
    assert_eq!(&long[64..128], digest.as_slice());
    assert_eq!(&long[128..], &[0, 1]);
}

use std::env;
use std::path::Path;
use std::str;

use crypto_bytes::write_u32_be;
use crypto_tests::hash::{main_test, one_million_a, Test};
use crypto_tests::nsrl;

use consts::H;
use super::{digest, hex_digest, sha1_digest, sha1_digest_block, DigestError,
            DIGEST_LEN, HEX_DIGEST_LEN};

#[test]
fn sha1_main() {
    // Messages from FIPS 180-1 plus examples from wikipedia
    let tests = new_tests!("test1", "test2", "test3", "test4", "test5",
                           "test6");
    main_test(digest, &tests);
}

#[test]
fn sha1_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a(digest, output);
}

#[test]
fn sha1_padding_boundaries() {
    // Each length exercises a different padding branch: empty message,
    // longest tail whose length field still fits the final block (55),
    // shortest that pushes it into a second block (56), one under a block
    // boundary, an exact block, and one past it.
    let cases: [(usize, &'static str); 6] =
        [(0, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
         (55, "c1c8bbdc22796e28c0e15163d20899b65621d65a"),
         (56, "c2db330f6083854c99d4b5bfb6e8f29f201be699"),
         (63, "03f09f5b158a7a8cdad920bddc29b81c18a551f5"),
         (64, "0098ba824b5c16427bd7a1122a5a442a25ec644d"),
         (65, "11655326c708d70319be2610e8a57d9a5b959d3b")];

    for &(len, expected) in cases.iter() {
        let input = vec![b'a'; len];
        let out = hex_digest(&input);
        assert_eq!(str::from_utf8(&out[..]).unwrap(), expected,
                   "mismatch at length {}", len);
    }
}

#[test]
fn sha1_hex_matches_binary() {
    let tests = new_tests!("test1", "test2", "test3", "test4", "test5",
                           "test6");
    for t in tests.iter() {
        let bin = digest(t.input);
        let hex_out = hex_digest(t.input);

        assert_eq!(hex_out.len(), HEX_DIGEST_LEN);
        assert_eq!(hex::encode(&bin[..]).as_bytes(), &hex_out[..],
                   "hex and binary outputs disagree for {}", t.name);
    }
}

#[test]
fn sha1_both_outputs_one_call() {
    let mut bin = [0u8; DIGEST_LEN];
    let mut hex_out = [0u8; HEX_DIGEST_LEN];

    sha1_digest(b"abc", Some(&mut bin), Some(&mut hex_out)).unwrap();
    assert_eq!(hex::encode(&bin[..]),
               "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(str::from_utf8(&hex_out[..]).unwrap(),
               "a9993e364706816aba3e25717850c26c9cd0d89d");

    // Either output alone is a valid request
    let mut bin_only = [0u8; DIGEST_LEN];
    sha1_digest(b"abc", Some(&mut bin_only), None).unwrap();
    assert_eq!(bin_only, bin);

    let mut hex_only = [0u8; HEX_DIGEST_LEN];
    sha1_digest(b"abc", None, Some(&mut hex_only)).unwrap();
    assert_eq!(hex_only[..], hex_out[..]);
}

#[test]
fn sha1_no_output_requested() {
    assert_eq!(sha1_digest(b"abc", None, None),
               Err(DigestError::InvalidArguments));
}

#[test]
fn sha1_avalanche() {
    // Not a statistical test; a digest that ignores part of its input
    // fails it.
    let base = vec![0u8; 150];
    let reference = digest(&base);

    for &idx in [0usize, 70, 149].iter() {
        let mut flipped = base.clone();
        flipped[idx] ^= 0x01;
        assert!(digest(&flipped)[..] != reference[..],
                "flipping byte {} left the digest unchanged", idx);
    }
}

#[test]
fn sha1_single_block() {
    // "abc" padded by hand to a single block: 0x80 marker, zeros, then the
    // 24-bit message length in the trailing big-endian u64
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[63] = 24;

    let mut state = H;
    sha1_digest_block(&mut state, &block);

    let mut out = [0u8; DIGEST_LEN];
    write_u32_be(&mut out[0..4], state[0]);
    write_u32_be(&mut out[4..8], state[1]);
    write_u32_be(&mut out[8..12], state[2]);
    write_u32_be(&mut out[12..16], state[3]);
    write_u32_be(&mut out[16..20], state[4]);

    assert_eq!(hex::encode(&out[..]),
               "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_nsrl_vectors() {
    // Opt-in: point NSRL_DIR at an unzipped copy of
    // http://www.nsrl.nist.gov/testdata/NSRLvectors.zip
    let dir = match env::var_os("NSRL_DIR") {
        Some(dir) => dir,
        None => return,
    };

    let vectors = nsrl::load_vectors(Path::new(&dir)).unwrap();
    assert!(!vectors.is_empty());

    for v in vectors.iter() {
        let out = hex_digest(&v.data);
        assert_eq!(str::from_utf8(&out[..]).unwrap(), v.hex);
    }
}

//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! SHA-1 here is a one-shot digest: the entire message is presented as a
//! single contiguous buffer, and one call produces the 20-byte binary
//! digest and/or its 40-character lowercase hex rendering. There is no
//! streaming interface; a caller hashing a stream must buffer it first.
//!
//! # Usage
//!
//! An example of hashing a buffer:
//!
//! ```rust,ignore
//! extern crate sha1;
//!
//! let digest = sha1::digest(b"The quick brown fox jumps over the lazy dog");
//!
//! let hex = sha1::hex_digest(b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(&hex[..],
//!            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12".as_bytes());
//! ```
//!
//! Callers that own the output buffers can request both forms in a single
//! call through `sha1_digest`; requesting neither is the one error case.

#![no_std]

extern crate crypto_bytes;

#[cfg(test)]
#[macro_use]
extern crate std;
#[cfg(test)]
#[macro_use]
extern crate crypto_tests;
#[cfg(test)]
extern crate hex;

use core::fmt;

use crypto_bytes::{copy_memory, read_u32v_be, write_u32_be, write_u64_be};

mod consts;
use consts::{BLOCK_LEN, H, K, STATE_LEN, WORK_LEN};

/// Number of bytes in a binary digest.
pub const DIGEST_LEN: usize = 20;

/// Number of characters in the hex rendering of a digest.
pub const HEX_DIGEST_LEN: usize = 40;

/// The single failure mode of a digest call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Neither a binary nor a hex output destination was requested.
    InvalidArguments,
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DigestError::InvalidArguments => f.write_str("no output requested"),
        }
    }
}

fn choose(x: u32, y: u32, z: u32) -> u32 { z ^ (x & (y ^ z)) }

fn parity(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }

fn majority(x: u32, y: u32, z: u32) -> u32 { (x & y) ^ (x & z) ^ (y & z) }

/// Nonlinear mixing function for each quartile of the 80 rounds; `K` holds
/// the matching additive constants.
const ROUND_FN: [fn(u32, u32, u32) -> u32; 4] = [choose,
                                                 parity,
                                                 majority,
                                                 parity];

/// Process a block with the SHA-1 algorithm.
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN],
                             block: &[u32; BLOCK_LEN]) {
    let mut w = [0u32; WORK_LEN];
    w[..BLOCK_LEN].copy_from_slice(block);
    for t in BLOCK_LEN..WORK_LEN {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for t in 0..WORK_LEN {
        let quartile = t / 20;
        let tmp = a.rotate_left(5)
            .wrapping_add(ROUND_FN[quartile](b, c, d))
            .wrapping_add(e)
            .wrapping_add(K[quartile])
            .wrapping_add(w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a block with the SHA-1 algorithm.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 4);
    let mut block2 = [0u32; BLOCK_LEN];
    read_u32v_be(&mut block2[..], block);
    sha1_digest_block_u32(state, &block2);
}

/// Fold the whole message through the compression function. Whole blocks
/// are processed straight out of the caller's buffer; only the tail is
/// copied into a stack scratch, padded per FIPS 180-1 (a 0x80 byte, zeros
/// to 56 mod 64, then the message length in bits as a big-endian u64).
fn digest_state(data: &[u8]) -> [u32; STATE_LEN] {
    let mut state = H;

    let partial = data.len() % 64;
    let aligned = data.len() - partial;
    for block in data[..aligned].chunks(64) {
        sha1_digest_block(&mut state, block);
    }

    // The padded tail spans one block, or two when fewer than eight bytes
    // remain after the 0x80 marker for the length field.
    let mut tail = [0u8; 128];
    copy_memory(&data[aligned..], &mut tail[..partial]);
    tail[partial] = 0x80;
    let tail_len = if partial < 56 { 64 } else { 128 };
    write_u64_be(&mut tail[tail_len - 8..tail_len], (data.len() as u64) << 3);
    for block in tail[..tail_len].chunks(64) {
        sha1_digest_block(&mut state, block);
    }

    state
}

const HEX_CHARS: &'static [u8; 16] = b"0123456789abcdef";

fn write_hex(digest: &[u8; DIGEST_LEN], out: &mut [u8; HEX_DIGEST_LEN]) {
    for (idx, byte) in digest.iter().enumerate() {
        out[idx * 2] = HEX_CHARS[(byte >> 4) as usize];
        out[idx * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
}

/// Compute the SHA-1 digest of `data` and return it as 20 bytes, each
/// state word serialized most-significant byte first.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let state = digest_state(data);

    let mut out = [0u8; DIGEST_LEN];
    write_u32_be(&mut out[0..4], state[0]);
    write_u32_be(&mut out[4..8], state[1]);
    write_u32_be(&mut out[8..12], state[2]);
    write_u32_be(&mut out[12..16], state[3]);
    write_u32_be(&mut out[16..20], state[4]);
    out
}

/// Compute the SHA-1 digest of `data` and return it as 40 lowercase hex
/// characters, two per digest byte.
pub fn hex_digest(data: &[u8]) -> [u8; HEX_DIGEST_LEN] {
    let mut out = [0u8; HEX_DIGEST_LEN];
    write_hex(&digest(data), &mut out);
    out
}

/// Compute the SHA-1 digest of `data`, writing the binary digest and/or
/// its hex rendering into the requested destinations.
///
/// At least one destination must be supplied; a call with neither fails
/// with `DigestError::InvalidArguments` before any computation. The input
/// is borrowed only for the duration of the call and never modified.
pub fn sha1_digest(data: &[u8],
                   digest_out: Option<&mut [u8; DIGEST_LEN]>,
                   hexdigest_out: Option<&mut [u8; HEX_DIGEST_LEN]>)
                   -> Result<(), DigestError> {
    if digest_out.is_none() && hexdigest_out.is_none() {
        return Err(DigestError::InvalidArguments);
    }

    let bin = digest(data);
    if let Some(out) = digest_out {
        *out = bin;
    }
    if let Some(out) = hexdigest_out {
        write_hex(&bin, out);
    }
    Ok(())
}

#[cfg(test)]
mod tests;

// Constants for the SHA-1 digest function

pub const STATE_LEN: usize = 5;
pub const BLOCK_LEN: usize = 16;
pub const WORK_LEN: usize = 80;

/// Initial values of the five state words
pub const H: [u32; STATE_LEN] = [0x67452301,
                                 0xEFCDAB89,
                                 0x98BADCFE,
                                 0x10325476,
                                 0xC3D2E1F0];

/// Additive round constants, one per quartile of the 80 rounds
pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

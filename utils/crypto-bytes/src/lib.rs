#![no_std]

/// Copy all of `src` into the front of `dst`. `dst` must be at least as
/// long as `src`.
#[inline]
pub fn copy_memory(src: &[u8], dst: &mut [u8]) {
    assert!(dst.len() >= src.len());
    dst[..src.len()].copy_from_slice(src);
}

/// Write a u32 into a slice of 4 bytes in big-endian format.
pub fn write_u32_be(dst: &mut [u8], input: u32) {
    assert_eq!(dst.len(), 4);
    dst.copy_from_slice(&input.to_be_bytes());
}

/// Write a u64 into a slice of 8 bytes in big-endian format.
pub fn write_u64_be(dst: &mut [u8], input: u64) {
    assert_eq!(dst.len(), 8);
    dst.copy_from_slice(&input.to_be_bytes());
}

/// Read a vector of big-endian u32s from a slice of bytes.
pub fn read_u32v_be(dst: &mut [u32], input: &[u8]) {
    assert_eq!(dst.len() * 4, input.len());
    for (x, chunk) in dst.iter_mut().zip(input.chunks(4)) {
        *x = (chunk[0] as u32) << 24 | (chunk[1] as u32) << 16 |
             (chunk[2] as u32) << 8 | (chunk[3] as u32);
    }
}

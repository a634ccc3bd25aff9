//! 4bpp pixel packing
//!
//! Two pixel indices per byte, first pixel in the high nibble, in row-major
//! order. An odd trailing pixel is paired with index 0.

use crate::hardware::{BITS_PER_PIXEL, INDEX_MASK, PIXELS_PER_BYTE};

/// Pack slot indices two per byte
pub fn pack_4bpp(indices: &[u8]) -> Vec<u8> {
    indices
        .chunks(PIXELS_PER_BYTE)
        .map(|pair| {
            let hi = pair[0] & INDEX_MASK;
            let lo = pair.get(1).map_or(0, |&p| p & INDEX_MASK);
            (hi << BITS_PER_PIXEL) | lo
        })
        .collect()
}

/// Unpack `pixel_count` indices, dropping the padding nibble if any
pub fn unpack_4bpp(bytes: &[u8], pixel_count: usize) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&b| [b >> BITS_PER_PIXEL, b & INDEX_MASK])
        .take(pixel_count)
        .collect()
}

/// Packed byte length for `pixel_count` pixels
pub fn packed_len(pixel_count: usize) -> usize {
    pixel_count.div_ceil(PIXELS_PER_BYTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_pairs() {
        assert_eq!(pack_4bpp(&[1, 2, 15, 0, 6, 7]), vec![0x12, 0xF0, 0x67]);
    }

    #[test]
    fn test_odd_tail_padded_with_zero() {
        assert_eq!(pack_4bpp(&[3, 4, 5]), vec![0x34, 0x50]);
        assert_eq!(pack_4bpp(&[9]), vec![0x90]);
        assert!(pack_4bpp(&[]).is_empty());
    }

    #[test]
    fn test_out_of_range_indices_masked() {
        assert_eq!(pack_4bpp(&[0x1F, 0x2A]), vec![0xFA]);
    }

    #[test]
    fn test_unpack_restores_indices() {
        let indices: Vec<u8> = (0..33).map(|i| (i * 7 % 16) as u8).collect();
        let packed = pack_4bpp(&indices);
        assert_eq!(packed.len(), packed_len(indices.len()));
        assert_eq!(packed.len(), 17);
        assert_eq!(unpack_4bpp(&packed, indices.len()), indices);

        // The padding nibble is there if asked for
        let mut padded = indices.clone();
        padded.push(0);
        assert_eq!(unpack_4bpp(&packed, 34), padded);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(32 * 32), 512);
        assert_eq!(packed_len(5 * 5), 13);
        assert_eq!(packed_len(0), 0);
    }
}

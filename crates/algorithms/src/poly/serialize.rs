//! Little-endian bit packing of coefficient streams.
//!
//! Every wire format in the scheme packs a run of d-bit values least
//! significant bit first, for d in {1, 4, 5, 10, 11} (compressed
//! polynomials and messages) and d = 12 (lossless NTT-form encoding).

/// Pack `vals` as consecutive d-bit little-endian fields into `out`.
///
/// Each value must fit in d bits and `out` must hold exactly
/// `vals.len() * d / 8` bytes.
pub(crate) fn pack_bits(vals: &[u16], d: u32, out: &mut [u8]) {
    debug_assert_eq!(out.len() * 8, vals.len() * d as usize);
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;
    let mut idx = 0;
    for &v in vals {
        debug_assert!((v as u32) < (1u32 << d));
        acc |= (v as u32) << acc_bits;
        acc_bits += d;
        while acc_bits >= 8 {
            out[idx] = acc as u8;
            idx += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    debug_assert_eq!(idx, out.len());
}

/// Inverse of [`pack_bits`]: read consecutive d-bit little-endian fields.
pub(crate) fn unpack_bits(bytes: &[u8], d: u32, vals: &mut [u16]) {
    debug_assert_eq!(bytes.len() * 8, vals.len() * d as usize);
    let mask = (1u32 << d) - 1;
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;
    let mut idx = 0;
    for v in vals.iter_mut() {
        while acc_bits < d {
            acc |= (bytes[idx] as u32) << acc_bits;
            idx += 1;
            acc_bits += 8;
        }
        *v = (acc & mask) as u16;
        acc >>= d;
        acc_bits -= d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_bit_layout_matches_wire_format() {
        // four 10-bit values occupy five bytes, lsb first
        let vals = [0x3FFu16, 0x001, 0x200, 0x155];
        let mut out = [0u8; 5];
        pack_bits(&vals, 10, &mut out);
        assert_eq!(out[0], 0xFF);
        assert_eq!(out[1], 0x07); // top 2 bits of v0, low bits of v1
        assert_eq!(out[2], 0x00);
        assert_eq!(out[3], 0x60); // bit 9 of v2, then bit 0 of v3
        assert_eq!(out[4], 0x55); // remaining bits of v3
        let mut back = [0u16; 4];
        unpack_bits(&out, 10, &mut back);
        assert_eq!(back, vals);
    }

    #[test]
    fn odd_widths_round_trip() {
        for d in [1u32, 4, 5, 10, 11, 12] {
            let n = 16usize;
            let mask = (1u32 << d) - 1;
            let vals: alloc::vec::Vec<u16> = (0..n)
                .map(|i| ((i as u32).wrapping_mul(2654435761) & mask) as u16)
                .collect();
            let mut packed = alloc::vec![0u8; n * d as usize / 8];
            pack_bits(&vals, d, &mut packed);
            let mut back = alloc::vec![0u16; n];
            unpack_bits(&packed, d, &mut back);
            assert_eq!(back, vals);
        }
    }
}

//! Lossy coefficient compression to d bits, d <= 11.
//!
//! Compression is round(x * 2^d / q) mod 2^d on canonical coefficients.
//! The division is carried out with a single fixed-point reciprocal,
//! which keeps the computation branch-free and exact for every
//! x in [0, q) and every width used by the scheme.

use qkem_params::mlkem::MLKEM_Q;

/// floor(2^34 / q). Large enough that the multiply-shift below computes
/// the rounded quotient exactly for all a = x * 2^d + (q+1)/2 with
/// x < q and d <= 11.
const COMPRESS_RECIP: u64 = 5160669;

/// Compress a canonical coefficient x in [0, q) to d bits.
#[inline]
pub(crate) fn compress_coeff(x: u16, d: u32) -> u16 {
    debug_assert!(x < MLKEM_Q);
    debug_assert!(d >= 1 && d <= 11);
    let mask = (1u64 << d) - 1;
    let a = ((x as u64) << d) + (MLKEM_Q as u64 + 1) / 2;
    ((a * COMPRESS_RECIP >> 34) & mask) as u16
}

/// Decompress a d-bit value back to a canonical coefficient:
/// round(y * q / 2^d).
#[inline]
pub(crate) fn decompress_coeff(y: u16, d: u32) -> u16 {
    debug_assert!((y as u32) < (1 << d));
    debug_assert!(d >= 1 && d <= 11);
    (((y as u32) * MLKEM_Q as u32 + (1 << (d - 1))) >> d) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress_reference(x: u16, d: u32) -> u16 {
        // round-half-up rational arithmetic, no reciprocal
        let numer = 2 * ((x as u64) << d) + MLKEM_Q as u64;
        ((numer / (2 * MLKEM_Q as u64)) & ((1 << d) - 1)) as u16
    }

    #[test]
    fn compress_matches_reference_exhaustively() {
        for d in 1..=11u32 {
            for x in 0..MLKEM_Q {
                assert_eq!(
                    compress_coeff(x, d),
                    compress_reference(x, d),
                    "x = {} d = {}",
                    x,
                    d
                );
            }
        }
    }

    #[test]
    fn decompress_is_near_inverse() {
        // |decompress(compress(x)) - x| <= ceil(q / 2^(d+1)) for all x
        for d in [1u32, 4, 5, 10, 11] {
            let bound = (MLKEM_Q as i32 + (1 << (d + 1)) - 1) / (1 << (d + 1));
            for x in 0..MLKEM_Q {
                let y = compress_coeff(x, d);
                let z = decompress_coeff(y, d) as i32;
                let dist = (z - x as i32)
                    .abs()
                    .min((z - x as i32 + MLKEM_Q as i32).abs())
                    .min((z - x as i32 - MLKEM_Q as i32).abs());
                assert!(dist <= bound, "x = {} d = {} dist = {}", x, d, dist);
            }
        }
    }

    #[test]
    fn compress_round_trips_on_codewords() {
        // compress(decompress(y)) == y for every d-bit codeword
        for d in [1u32, 4, 5, 10, 11] {
            for y in 0..(1u16 << d) {
                assert_eq!(compress_coeff(decompress_coeff(y, d), d), y);
            }
        }
    }
}

//! Coefficient sampling: uniform rejection from a XOF stream and
//! centered binomial noise from a PRF stream.

use super::{NttPolynomial, Polynomial};
use crate::hash::{prf, SHAKE128_RATE};
use qkem_params::mlkem::{MLKEM_N, MLKEM_Q};
use sha3::digest::XofReader;
use sha3::Shake128Reader;

/// Rejection-sample uniform coefficients in [0, q) from `buf`.
///
/// Consumes 3-byte groups as two little-endian 12-bit candidates and
/// keeps those below q. Returns the number of coefficients written.
pub(crate) fn rej_uniform(coeffs: &mut [i16], buf: &[u8]) -> usize {
    let mut written = 0;
    for chunk in buf.chunks_exact(3) {
        if written == coeffs.len() {
            break;
        }
        let v0 = (chunk[0] as u16) | (((chunk[1] as u16) & 0x0F) << 8);
        let v1 = ((chunk[1] as u16) >> 4) | ((chunk[2] as u16) << 4);
        if v0 < MLKEM_Q {
            coeffs[written] = v0 as i16;
            written += 1;
        }
        if written < coeffs.len() && v1 < MLKEM_Q {
            coeffs[written] = v1 as i16;
            written += 1;
        }
    }
    written
}

/// Sample a matrix entry with coefficients uniform in [0, q) by
/// squeezing `reader` one SHAKE-128 block at a time until all 256 are
/// filled. The output is interpreted directly in the NTT domain.
pub fn sample_uniform(reader: &mut Shake128Reader) -> NttPolynomial {
    let mut poly = NttPolynomial::zero();
    let mut filled = 0;
    let mut block = [0u8; SHAKE128_RATE];
    while filled < MLKEM_N {
        reader.read(&mut block);
        filled += rej_uniform(&mut poly.coeffs[filled..], &block);
    }
    poly
}

/// Continue filling `poly.coeffs[filled..]` from an already-squeezed
/// block, returning the new fill level. Used by batched matrix
/// expansion, where blocks for four polynomials arrive in lockstep.
pub fn absorb_uniform_block(
    poly: &mut NttPolynomial,
    filled: usize,
    block: &[u8; SHAKE128_RATE],
) -> usize {
    filled + rej_uniform(&mut poly.coeffs[filled..], block)
}

/// Centered binomial distribution with eta = 2, from 128 PRF bytes.
fn cbd2(buf: &[u8]) -> Polynomial {
    debug_assert_eq!(buf.len(), 128);
    let mut poly = Polynomial::zero();
    for (i, bytes) in buf.chunks_exact(4).enumerate() {
        let t = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            poly.coeffs[8 * i + j] = a - b;
        }
    }
    poly
}

/// Centered binomial distribution with eta = 3, from 192 PRF bytes.
fn cbd3(buf: &[u8]) -> Polynomial {
    debug_assert_eq!(buf.len(), 192);
    let mut poly = Polynomial::zero();
    for (i, bytes) in buf.chunks_exact(3).enumerate() {
        let t = (bytes[0] as u32) | ((bytes[1] as u32) << 8) | ((bytes[2] as u32) << 16);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            poly.coeffs[4 * i + j] = a - b;
        }
    }
    poly
}

/// Bytes of PRF output consumed by a centered binomial sample.
pub const fn cbd_prf_bytes(eta: usize) -> usize {
    64 * eta
}

/// Centered binomial sample from an already-expanded PRF buffer of
/// `64 * eta` bytes. Used by callers that batch PRF expansion.
pub fn sample_cbd_from_bytes(buf: &[u8], eta: usize) -> Polynomial {
    debug_assert!(eta == 2 || eta == 3);
    if eta == 2 {
        cbd2(buf)
    } else {
        cbd3(buf)
    }
}

/// Sample a noise polynomial from SHAKE-256(seed || nonce) with the
/// centered binomial distribution of parameter `eta` (2 or 3).
pub fn sample_cbd(seed: &[u8; 32], nonce: u8, eta: usize) -> Polynomial {
    debug_assert!(eta == 2 || eta == 3);
    let mut buf = [0u8; 192];
    let used = cbd_prf_bytes(eta);
    prf(&mut buf[..used], seed, nonce);
    sample_cbd_from_bytes(&buf[..used], eta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::xof;

    #[test]
    fn rej_uniform_keeps_only_below_q() {
        // candidates decode as 3328, 3329, 3329, 0: q-1 and 0 pass, q fails
        let buf = [0x00, 0x1D, 0xD0, 0x01, 0x0D, 0x00];
        let mut coeffs = [0i16; 8];
        let n = rej_uniform(&mut coeffs, &buf);
        assert_eq!(n, 2);
        assert_eq!(&coeffs[..2], &[3328, 0]);
    }

    #[test]
    fn sample_uniform_is_canonical_and_deterministic() {
        let seed = [9u8; 32];
        let a = sample_uniform(&mut xof(&seed, 0, 1));
        let b = sample_uniform(&mut xof(&seed, 0, 1));
        let c = sample_uniform(&mut xof(&seed, 1, 0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        for &v in a.coeffs.iter() {
            assert!((0..MLKEM_Q as i16).contains(&v));
        }
    }

    #[test]
    fn cbd_ranges() {
        let seed = [1u8; 32];
        let p2 = sample_cbd(&seed, 0, 2);
        for &v in p2.coeffs.iter() {
            assert!((-2..=2).contains(&v));
        }
        let p3 = sample_cbd(&seed, 0, 3);
        for &v in p3.coeffs.iter() {
            assert!((-3..=3).contains(&v));
        }
    }

    #[test]
    fn cbd_is_roughly_centered() {
        let seed = [5u8; 32];
        let mut sum = 0i32;
        for nonce in 0..16 {
            let p = sample_cbd(&seed, nonce, 2);
            sum += p.coeffs.iter().map(|&c| c as i32).sum::<i32>();
        }
        // 4096 draws of a distribution with variance 1
        assert!(sum.abs() < 400, "sum = {}", sum);
    }
}

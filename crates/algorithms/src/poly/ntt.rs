//! Number-theoretic transform over Z_q[X]/(X^256 + 1), q = 3329.
//!
//! q - 1 = 2^8 * 13, so only a primitive 256th root of unity exists and
//! the transform stops after seven layers: the result is 128 quadratic
//! residue polynomials modulo X^2 -/+ zeta. Products are taken blockwise
//! in that image, which is what makes the half-size multiplication cache
//! in [`super::MulCache`] possible.

use super::reduce::{barrett_reduce, fqmul};
use qkem_params::mlkem::{MLKEM_N, MLKEM_Q};

/// Primitive 256th root of unity mod q.
const ROOT_OF_UNITY: u32 = 17;

const fn bitrev7(x: u32) -> u32 {
    ((x & 1) << 6)
        | ((x & 2) << 4)
        | ((x & 4) << 2)
        | (x & 8)
        | ((x & 16) >> 2)
        | ((x & 32) >> 4)
        | ((x & 64) >> 6)
}

const fn pow_mod_q(base: u32, mut exp: u32) -> u32 {
    let mut acc = 1u32;
    let mut b = base % MLKEM_Q as u32;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = (acc * b) % MLKEM_Q as u32;
        }
        b = (b * b) % MLKEM_Q as u32;
        exp >>= 1;
    }
    acc
}

const fn build_zetas() -> [i16; 128] {
    let mut table = [0i16; 128];
    let mut i = 0;
    while i < 128 {
        // zeta^bitrev7(i) in Montgomery form, centered to (-q/2, q/2]
        let zeta = pow_mod_q(ROOT_OF_UNITY, bitrev7(i as u32));
        let mont = (zeta << 16) % MLKEM_Q as u32;
        table[i] = if mont > MLKEM_Q as u32 / 2 {
            (mont as i32 - MLKEM_Q as i32) as i16
        } else {
            mont as i16
        };
        i += 1;
    }
    table
}

/// Twiddle factors in Montgomery form, bit-reversed order.
pub(crate) const ZETAS: [i16; 128] = build_zetas();

/// Montgomery form of 128^(-1) * 2^16 mod q, folded into the final
/// butterfly layer of the inverse transform.
const F: i16 = 1441;

/// In-place forward transform, seven layers of Cooley-Tukey butterflies.
///
/// Input coefficients must be bounded by q in absolute value; output
/// coefficients are bounded by 8q. Callers normalize with a Barrett
/// reduction before serializing or caching.
pub(crate) fn ntt(coeffs: &mut [i16; MLKEM_N]) {
    let mut k = 1usize;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < MLKEM_N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, coeffs[j + len]);
                coeffs[j + len] = coeffs[j] - t;
                coeffs[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// In-place inverse transform, Gentleman-Sande butterflies with the
/// scaling factor folded into the last multiplication.
pub(crate) fn ntt_inverse(coeffs: &mut [i16; MLKEM_N]) {
    let mut k = 127usize;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < MLKEM_N {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = coeffs[j];
                coeffs[j] = barrett_reduce(t + coeffs[j + len]);
                coeffs[j + len] = fqmul(zeta, coeffs[j + len] - t);
            }
            start += 2 * len;
        }
        len <<= 1;
    }
    for c in coeffs.iter_mut() {
        *c = fqmul(*c, F);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeta_table_shape() {
        // zeta^bitrev7(0) = 1, so the first entry is 2^16 mod q centered
        assert_eq!(ZETAS[0], -1044);
        for (i, &z) in ZETAS.iter().enumerate() {
            assert!(z >= -1664 && z <= 1664, "zeta[{}] = {}", i, z);
            assert_ne!(z, 0);
        }
    }

    #[test]
    fn zetas_are_distinct() {
        for i in 0..128 {
            for j in (i + 1)..128 {
                assert_ne!(ZETAS[i], ZETAS[j]);
            }
        }
    }

    #[test]
    fn root_of_unity_has_order_256() {
        assert_eq!(pow_mod_q(ROOT_OF_UNITY, 128), MLKEM_Q as u32 - 1);
        assert_eq!(pow_mod_q(ROOT_OF_UNITY, 256), 1);
    }
}

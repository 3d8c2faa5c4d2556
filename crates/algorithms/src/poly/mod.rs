//! Polynomial arithmetic in R_q = Z_q[X]/(X^256 + 1).
//!
//! Two representations are kept apart at the type level: [`Polynomial`]
//! holds coefficients in the standard basis, [`NttPolynomial`] holds the
//! image under the seven-layer incomplete NTT. Multiplication only
//! exists in the NTT domain, and only through [`MulCache`], which
//! precomputes the twisted odd coefficients of one operand so repeated
//! products against it cost half the Montgomery multiplications.

mod compress;
mod ntt;
mod reduce;
pub mod sampling;
mod serialize;

use crate::error::{Error, Result};
use qkem_params::mlkem::{MLKEM_N, MLKEM_POLYBYTES, MLKEM_Q};
use zeroize::Zeroize;

use compress::{compress_coeff, decompress_coeff};
use ntt::ZETAS;
use reduce::{barrett_reduce, fqmul, montgomery_reduce, to_unsigned, MONT_SQUARED};
use serialize::{pack_bits, unpack_bits};

/// A polynomial in the standard coefficient basis.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    pub coeffs: [i16; MLKEM_N],
}

/// A polynomial in the NTT basis: 128 residues modulo X^2 -/+ zeta.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct NttPolynomial {
    pub coeffs: [i16; MLKEM_N],
}

/// Precomputed twisted odd coefficients of an NTT-domain polynomial,
/// one entry per quadratic block.
#[derive(Clone, Zeroize)]
pub struct MulCache {
    coeffs: [i16; MLKEM_N / 2],
}

impl Polynomial {
    pub fn zero() -> Self {
        Self {
            coeffs: [0; MLKEM_N],
        }
    }

    /// Forward NTT. Output coefficients are congruent but not
    /// normalized; call [`NttPolynomial::reduce`] before serializing or
    /// building a [`MulCache`].
    pub fn ntt(mut self) -> NttPolynomial {
        ntt::ntt(&mut self.coeffs);
        NttPolynomial {
            coeffs: self.coeffs,
        }
    }

    /// Normalize every coefficient into the centered range.
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Expand a 32-byte message to a polynomial: each bit becomes 0 or
    /// round(q/2), in constant time.
    pub fn from_msg(msg: &[u8; 32]) -> Self {
        let mut poly = Self::zero();
        for (i, byte) in msg.iter().enumerate() {
            for j in 0..8 {
                let bit = ((byte >> j) & 1) as i16;
                poly.coeffs[8 * i + j] = bit.wrapping_neg() & ((MLKEM_Q as i16 + 1) / 2);
            }
        }
        poly
    }

    /// Compress each coefficient to one bit and pack. Coefficients must
    /// be normalized.
    pub fn to_msg(&self) -> [u8; 32] {
        let mut bits = [0u16; MLKEM_N];
        for (bit, &c) in bits.iter_mut().zip(self.coeffs.iter()) {
            *bit = compress_coeff(to_unsigned(c), 1);
        }
        let mut msg = [0u8; 32];
        pack_bits(&bits, 1, &mut msg);
        msg
    }

    /// Compress coefficients to d bits each and pack into `out`, which
    /// must hold exactly 32 * d bytes. Coefficients must be normalized.
    pub fn compress_into(&self, d: u32, out: &mut [u8]) -> Result<()> {
        if out.len() != MLKEM_N / 8 * d as usize {
            return Err(Error::Length {
                context: "polynomial compression",
                expected: MLKEM_N / 8 * d as usize,
                actual: out.len(),
            });
        }
        let mut vals = [0u16; MLKEM_N];
        for (v, &c) in vals.iter_mut().zip(self.coeffs.iter()) {
            *v = compress_coeff(to_unsigned(c), d);
        }
        pack_bits(&vals, d, out);
        Ok(())
    }

    /// Unpack and decompress a polynomial from 32 * d bytes.
    pub fn decompress_from(bytes: &[u8], d: u32) -> Result<Self> {
        if bytes.len() != MLKEM_N / 8 * d as usize {
            return Err(Error::Length {
                context: "polynomial decompression",
                expected: MLKEM_N / 8 * d as usize,
                actual: bytes.len(),
            });
        }
        let mut vals = [0u16; MLKEM_N];
        unpack_bits(bytes, d, &mut vals);
        let mut poly = Self::zero();
        for (c, &v) in poly.coeffs.iter_mut().zip(vals.iter()) {
            *c = decompress_coeff(v, d) as i16;
        }
        Ok(poly)
    }
}

impl NttPolynomial {
    pub fn zero() -> Self {
        Self {
            coeffs: [0; MLKEM_N],
        }
    }

    /// Inverse NTT. The output carries an extra Montgomery factor R,
    /// which cancels the R^(-1) introduced by [`basemul_cached`];
    /// inverse-transforming a fresh pointwise product therefore yields
    /// the plain ring product.
    ///
    /// [`basemul_cached`]: Self::basemul_cached
    pub fn ntt_inverse(mut self) -> Polynomial {
        ntt::ntt_inverse(&mut self.coeffs);
        Polynomial {
            coeffs: self.coeffs,
        }
    }

    /// Normalize every coefficient into the centered range.
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Multiply every coefficient by R, cancelling the R^(-1) of a
    /// pointwise product that stays in the NTT domain.
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, MONT_SQUARED);
        }
    }

    /// Precompute the twisted odd coefficients for repeated
    /// multiplication against this polynomial. Coefficients must be
    /// normalized.
    pub fn mulcache(&self) -> MulCache {
        let mut cache = [0i16; MLKEM_N / 2];
        for i in 0..MLKEM_N / 4 {
            let zeta = ZETAS[64 + i];
            cache[2 * i] = fqmul(self.coeffs[4 * i + 1], zeta);
            cache[2 * i + 1] = fqmul(self.coeffs[4 * i + 3], -zeta);
        }
        MulCache { coeffs: cache }
    }

    /// Pointwise product with `other` using its precomputed cache.
    ///
    /// Both operands must be normalized. The result is bounded by q in
    /// absolute value and carries a factor of R^(-1).
    pub fn basemul_cached(&self, other: &NttPolynomial, other_cache: &MulCache) -> NttPolynomial {
        let mut r = NttPolynomial::zero();
        for j in 0..MLKEM_N / 2 {
            let a0 = self.coeffs[2 * j] as i32;
            let a1 = self.coeffs[2 * j + 1] as i32;
            let b0 = other.coeffs[2 * j] as i32;
            let b1 = other.coeffs[2 * j + 1] as i32;
            let cached = other_cache.coeffs[j] as i32;

            r.coeffs[2 * j] = montgomery_reduce(a1 * cached + a0 * b0);
            r.coeffs[2 * j + 1] = montgomery_reduce(a0 * b1 + a1 * b0);
        }
        r
    }

    /// Lossless 12-bit encoding. Coefficients must be normalized.
    pub fn to_bytes(&self) -> [u8; MLKEM_POLYBYTES] {
        let mut vals = [0u16; MLKEM_N];
        for (v, &c) in vals.iter_mut().zip(self.coeffs.iter()) {
            *v = to_unsigned(c);
        }
        let mut out = [0u8; MLKEM_POLYBYTES];
        pack_bits(&vals, 12, &mut out);
        out
    }

    /// Decode a 12-bit encoding. Values are reduced mod q, so any
    /// 384-byte input yields a valid polynomial.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != MLKEM_POLYBYTES {
            return Err(Error::Length {
                context: "NTT polynomial decoding",
                expected: MLKEM_POLYBYTES,
                actual: bytes.len(),
            });
        }
        let mut vals = [0u16; MLKEM_N];
        unpack_bits(bytes, 12, &mut vals);
        let mut poly = Self::zero();
        for (c, &v) in poly.coeffs.iter_mut().zip(vals.iter()) {
            *c = barrett_reduce(v as i16);
        }
        Ok(poly)
    }
}

impl core::ops::AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += b;
        }
    }
}

impl core::ops::SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a -= b;
        }
    }
}

impl core::ops::AddAssign<&NttPolynomial> for NttPolynomial {
    fn add_assign(&mut self, rhs: &NttPolynomial) {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qkem_params::mlkem::MLKEM_Q;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const Q: i64 = MLKEM_Q as i64;

    fn random_poly(rng: &mut ChaCha20Rng) -> Polynomial {
        let mut p = Polynomial::zero();
        for c in p.coeffs.iter_mut() {
            *c = rng.gen_range(0..MLKEM_Q as i16);
        }
        p
    }

    /// Remove the Montgomery factor R and center the result.
    fn normalize(p: &mut Polynomial) {
        for c in p.coeffs.iter_mut() {
            *c = barrett_reduce(fqmul(*c, 1));
        }
    }

    #[test]
    fn ntt_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let original = random_poly(&mut rng);

        let mut transformed = original.clone().ntt();
        transformed.reduce();
        let mut back = transformed.ntt_inverse();
        normalize(&mut back);

        for (a, b) in back.coeffs.iter().zip(original.coeffs.iter()) {
            assert_eq!((*a as i64).rem_euclid(Q), (*b as i64).rem_euclid(Q));
        }
    }

    #[test]
    fn basemul_matches_schoolbook_negacyclic_product() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let a = random_poly(&mut rng);
        let b = random_poly(&mut rng);

        let mut expected = [0i64; MLKEM_N];
        for i in 0..MLKEM_N {
            for j in 0..MLKEM_N {
                let prod = a.coeffs[i] as i64 * b.coeffs[j] as i64;
                if i + j < MLKEM_N {
                    expected[i + j] += prod;
                } else {
                    expected[i + j - MLKEM_N] -= prod;
                }
            }
        }

        let mut a_hat = a.ntt();
        a_hat.reduce();
        let mut b_hat = b.ntt();
        b_hat.reduce();
        let cache = b_hat.mulcache();
        let mut product = a_hat.basemul_cached(&b_hat, &cache).ntt_inverse();
        product.reduce();

        for (got, want) in product.coeffs.iter().zip(expected.iter()) {
            assert_eq!((*got as i64).rem_euclid(Q), want.rem_euclid(Q));
        }
    }

    #[test]
    fn msg_round_trip() {
        let mut msg = [0u8; 32];
        for (i, b) in msg.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let poly = Polynomial::from_msg(&msg);
        assert_eq!(poly.to_msg(), msg);
    }

    #[test]
    fn from_msg_values_are_zero_or_half_q() {
        let poly = Polynomial::from_msg(&[0b1010_0101; 32]);
        for &c in poly.coeffs.iter() {
            assert!(c == 0 || c == 1665);
        }
    }

    #[test]
    fn twelve_bit_encoding_round_trips() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut p = NttPolynomial::zero();
        for c in p.coeffs.iter_mut() {
            *c = rng.gen_range(0..MLKEM_Q as i16);
        }
        let bytes = p.to_bytes();
        let back = NttPolynomial::from_bytes(&bytes).unwrap();
        for (a, b) in back.coeffs.iter().zip(p.coeffs.iter()) {
            assert_eq!((*a as i64).rem_euclid(Q), (*b as i64).rem_euclid(Q));
        }
    }

    #[test]
    fn compressed_encoding_round_trips_on_codewords() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for d in [4u32, 5, 10, 11] {
            let mut p = Polynomial::zero();
            for c in p.coeffs.iter_mut() {
                *c = rng.gen_range(0..MLKEM_Q as i16);
            }
            let mut buf = alloc::vec![0u8; MLKEM_N / 8 * d as usize];
            p.compress_into(d, &mut buf).unwrap();
            let q1 = Polynomial::decompress_from(&buf, d).unwrap();
            let mut buf2 = alloc::vec![0u8; MLKEM_N / 8 * d as usize];
            q1.compress_into(d, &mut buf2).unwrap();
            assert_eq!(buf, buf2);
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(NttPolynomial::from_bytes(&[0u8; 383]).is_err());
        assert!(Polynomial::decompress_from(&[0u8; 100], 10).is_err());
        let p = Polynomial::zero();
        let mut short = [0u8; 100];
        assert!(p.compress_into(10, &mut short).is_err());
    }
}

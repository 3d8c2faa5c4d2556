//! Wire formats for keys and ciphertexts.
//!
//! Public key: 12-bit packed t_hat followed by the 32-byte matrix seed.
//! CPA secret key: 12-bit packed s_hat.
//! Ciphertext: du-bit compressed vector u followed by dv-bit compressed v.

use alloc::vec::Vec;

use qkem_algorithms::{NttPolynomial, Polynomial};
use qkem_params::mlkem::{MLKEM_N, MLKEM_POLYBYTES, MLKEM_SYMBYTES};

use crate::error::{Error, Result};

use super::params::MlKemParams;
use super::polyvec::{NttPolyVec, PolyVec};

/// Pack a public key as t_hat || rho. Components must be normalized.
pub(crate) fn pack_pk<P: MlKemParams>(t_hat: &NttPolyVec<P>, rho: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    for poly in t_hat.polys.iter() {
        out.extend_from_slice(&poly.to_bytes());
    }
    out.extend_from_slice(rho);
    out
}

/// Unpack a public key into t_hat and the matrix seed.
pub(crate) fn unpack_pk<P: MlKemParams>(bytes: &[u8]) -> Result<(NttPolyVec<P>, [u8; 32])> {
    if bytes.len() != P::PUBLIC_KEY_BYTES {
        return Err(Error::InvalidKey {
            key_type: P::NAME,
            reason: "public key has wrong length",
        });
    }
    let mut polys = Vec::with_capacity(P::K);
    for chunk in bytes[..P::POLYVEC_BYTES].chunks_exact(MLKEM_POLYBYTES) {
        polys.push(NttPolynomial::from_bytes(chunk)?);
    }
    let mut rho = [0u8; MLKEM_SYMBYTES];
    rho.copy_from_slice(&bytes[P::POLYVEC_BYTES..]);
    Ok((NttPolyVec::from_polys(polys), rho))
}

/// Pack the CPA secret key s_hat. Components must be normalized.
pub(crate) fn pack_sk_cpa<P: MlKemParams>(s_hat: &NttPolyVec<P>) -> Vec<u8> {
    let mut out = Vec::with_capacity(P::POLYVEC_BYTES);
    for poly in s_hat.polys.iter() {
        out.extend_from_slice(&poly.to_bytes());
    }
    out
}

/// Unpack the CPA secret key.
pub(crate) fn unpack_sk_cpa<P: MlKemParams>(bytes: &[u8]) -> Result<NttPolyVec<P>> {
    if bytes.len() != P::POLYVEC_BYTES {
        return Err(Error::InvalidKey {
            key_type: P::NAME,
            reason: "secret key has wrong length",
        });
    }
    let mut polys = Vec::with_capacity(P::K);
    for chunk in bytes.chunks_exact(MLKEM_POLYBYTES) {
        polys.push(NttPolynomial::from_bytes(chunk)?);
    }
    Ok(NttPolyVec::from_polys(polys))
}

/// Pack a ciphertext as compressed u || compressed v. Both inputs must
/// be normalized.
pub(crate) fn pack_ciphertext<P: MlKemParams>(u: &PolyVec<P>, v: &Polynomial) -> Result<Vec<u8>> {
    let u_poly_bytes = MLKEM_N / 8 * P::DU as usize;
    let mut out = alloc::vec![0u8; P::CIPHERTEXT_BYTES];
    for (poly, chunk) in u.polys.iter().zip(out.chunks_exact_mut(u_poly_bytes)) {
        poly.compress_into(P::DU, chunk)?;
    }
    v.compress_into(P::DV, &mut out[P::CT_U_BYTES..])?;
    Ok(out)
}

/// Unpack and decompress a ciphertext.
pub(crate) fn unpack_ciphertext<P: MlKemParams>(bytes: &[u8]) -> Result<(PolyVec<P>, Polynomial)> {
    if bytes.len() != P::CIPHERTEXT_BYTES {
        return Err(Error::InvalidCiphertext {
            algorithm: P::NAME,
            reason: "ciphertext has wrong length",
        });
    }
    let u_poly_bytes = MLKEM_N / 8 * P::DU as usize;
    let mut polys = Vec::with_capacity(P::K);
    for chunk in bytes[..P::CT_U_BYTES].chunks_exact(u_poly_bytes) {
        polys.push(Polynomial::decompress_from(chunk, P::DU)?);
    }
    let v = Polynomial::decompress_from(&bytes[P::CT_U_BYTES..], P::DV)?;
    Ok((PolyVec::from_polys(polys), v))
}

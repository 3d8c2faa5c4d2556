//! IND-CCA2 KEM construction via the Fujisaki-Okamoto transform.
//!
//! Decapsulation uses implicit rejection: the re-encryption comparison
//! and the choice between the derived secret and the rejection secret
//! are both branch-free, and a malformed but well-sized ciphertext is
//! never reported as an error.

use alloc::vec::Vec;

use qkem_algorithms::hash::{sha3_256, sha3_512};
use qkem_internal::constant_time::{ct_eq_choice, ct_select_array};
use qkem_params::mlkem::MLKEM_SYMBYTES;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Result};

use super::cpa_pke::{decrypt, encrypt, keypair_derand};
use super::params::{MlKemParams, MLKEM_SS_BYTES};
use super::serialize::{pack_ciphertext, pack_pk, pack_sk_cpa, unpack_ciphertext, unpack_pk, unpack_sk_cpa};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; MLKEM_SS_BYTES]>;

// H: SHA3-256 over the concatenation of the parts.
fn h_func(parts: &[&[u8]]) -> [u8; MLKEM_SS_BYTES] {
    sha3_256(parts)
}

// G: SHA3-512, split into (K_bar, r).
fn g_func(parts: &[&[u8]]) -> ([u8; MLKEM_SYMBYTES], [u8; MLKEM_SYMBYTES]) {
    let digest = Zeroizing::new(sha3_512(parts));
    let mut k_bar = [0u8; MLKEM_SYMBYTES];
    let mut r = [0u8; MLKEM_SYMBYTES];
    k_bar.copy_from_slice(&digest[..MLKEM_SYMBYTES]);
    r.copy_from_slice(&digest[MLKEM_SYMBYTES..]);
    (k_bar, r)
}

/// Deterministic key generation from the CPA coin `d` and the implicit
/// rejection secret `z`.
pub(crate) fn keygen_derand<P: MlKemParams>(
    d: &[u8; MLKEM_SYMBYTES],
    z: &[u8; MLKEM_SYMBYTES],
) -> (Vec<u8>, Vec<u8>) {
    let (pk_cpa, sk_cpa) = keypair_derand::<P>(d);
    let pk_bytes = pack_pk::<P>(&pk_cpa.t_hat, &pk_cpa.seed);
    let h_pk = h_func(&[&pk_bytes]);

    // CCA secret key: sk_cpa || pk || H(pk) || z
    let mut sk_bytes = Vec::with_capacity(P::SECRET_KEY_BYTES);
    sk_bytes.extend_from_slice(&pack_sk_cpa::<P>(&sk_cpa.s_hat));
    sk_bytes.extend_from_slice(&pk_bytes);
    sk_bytes.extend_from_slice(&h_pk);
    sk_bytes.extend_from_slice(z);

    (pk_bytes, sk_bytes)
}

/// Key generation with fresh randomness.
pub(crate) fn keygen<P: MlKemParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut d = Zeroizing::new([0u8; MLKEM_SYMBYTES]);
    let mut z = Zeroizing::new([0u8; MLKEM_SYMBYTES]);
    rng.fill_bytes(&mut *d);
    rng.fill_bytes(&mut *z);
    Ok(keygen_derand::<P>(&d, &z))
}

/// Deterministic encapsulation of the message `m` against `pk_bytes`.
pub(crate) fn encaps_derand<P: MlKemParams>(
    pk_bytes: &[u8],
    m: &[u8; MLKEM_SYMBYTES],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    validate::length(P::NAME, pk_bytes.len(), P::PUBLIC_KEY_BYTES)?;

    let h_pk = h_func(&[pk_bytes]);
    let (mut k_bar, mut r_coins) = g_func(&[m, &h_pk]);

    let (pk_cpa_t, pk_cpa_seed) = unpack_pk::<P>(pk_bytes)?;
    let pk_cpa = super::cpa_pke::CpaPublicKey {
        t_hat: pk_cpa_t,
        seed: pk_cpa_seed,
    };
    let (u, v) = encrypt::<P>(&pk_cpa, m, &r_coins);
    let ct_bytes = pack_ciphertext::<P>(&u, &v)?;

    let h_ct = h_func(&[&ct_bytes]);
    let ss = Zeroizing::new(h_func(&[&k_bar, &h_ct]));

    k_bar.zeroize();
    r_coins.zeroize();

    Ok((ct_bytes, ss))
}

/// Encapsulation with a freshly sampled message.
pub(crate) fn encaps<P: MlKemParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    pk_bytes: &[u8],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    let mut m = Zeroizing::new([0u8; MLKEM_SYMBYTES]);
    rng.fill_bytes(&mut *m);
    encaps_derand::<P>(pk_bytes, &m)
}

/// Decapsulation with implicit rejection.
pub(crate) fn decaps<P: MlKemParams>(
    sk_bytes: &[u8],
    ct_bytes: &[u8],
) -> Result<SharedSecretBytes> {
    validate::length(P::NAME, sk_bytes.len(), P::SECRET_KEY_BYTES)?;
    validate::length(P::NAME, ct_bytes.len(), P::CIPHERTEXT_BYTES)?;

    // sk_cpa || pk || H(pk) || z
    let sk_cpa_end = P::POLYVEC_BYTES;
    let pk_end = sk_cpa_end + P::PUBLIC_KEY_BYTES;
    let h_pk_end = pk_end + MLKEM_SYMBYTES;
    let sk_cpa_bytes = &sk_bytes[..sk_cpa_end];
    let pk_bytes = &sk_bytes[sk_cpa_end..pk_end];
    let h_pk = &sk_bytes[pk_end..h_pk_end];
    let mut z = [0u8; MLKEM_SYMBYTES];
    z.copy_from_slice(&sk_bytes[h_pk_end..]);

    let (u, v) = unpack_ciphertext::<P>(ct_bytes)?;
    let sk_cpa = super::cpa_pke::CpaSecretKey {
        s_hat: unpack_sk_cpa::<P>(sk_cpa_bytes)?,
    };
    let mut m_prime = Zeroizing::new(decrypt::<P>(&sk_cpa, &u, &v));

    let (mut k_bar_prime, mut r_prime) = g_func(&[&m_prime[..], h_pk]);

    // Re-encrypt and compare in constant time
    let (pk_t, pk_seed) = unpack_pk::<P>(pk_bytes)?;
    let pk_cpa = super::cpa_pke::CpaPublicKey {
        t_hat: pk_t,
        seed: pk_seed,
    };
    let (u_prime, v_prime) = encrypt::<P>(&pk_cpa, &m_prime, &r_prime);
    let ct_prime_bytes = pack_ciphertext::<P>(&u_prime, &v_prime)?;
    let accept = ct_eq_choice(&ct_prime_bytes, ct_bytes);

    let h_ct = h_func(&[ct_bytes]);
    let mut pre_key = ct_select_array(&k_bar_prime, &z, accept);
    let ss = Zeroizing::new(h_func(&[&pre_key, &h_ct]));

    m_prime.zeroize();
    k_bar_prime.zeroize();
    r_prime.zeroize();
    pre_key.zeroize();
    z.zeroize();

    Ok(ss)
}

//! IND-CPA public key encryption underlying the KEM.
//!
//! Everything here is deterministic in its seed inputs; randomness is
//! supplied by the CCA layer. Matrix expansion and noise sampling run
//! through the 4-way batched sponge interfaces so a vectorized Keccak
//! backend can slot in without changing any call site.

use alloc::vec::Vec;

use qkem_algorithms::hash::{prf_x4, sha3_512, xof, XofX4, SHAKE128_RATE};
use qkem_algorithms::poly::sampling::{
    absorb_uniform_block, cbd_prf_bytes, sample_cbd, sample_cbd_from_bytes, sample_uniform,
};
use qkem_algorithms::{NttPolynomial, Polynomial};
use qkem_params::mlkem::{MLKEM_N, MLKEM_SYMBYTES};
use zeroize::{Zeroize, Zeroizing};

use super::params::MlKemParams;
use super::polyvec::{NttPolyVec, PolyVec};

pub(crate) struct CpaPublicKey<P: MlKemParams> {
    pub t_hat: NttPolyVec<P>,
    pub seed: [u8; MLKEM_SYMBYTES],
}

pub(crate) struct CpaSecretKey<P: MlKemParams> {
    pub s_hat: NttPolyVec<P>,
}

/// Expand the k x k matrix A (or its transpose) from the public seed.
///
/// Entry (i, j) is rejection-sampled from SHAKE-128(rho || j || i);
/// transposing swaps the two index bytes. Entries are produced four
/// sponges at a time.
pub(crate) fn gen_matrix<P: MlKemParams>(
    rho: &[u8; MLKEM_SYMBYTES],
    transposed: bool,
) -> Vec<NttPolyVec<P>> {
    let total = P::K * P::K;
    let index = |entry: usize| -> (u8, u8) {
        let i = (entry / P::K) as u8;
        let j = (entry % P::K) as u8;
        if transposed {
            (i, j)
        } else {
            (j, i)
        }
    };

    let mut entries: Vec<NttPolynomial> = Vec::with_capacity(total);
    let mut next = 0;
    while next + 4 <= total {
        let indices = [
            index(next),
            index(next + 1),
            index(next + 2),
            index(next + 3),
        ];
        let mut lanes = XofX4::new(rho, indices);
        let mut polys = [
            NttPolynomial::zero(),
            NttPolynomial::zero(),
            NttPolynomial::zero(),
            NttPolynomial::zero(),
        ];
        let mut filled = [0usize; 4];
        let mut blocks = [[0u8; SHAKE128_RATE]; 4];
        while filled.iter().any(|&f| f < MLKEM_N) {
            lanes.squeeze_blocks(&mut blocks);
            for lane in 0..4 {
                if filled[lane] < MLKEM_N {
                    filled[lane] = absorb_uniform_block(&mut polys[lane], filled[lane], &blocks[lane]);
                }
            }
        }
        entries.extend(polys);
        next += 4;
    }
    while next < total {
        let (x, y) = index(next);
        entries.push(sample_uniform(&mut xof(rho, x, y)));
        next += 1;
    }

    entries
        .chunks_exact(P::K)
        .map(|row| NttPolyVec::from_polys(row.to_vec()))
        .collect()
}

/// Sample `etas.len()` noise polynomials with consecutive nonces
/// starting at `start_nonce`, expanding the PRF four lanes at a time.
fn sample_noise_batch(seed: &[u8; MLKEM_SYMBYTES], etas: &[usize], start_nonce: u8) -> Vec<Polynomial> {
    let mut out = Vec::with_capacity(etas.len());
    let mut idx = 0;
    while idx + 4 <= etas.len() {
        let nonce = start_nonce + idx as u8;
        let mut bufs = Zeroizing::new([[0u8; 192]; 4]);
        {
            let [b0, b1, b2, b3] = &mut *bufs;
            let mut outs: [&mut [u8]; 4] = [
                &mut b0[..cbd_prf_bytes(etas[idx])],
                &mut b1[..cbd_prf_bytes(etas[idx + 1])],
                &mut b2[..cbd_prf_bytes(etas[idx + 2])],
                &mut b3[..cbd_prf_bytes(etas[idx + 3])],
            ];
            prf_x4(seed, [nonce, nonce + 1, nonce + 2, nonce + 3], &mut outs);
        }
        for lane in 0..4 {
            let eta = etas[idx + lane];
            out.push(sample_cbd_from_bytes(&bufs[lane][..cbd_prf_bytes(eta)], eta));
        }
        idx += 4;
    }
    while idx < etas.len() {
        out.push(sample_cbd(seed, start_nonce + idx as u8, etas[idx]));
        idx += 1;
    }
    out
}

/// Deterministic CPA key generation from a 32-byte coin.
pub(crate) fn keypair_derand<P: MlKemParams>(
    coins: &[u8; MLKEM_SYMBYTES],
) -> (CpaPublicKey<P>, CpaSecretKey<P>) {
    // Domain-separate the seed expansion by the module rank
    let expanded = Zeroizing::new(sha3_512(&[coins, &[P::K as u8]]));
    let mut rho = [0u8; MLKEM_SYMBYTES];
    rho.copy_from_slice(&expanded[..MLKEM_SYMBYTES]);
    let mut sigma = Zeroizing::new([0u8; MLKEM_SYMBYTES]);
    sigma.copy_from_slice(&expanded[MLKEM_SYMBYTES..]);

    let a = gen_matrix::<P>(&rho, false);

    // First k polynomials are the secret s, next k the error e
    let mut etas = Vec::with_capacity(2 * P::K);
    etas.resize(2 * P::K, P::ETA1);
    let mut noise = sample_noise_batch(&sigma, &etas, 0);
    let e: Vec<Polynomial> = noise.split_off(P::K);
    let s: Vec<Polynomial> = noise;

    let mut s_hat = PolyVec::<P>::from_polys(s).ntt();
    s_hat.reduce();
    let e_hat = PolyVec::<P>::from_polys(e).ntt();

    let s_cache = s_hat.mulcache();
    let mut t_polys = Vec::with_capacity(P::K);
    for row in a.iter() {
        t_polys.push(row.basemul_acc_cached(&s_hat, &s_cache));
    }
    let mut t_hat = NttPolyVec::<P>::from_polys(t_polys);
    // The pointwise products carry R^(-1); lift back before adding e
    t_hat.to_mont();
    t_hat.add_assign(&e_hat);
    t_hat.reduce();

    (
        CpaPublicKey { t_hat, seed: rho },
        CpaSecretKey { s_hat },
    )
}

/// Deterministic CPA encryption of a 32-byte message.
pub(crate) fn encrypt<P: MlKemParams>(
    pk: &CpaPublicKey<P>,
    msg: &[u8; MLKEM_SYMBYTES],
    coins: &[u8; MLKEM_SYMBYTES],
) -> (PolyVec<P>, Polynomial) {
    let at = gen_matrix::<P>(&pk.seed, true);

    // r (eta1, k polys), e1 (eta2, k polys), e2 (eta2, one poly)
    let mut etas = Vec::with_capacity(2 * P::K + 1);
    etas.resize(P::K, P::ETA1);
    etas.resize(2 * P::K + 1, P::ETA2);
    let mut noise = sample_noise_batch(coins, &etas, 0);
    let e2 = noise.pop().unwrap_or_else(Polynomial::zero);
    let e1 = PolyVec::<P>::from_polys(noise.split_off(P::K));
    let r = PolyVec::<P>::from_polys(noise);

    let mut r_hat = r.ntt();
    r_hat.reduce();
    let r_cache = r_hat.mulcache();

    let mut u_polys = Vec::with_capacity(P::K);
    for row in at.iter() {
        u_polys.push(row.basemul_acc_cached(&r_hat, &r_cache));
    }
    let mut u = NttPolyVec::<P>::from_polys(u_polys).ntt_inverse();
    u.add_assign(&e1);
    u.reduce();

    let mut v = pk
        .t_hat
        .basemul_acc_cached(&r_hat, &r_cache)
        .ntt_inverse();
    v += &e2;
    v += &Polynomial::from_msg(msg);
    v.reduce();

    r_hat.zeroize();

    (u, v)
}

/// CPA decryption: recover the message from (u, v).
pub(crate) fn decrypt<P: MlKemParams>(
    sk: &CpaSecretKey<P>,
    u: &PolyVec<P>,
    v: &Polynomial,
) -> [u8; MLKEM_SYMBYTES] {
    let mut u_hat = u.clone().ntt();
    u_hat.reduce();
    let u_cache = u_hat.mulcache();

    let mut w = v.clone();
    let mut su = sk.s_hat.basemul_acc_cached(&u_hat, &u_cache).ntt_inverse();
    w -= &su;
    w.reduce();
    su.zeroize();

    w.to_msg()
}

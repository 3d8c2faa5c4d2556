//! SHA3 and SHAKE sponge wrappers used by the lattice KEM construction.
//!
//! All symmetric primitives in the scheme are instances of the Keccak
//! permutation: SHA3-256 and SHA3-512 for hashing, SHAKE-128 as the
//! matrix expansion XOF, and SHAKE-256 as the noise PRF.

use sha3::digest::{Digest, ExtendableOutput, Update, XofReader};
use sha3::{Sha3_256, Sha3_512, Shake128, Shake128Reader, Shake256};

/// Squeeze rate of SHAKE-128 in bytes.
pub const SHAKE128_RATE: usize = 168;

/// SHA3-256 over the concatenation of the given inputs.
pub fn sha3_256(inputs: &[&[u8]]) -> [u8; 32] {
    let mut h = Sha3_256::new();
    for part in inputs {
        Digest::update(&mut h, part);
    }
    h.finalize().into()
}

/// SHA3-512 over the concatenation of the given inputs.
pub fn sha3_512(inputs: &[&[u8]]) -> [u8; 64] {
    let mut h = Sha3_512::new();
    for part in inputs {
        Digest::update(&mut h, part);
    }
    h.finalize().into()
}

/// Noise PRF: fills `out` with SHAKE-256(seed || nonce).
pub fn prf(out: &mut [u8], seed: &[u8; 32], nonce: u8) {
    let mut h = Shake256::default();
    h.update(seed);
    h.update(&[nonce]);
    h.finalize_xof().read(out);
}

/// Matrix expansion XOF: an incremental SHAKE-128 reader over
/// seed || x || y.
pub fn xof(seed: &[u8; 32], x: u8, y: u8) -> Shake128Reader {
    let mut h = Shake128::default();
    h.update(seed);
    h.update(&[x, y]);
    h.finalize_xof()
}

/// Four SHAKE-128 lanes squeezed in lockstep.
///
/// Portable stand-in for a 4-way vectorized Keccak: each lane is an
/// independent sponge over seed || x || y, and `squeeze_blocks` advances
/// all four by one rate-sized block. Output is identical to four
/// sequential [`xof`] readers.
pub struct XofX4 {
    lanes: [Shake128Reader; 4],
}

impl XofX4 {
    /// Absorb seed || x || y into each of the four lanes.
    pub fn new(seed: &[u8; 32], indices: [(u8, u8); 4]) -> Self {
        let lanes = indices.map(|(x, y)| {
            let mut h = Shake128::default();
            h.update(seed);
            h.update(&[x, y]);
            h.finalize_xof()
        });
        Self { lanes }
    }

    /// Squeeze one full SHAKE-128 block from every lane.
    pub fn squeeze_blocks(&mut self, out: &mut [[u8; SHAKE128_RATE]; 4]) {
        for (lane, block) in self.lanes.iter_mut().zip(out.iter_mut()) {
            lane.read(block);
        }
    }
}

/// Four noise PRF invocations with consecutive lane outputs.
///
/// Semantically equal to four [`prf`] calls; exists so callers can batch
/// noise expansion the way a vectorized backend would.
pub fn prf_x4(seed: &[u8; 32], nonces: [u8; 4], outs: &mut [&mut [u8]; 4]) {
    for (nonce, out) in nonces.into_iter().zip(outs.iter_mut()) {
        prf(out, seed, nonce);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_lengths_and_determinism() {
        let a = sha3_256(&[b"abc"]);
        let b = sha3_256(&[b"ab", b"c"]);
        assert_eq!(a, b);

        let c = sha3_512(&[b"abc"]);
        let d = sha3_512(&[b"abd"]);
        assert_ne!(&c[..], &d[..]);
    }

    #[test]
    fn prf_domain_separation() {
        let seed = [7u8; 32];
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        prf(&mut a, &seed, 0);
        prf(&mut b, &seed, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn xof_x4_matches_sequential_readers() {
        let seed = [42u8; 32];
        let indices = [(0u8, 1u8), (1, 0), (2, 3), (3, 2)];

        let mut batched = XofX4::new(&seed, indices);
        let mut blocks = [[0u8; SHAKE128_RATE]; 4];
        batched.squeeze_blocks(&mut blocks);
        batched.squeeze_blocks(&mut blocks);

        for (i, &(x, y)) in indices.iter().enumerate() {
            let mut reader = xof(&seed, x, y);
            let mut expected = [0u8; 2 * SHAKE128_RATE];
            reader.read(&mut expected);
            assert_eq!(&blocks[i][..], &expected[SHAKE128_RATE..]);
        }
    }

    #[test]
    fn prf_x4_matches_sequential_prf() {
        let seed = [3u8; 32];
        let mut lane0 = [0u8; 128];
        let mut lane1 = [0u8; 128];
        let mut lane2 = [0u8; 128];
        let mut lane3 = [0u8; 128];
        {
            let mut outs: [&mut [u8]; 4] = [&mut lane0, &mut lane1, &mut lane2, &mut lane3];
            prf_x4(&seed, [4, 5, 6, 7], &mut outs);
        }

        let mut expected = [0u8; 128];
        prf(&mut expected, &seed, 6);
        assert_eq!(lane2, expected);
    }
}

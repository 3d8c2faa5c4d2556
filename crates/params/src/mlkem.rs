//! ML-KEM (Kyber) parameter sets
//!
//! Three security levels sharing one algorithm, differing only in the module
//! rank `k` and derived sizes. The polynomial ring is fixed for all sets:
//! degree 256 over Z_3329.

/// Polynomial degree, common to all ML-KEM parameter sets.
pub const MLKEM_N: usize = 256;

/// Coefficient modulus, a prime with 2^8-th roots of unity.
pub const MLKEM_Q: u16 = 3329;

/// Size of seeds, hashes, and messages (all 32 bytes).
pub const MLKEM_SYMBYTES: usize = 32;

/// Bytes of one polynomial packed losslessly at 12 bits per coefficient.
pub const MLKEM_POLYBYTES: usize = 384;

/// Shared secret size, fixed regardless of parameter set.
pub const MLKEM_SS_BYTES: usize = 32;

/// Parameters for a single ML-KEM security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKemParamSet {
    /// Algorithm name.
    pub name: &'static str,
    /// Module rank k (dimension of vectors and the k x k matrix).
    pub k: usize,
    /// Noise parameter for the secret and error vectors in key generation,
    /// and for the ephemeral vector r in encryption.
    pub eta1: u8,
    /// Noise parameter for the errors e1, e2 in encryption.
    pub eta2: u8,
    /// Compression bits per coefficient for the ciphertext vector u.
    pub du: usize,
    /// Compression bits per coefficient for the ciphertext polynomial v.
    pub dv: usize,
    /// Public key size in bytes: k * 384 + 32.
    pub public_key_size: usize,
    /// Secret key size in bytes: k * 384 + public key + 2 * 32.
    pub secret_key_size: usize,
    /// Ciphertext size in bytes: k * du * 32 + dv * 32.
    pub ciphertext_size: usize,
}

/// ML-KEM-512 (NIST security category 1).
pub const MLKEM512: MlKemParamSet = MlKemParamSet {
    name: "ML-KEM-512",
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
};

/// ML-KEM-768 (NIST security category 3).
pub const MLKEM768: MlKemParamSet = MlKemParamSet {
    name: "ML-KEM-768",
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
};

/// ML-KEM-1024 (NIST security category 5).
pub const MLKEM1024: MlKemParamSet = MlKemParamSet {
    name: "ML-KEM-1024",
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sizes_are_consistent() {
        for p in [MLKEM512, MLKEM768, MLKEM1024] {
            assert_eq!(p.public_key_size, p.k * MLKEM_POLYBYTES + MLKEM_SYMBYTES);
            assert_eq!(
                p.secret_key_size,
                p.k * MLKEM_POLYBYTES + p.public_key_size + 2 * MLKEM_SYMBYTES
            );
            assert_eq!(
                p.ciphertext_size,
                (p.k * MLKEM_N * p.du + MLKEM_N * p.dv) / 8
            );
        }
    }
}

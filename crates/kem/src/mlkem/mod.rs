//! ML-KEM (Kyber) key encapsulation.
//!
//! A module-lattice KEM with IND-CCA2 security from the
//! Fujisaki-Okamoto transform over an IND-CPA encryption scheme. Three
//! parameter sets share one implementation, differing only in the
//! module rank and compression widths.

// Modules defining the KEM logic and parameters.
mod params;
mod polyvec; // Vectors of polynomials and their inner products
mod serialize; // Wire formats for keys and ciphertexts
mod cpa_pke; // The core CPA-secure PKE scheme
mod ind_cca; // The Fujisaki-Okamoto transform
mod kem; // The MlKem struct and the api::Kem impl

// Concrete parameter sets
mod mlkem1024;
mod mlkem512;
mod mlkem768;

// Re-export the primary KEM types for each security level.
pub use self::mlkem1024::MlKem1024;
pub use self::mlkem512::MlKem512;
pub use self::mlkem768::MlKem768;

// Re-export key/ciphertext types for users that need to name them.
pub use self::kem::{
    MlKem, MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
};

// Re-export the parameter trait and shared constants.
pub use self::params::{
    MlKem1024ParamsImpl, MlKem512ParamsImpl, MlKem768ParamsImpl, MlKemParams, MLKEM_SS_BYTES,
};

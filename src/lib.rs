//! # qkem
//!
//! A modular, pure-Rust implementation of the ML-KEM (Kyber)
//! post-quantum key encapsulation mechanism.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qkem = "0.3"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `qkem-api`: Public traits, error types, and the `Key` type
//! - `qkem-params`: Parameter sets for the three security levels
//! - `qkem-algorithms`: Ring arithmetic, sampling, and sponge wrappers
//! - `qkem-kem`: The IND-CCA2 KEM at all three security levels
//!
//! ## Example
//!
//! ```
//! use qkem::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//!
//! // Seeded for the example; use an OS-entropy seed in applications.
//! let mut rng = ChaChaRng::seed_from_u64(42);
//! let (pk, sk) = MlKem768::keypair(&mut rng)?;
//! let (ciphertext, shared_secret) = MlKem768::encapsulate(&mut rng, &pk)?;
//! let recovered = MlKem768::decapsulate(&sk, &ciphertext)?;
//! assert_eq!(shared_secret.as_ref(), recovered.as_ref());
//! # Ok::<(), qkem::api::Error>(())
//! ```

// Core re-exports
pub use qkem_api as api;
pub use qkem_internal as internal;
pub use qkem_params as params;

pub use qkem_algorithms as algorithms;
pub use qkem_kem as kem;

/// Common imports for qkem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret};

    // Re-export the KEM variants
    pub use crate::kem::{MlKem1024, MlKem512, MlKem768};
    pub use crate::kem::{
        MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn facade_round_trip() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let (pk, sk) = MlKem768::keypair(&mut rng).unwrap();
        let (ct, ss1) = MlKem768::encapsulate(&mut rng, &pk).unwrap();
        let ss2 = MlKem768::decapsulate(&sk, &ct).unwrap();
        assert_eq!(ss1.as_ref(), ss2.as_ref());
    }
}

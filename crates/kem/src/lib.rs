//! Module-lattice key encapsulation for the qkem library
//!
//! This crate implements the ML-KEM key encapsulation mechanism at the
//! three standard security levels.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
pub use mlkem::{MlKem1024, MlKem512, MlKem768};
pub use mlkem::{MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret};

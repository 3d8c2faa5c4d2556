//! Lattice arithmetic and sampling primitives for the qkem library
//!
//! This crate implements the computational core shared by the KEM
//! parameter sets: modular arithmetic over q = 3329, the incomplete
//! NTT, coefficient compression and bit packing, uniform and centered
//! binomial sampling, and the Keccak-based symmetric primitives.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod hash;
pub mod poly;

pub use error::{Error, Result};
pub use poly::{MulCache, NttPolynomial, Polynomial};

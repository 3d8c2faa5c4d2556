//! Internal utilities shared by the qkem crates
//!
//! Nothing in this crate is part of the public API contract; it exists so
//! that the constant-time building blocks live in one audited place.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

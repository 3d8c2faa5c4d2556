//! Parameter-set constants for the qkem library
//!
//! This crate holds only constants and plain data describing the supported
//! ML-KEM parameter sets. It has no dependencies and is always no_std.

#![no_std]

pub mod mlkem;

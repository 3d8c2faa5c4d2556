//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate that a byte string has the exact expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Primitive(qkem_algorithms::error::Error::Length {
            context,
            expected,
            actual,
        }));
    }
    Ok(())
}

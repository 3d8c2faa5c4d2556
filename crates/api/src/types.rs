//! Core types with security guarantees for the qkem library

use crate::{Result, Serialize, SerializeSecret};
use alloc::vec::Vec;
use core::fmt;
use qkem_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Base key type that provides secure memory handling
///
/// The backing storage is zeroed when the key is dropped, equality is
/// constant-time, and the `Debug` output never shows the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    data: Vec<u8>,
}

impl Key {
    /// Create a new key from a byte array
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Create a new key with zeros
    pub fn new_zeros(len: usize) -> Self {
        Self {
            data: alloc::vec![0u8; len],
        }
    }

    /// Generate a random key
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R, len: usize) -> Self {
        let mut data = alloc::vec![0u8; len];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for Key {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})[REDACTED]", self.data.len())
    }
}

impl Serialize for Key {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(bytes))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}

impl SerializeSecret for Key {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(bytes))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_equality_is_value_based() {
        let a = Key::new(&[1, 2, 3]);
        let b = Key::new(&[1, 2, 3]);
        let c = Key::new(&[1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn debug_redacts_contents() {
        let k = Key::new(&[0xAB; 8]);
        let s = alloc::format!("{:?}", k);
        assert!(!s.contains("AB"));
        assert!(s.contains("REDACTED"));
    }
}

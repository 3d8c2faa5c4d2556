//! Typed KEM wrapper implementing the `qkem_api::Kem` contract.

use alloc::vec::Vec;
use core::marker::PhantomData;

use qkem_api::{Key, Result as ApiResult, Serialize, SerializeSecret};
use qkem_params::mlkem::MLKEM_SYMBYTES;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Result};

use super::ind_cca;
use super::params::MlKemParams;

/// ML-KEM public (encapsulation) key.
#[derive(Clone)]
pub struct MlKemPublicKey(pub(crate) Vec<u8>);

/// ML-KEM secret (decapsulation) key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKemSecretKey(pub(crate) Vec<u8>);

/// ML-KEM ciphertext.
#[derive(Clone)]
pub struct MlKemCiphertext(pub(crate) Vec<u8>);

/// ML-KEM shared secret, 32 bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKemSharedSecret(pub(crate) Key);

impl MlKemPublicKey {
    /// Wrap raw public key bytes. Length is validated when the key is used.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemSecretKey {
    /// Wrap raw secret key bytes. Length is validated when the key is used.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemCiphertext {
    /// Wrap raw ciphertext bytes. Length is validated when the
    /// ciphertext is used.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for MlKemPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for MlKemCiphertext {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for MlKemSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for MlKemCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for MlKemSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(Key::new(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

/// KEM instance generic over the parameter set.
pub struct MlKem<P: MlKemParams> {
    _params: PhantomData<P>,
}

impl<P: MlKemParams> MlKem<P> {
    /// Deterministic key generation from the CPA coin `d` and the
    /// implicit rejection secret `z`.
    pub fn keypair_derand(
        d: &[u8; MLKEM_SYMBYTES],
        z: &[u8; MLKEM_SYMBYTES],
    ) -> (MlKemPublicKey, MlKemSecretKey) {
        let (pk, sk) = ind_cca::keygen_derand::<P>(d, z);
        (MlKemPublicKey(pk), MlKemSecretKey(sk))
    }

    /// Deterministic encapsulation of the message `m`.
    pub fn encapsulate_derand(
        public_key: &MlKemPublicKey,
        m: &[u8; MLKEM_SYMBYTES],
    ) -> Result<(MlKemCiphertext, MlKemSharedSecret)> {
        let (ct, ss) = ind_cca::encaps_derand::<P>(&public_key.0, m)?;
        Ok((
            MlKemCiphertext(ct),
            MlKemSharedSecret(Key::new(ss.as_ref())),
        ))
    }
}

impl<P: MlKemParams> qkem_api::Kem for MlKem<P> {
    type PublicKey = MlKemPublicKey;
    type SecretKey = MlKemSecretKey;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = ind_cca::keygen::<P, R>(rng)?;
        Ok((MlKemPublicKey(pk), MlKemSecretKey(sk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        validate::length(P::NAME, public_key.0.len(), P::PUBLIC_KEY_BYTES)?;
        let (ct, ss) = ind_cca::encaps::<P, R>(rng, &public_key.0)?;
        Ok((
            MlKemCiphertext(ct),
            MlKemSharedSecret(Key::new(ss.as_ref())),
        ))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        validate::length(P::NAME, secret_key.0.len(), P::SECRET_KEY_BYTES)?;
        validate::length(P::NAME, ciphertext.0.len(), P::CIPHERTEXT_BYTES)?;
        let ss = ind_cca::decaps::<P>(&secret_key.0, &ciphertext.0)?;
        Ok(MlKemSharedSecret(Key::new(ss.as_ref())))
    }
}

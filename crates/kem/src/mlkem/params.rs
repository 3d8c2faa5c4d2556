//! ML-KEM parameter definitions.

use qkem_params::mlkem as global_params;
use qkem_params::mlkem::{MLKEM_N, MLKEM_POLYBYTES};

/// Shared secret size for all parameter sets.
pub const MLKEM_SS_BYTES: usize = global_params::MLKEM_SS_BYTES;
/// Size of the message and of every seed in the construction.
pub const MLKEM_SYMBYTES: usize = global_params::MLKEM_SYMBYTES;

/// Trait defining parameters for a specific ML-KEM security level.
pub trait MlKemParams: Send + Sync + 'static {
    /// Module rank k (dimension of vectors and of the matrix A).
    const K: usize;
    /// Noise parameter for the secret s and error e.
    const ETA1: usize;
    /// Noise parameter for the ciphertext errors e1, e2.
    const ETA2: usize;
    /// Compression bits for the vector part u of the ciphertext.
    const DU: u32;
    /// Compression bits for the polynomial part v of the ciphertext.
    const DV: u32;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Size of a 12-bit packed polynomial vector.
    const POLYVEC_BYTES: usize = Self::K * MLKEM_POLYBYTES;
    /// Size of the compressed vector part of the ciphertext.
    const CT_U_BYTES: usize = Self::K * MLKEM_N / 8 * Self::DU as usize;
    /// Size of the compressed polynomial part of the ciphertext.
    const CT_V_BYTES: usize = MLKEM_N / 8 * Self::DV as usize;
}

pub struct MlKem512ParamsImpl;
impl MlKemParams for MlKem512ParamsImpl {
    const K: usize = global_params::MLKEM512.k;
    const ETA1: usize = global_params::MLKEM512.eta1 as usize;
    const ETA2: usize = global_params::MLKEM512.eta2 as usize;
    const DU: u32 = global_params::MLKEM512.du as u32;
    const DV: u32 = global_params::MLKEM512.dv as u32;
    const NAME: &'static str = global_params::MLKEM512.name;
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM512.ciphertext_size;
}

pub struct MlKem768ParamsImpl;
impl MlKemParams for MlKem768ParamsImpl {
    const K: usize = global_params::MLKEM768.k;
    const ETA1: usize = global_params::MLKEM768.eta1 as usize;
    const ETA2: usize = global_params::MLKEM768.eta2 as usize;
    const DU: u32 = global_params::MLKEM768.du as u32;
    const DV: u32 = global_params::MLKEM768.dv as u32;
    const NAME: &'static str = global_params::MLKEM768.name;
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM768.ciphertext_size;
}

pub struct MlKem1024ParamsImpl;
impl MlKemParams for MlKem1024ParamsImpl {
    const K: usize = global_params::MLKEM1024.k;
    const ETA1: usize = global_params::MLKEM1024.eta1 as usize;
    const ETA2: usize = global_params::MLKEM1024.eta2 as usize;
    const DU: u32 = global_params::MLKEM1024.du as u32;
    const DV: u32 = global_params::MLKEM1024.dv as u32;
    const NAME: &'static str = global_params::MLKEM1024.name;
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM1024.ciphertext_size;
}

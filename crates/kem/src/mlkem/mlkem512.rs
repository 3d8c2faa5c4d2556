//! ML-KEM-512 (NIST security category 1).

use super::kem::MlKem;
use super::params::MlKem512ParamsImpl;

/// ML-KEM-512, implementing `qkem_api::Kem`.
pub type MlKem512 = MlKem<MlKem512ParamsImpl>;

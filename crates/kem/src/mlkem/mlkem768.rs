//! ML-KEM-768 (NIST security category 3).

use super::kem::MlKem;
use super::params::MlKem768ParamsImpl;

/// ML-KEM-768, implementing `qkem_api::Kem`.
pub type MlKem768 = MlKem<MlKem768ParamsImpl>;

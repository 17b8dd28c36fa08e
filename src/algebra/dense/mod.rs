mod cholesky;
mod determinant;
mod fixed;
mod gemm;
mod hcht;
mod types;
pub(crate) use self::types::*;

mod blaslike_traits;
pub use blaslike_traits::*;
pub use cholesky::CholeskyFactor;
pub use hcht::{hcht_into, hcht_scalar};

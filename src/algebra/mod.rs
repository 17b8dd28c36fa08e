//! densecore dense algebra module.
//!
//! Defines the [`Matrix`] and [`MatrixFixed`] types, the capability traits
//! [`DenseMatrix`] and [`DenseMatrixMut`] through which every engine reads
//! and writes matrix data, and the engines themselves:
//! [`Determinant`], [`Cholesky`] and [`MultiplyHCHt`].

mod adjoint;
mod dense;
mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod settings;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use settings::*;

#[cfg(test)]
mod tests;

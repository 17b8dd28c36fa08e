use thiserror::Error;

/// Error type returned by dense matrix access and by the determinant,
/// Cholesky and congruence engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseError {
    /// Operand shapes violate the preconditions of an operation
    #[error("Incompatible dimensions: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// shape required by the operation
        expected: (usize, usize),
        /// shape actually supplied
        found: (usize, usize),
    },
    /// A Cholesky pivot was not strictly positive
    #[error("Matrix is not positive definite (non-positive pivot in row {pivot})")]
    NotPositiveDefinite {
        /// row of the factor at which the pivot failed
        pivot: usize,
    },
    /// Element access outside of the matrix dimensions
    #[error("Index {index:?} out of range for matrix of size {size:?}")]
    OutOfRange {
        /// the (row, column) index requested
        index: (usize, usize),
        /// the matrix dimensions
        size: (usize, usize),
    },
}

impl DenseError {
    pub(crate) fn mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        DenseError::DimensionMismatch { expected, found }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside of its legal range
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

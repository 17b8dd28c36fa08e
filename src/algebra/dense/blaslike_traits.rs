#![allow(non_snake_case)]
use crate::algebra::{DenseError, DenseMatrix, DenseMatrixMut, DenseSettings, FloatT};

/// General dense matrix-matrix multiply
pub trait MultiplyGEMM<T: FloatT> {
    /// Computes `self = αA*B + βself`.  When `β == 0` the prior contents
    /// of `self` are not referenced.   Either operand may be a transposed
    /// [`Adjoint`](crate::algebra::Adjoint) view.
    ///
    /// # Panics
    /// Panics if the dimensions of `A`, `B` and `self` are incompatible.
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>;
}

/// Determinant of a square matrix
pub trait Determinant<T: FloatT> {
    /// Computes the determinant by Gaussian elimination with partial
    /// pivoting.  A singular matrix has determinant zero, which is not
    /// an error.
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    fn det(&self) -> Result<T, DenseError> {
        self.det_with_settings(&DenseSettings::default())
    }

    /// As [`det`](Determinant::det), but with pivots of magnitude at or
    /// below `settings.pivot_tol` treated as zero.
    fn det_with_settings(&self, settings: &DenseSettings<T>) -> Result<T, DenseError>;
}

/// Cholesky factorization of a symmetric positive definite matrix
///
/// Computes the upper triangular `U` with `A = UᵀU`.  Only the upper
/// triangle of `A` is referenced and its symmetry is not checked, so an
/// input whose lower triangle is not an exact mirror of the upper one is
/// factored as though it were.
pub trait Cholesky<T: FloatT>: Sized {
    /// Returns the upper triangular Cholesky factor as a new matrix
    ///
    /// Returns `NotPositiveDefinite` if a pivot is not strictly positive
    /// and `DimensionMismatch` if the matrix is not square.
    fn chol(&self) -> Result<Self, DenseError> {
        self.chol_with_settings(&DenseSettings::default())
    }

    /// As [`chol`](Cholesky::chol), but with pivots required to strictly
    /// exceed `settings.min_pivot`.
    fn chol_with_settings(&self, settings: &DenseSettings<T>) -> Result<Self, DenseError>;

    /// Writes the upper triangular Cholesky factor into `U`, using the
    /// default settings.  `U` is reshaped if its shape differs from that
    /// of `self`.  A `U` of the right shape is left untouched on failure.
    ///
    /// Returns `DimensionMismatch` before any factorization work if `self`
    /// is not square or if a fixed size `U` has the wrong shape.
    fn chol_into<MATU>(&self, U: &mut MATU) -> Result<(), DenseError>
    where
        MATU: DenseMatrixMut<T>,
    {
        self.chol_into_with_settings(U, &DenseSettings::default())
    }

    /// As [`chol_into`](Cholesky::chol_into), but with pivots required to
    /// strictly exceed `settings.min_pivot`.
    fn chol_into_with_settings<MATU>(
        &self,
        U: &mut MATU,
        settings: &DenseSettings<T>,
    ) -> Result<(), DenseError>
    where
        MATU: DenseMatrixMut<T>;
}

/// Congruence transform `HCHᵀ`
pub trait MultiplyHCHt<T: FloatT, MATC> {
    type Output;

    /// Computes `H*C*Hᵀ` for `self = H`.
    ///
    /// Returns `DimensionMismatch` if `C` is not square or if its
    /// dimension does not match the columns of `H`.
    fn hcht(&self, C: &MATC) -> Result<Self::Output, DenseError>;

    /// Computes the scalar `H*C*Hᵀ` for a single row `self = H`, without
    /// allocating a result matrix. The value is identical to the single
    /// element of [`hcht`](MultiplyHCHt::hcht).
    ///
    /// Returns `DimensionMismatch` if `H` does not have exactly one row
    /// or if the dimensions of `H` and `C` are incompatible.
    fn hcht_scalar(&self, C: &MATC) -> Result<T, DenseError>;
}

#![allow(non_snake_case)]

use crate::algebra::*;

/// Computes `out = H*C*Hᵀ`, using `work` as storage for the intermediate
/// product `H*C`.
///
/// Both `out` and `work` are reshaped as needed, so any dynamic
/// [`Matrix`] can be passed.  Fixed size matrices must already have the
/// shapes `m x m` and `m x n` for an `m x n` matrix `H`.
///
/// Returns `DimensionMismatch` if `C` is not square, if its dimension
/// differs from the number of columns of `H`, or if a fixed size `out` or
/// `work` has the wrong shape.
pub fn hcht_into<T, MATO, MATW, MATH, MATC>(
    out: &mut MATO,
    work: &mut MATW,
    H: &MATH,
    C: &MATC,
) -> Result<(), DenseError>
where
    T: FloatT,
    MATO: DenseMatrixMut<T>,
    MATW: DenseMatrixMut<T>,
    MATH: DenseMatrix<T>,
    MATC: DenseMatrix<T>,
{
    check_hcht_dims(H, C)?;
    let (m, n) = H.size();

    work.reshape((m, n))?;
    out.reshape((m, m))?;

    work.mul(H, C, T::one(), T::zero());
    out.mul(&*work, &Adjoint { src: H }, T::one(), T::zero());
    Ok(())
}

/// Computes the scalar `H*C*Hᵀ` for a `1 x n` matrix `H`.
///
/// The products are accumulated in the same order as in
/// [`hcht_into`], so the result is identical to the single element
/// of the general transform.
pub fn hcht_scalar<T, MATH, MATC>(H: &MATH, C: &MATC) -> Result<T, DenseError>
where
    T: FloatT,
    MATH: DenseMatrix<T>,
    MATC: DenseMatrix<T>,
{
    check_hcht_dims(H, C)?;
    let n = H.ncols();
    if H.nrows() != 1 {
        return Err(DenseError::mismatch((1, n), H.size()));
    }

    let mut out = T::zero();
    for j in 0..n {
        // (H*C)[0,j]
        let mut acc = T::zero();
        for k in 0..n {
            acc += H[(0, k)] * C[(k, j)];
        }
        out += acc * H[(0, j)];
    }
    Ok(out)
}

fn check_hcht_dims<T, MATH, MATC>(H: &MATH, C: &MATC) -> Result<(), DenseError>
where
    T: FloatT,
    MATH: DenseMatrix<T>,
    MATC: DenseMatrix<T>,
{
    let n = H.ncols();
    if C.size() != (n, n) {
        return Err(DenseError::mismatch((n, n), C.size()));
    }
    Ok(())
}

impl<T> MultiplyHCHt<T, Matrix<T>> for Matrix<T>
where
    T: FloatT,
{
    type Output = Matrix<T>;

    fn hcht(&self, C: &Matrix<T>) -> Result<Matrix<T>, DenseError> {
        let m = self.nrows();
        let mut out = Matrix::zeros((m, m));
        let mut work = Matrix::zeros(self.size());
        hcht_into(&mut out, &mut work, self, C)?;
        Ok(out)
    }

    fn hcht_scalar(&self, C: &Matrix<T>) -> Result<T, DenseError> {
        hcht_scalar(self, C)
    }
}

impl<const M: usize, const N: usize, T> MultiplyHCHt<T, MatrixFixed<N, N, T>>
    for MatrixFixed<M, N, T>
where
    T: FloatT,
{
    type Output = MatrixFixed<M, M, T>;

    fn hcht(&self, C: &MatrixFixed<N, N, T>) -> Result<MatrixFixed<M, M, T>, DenseError> {
        let mut out = MatrixFixed::<M, M, T>::zeros();
        let mut work = MatrixFixed::<M, N, T>::zeros();
        hcht_into(&mut out, &mut work, self, C)?;
        Ok(out)
    }

    fn hcht_scalar(&self, C: &MatrixFixed<N, N, T>) -> Result<T, DenseError> {
        hcht_scalar(self, C)
    }
}

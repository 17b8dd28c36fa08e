#![allow(non_snake_case)]

use crate::algebra::*;

impl<T, M> Cholesky<T> for M
where
    T: FloatT,
    M: DenseMatrixMut<T> + Clone,
{
    fn chol_with_settings(&self, settings: &DenseSettings<T>) -> Result<Self, DenseError> {
        check_square(self)?;
        let mut U = self.clone();
        cholesky_upper(&mut U, self, settings.min_pivot)?;
        Ok(U)
    }

    fn chol_into_with_settings<MATU>(
        &self,
        U: &mut MATU,
        settings: &DenseSettings<T>,
    ) -> Result<(), DenseError>
    where
        MATU: DenseMatrixMut<T>,
    {
        check_square(self)?;

        // shape errors are reported before any factorization work.
        // U is only reshaped when its shape differs
        if U.size() != self.size() {
            U.reshape(self.size())?;
        }

        // factor into a private copy first so that U is
        // not partially overwritten on failure
        let mut L = self.clone();
        cholesky_upper(&mut L, self, settings.min_pivot)?;

        for j in 0..L.ncols() {
            for i in 0..L.nrows() {
                U[(i, j)] = L[(i, j)];
            }
        }
        Ok(())
    }
}

fn check_square<T, M>(A: &M) -> Result<(), DenseError>
where
    T: FloatT,
    M: DenseMatrix<T>,
{
    if !A.is_square() {
        let n = A.nrows();
        return Err(DenseError::mismatch((n, n), A.size()));
    }
    Ok(())
}

// Upper triangular Cholesky factorization U^T*U = A, row by row.
// Only the upper triangle of A is referenced.  U must have the
// same shape as A, and every element of U is overwritten.
//
// Fails at the first row k whose diagonal term is not strictly
// greater than min_pivot.  NaN diagonal terms fail as well.

fn cholesky_upper<T, MATU, MATA>(U: &mut MATU, A: &MATA, min_pivot: T) -> Result<(), DenseError>
where
    T: FloatT,
    MATU: DenseMatrixMut<T>,
    MATA: DenseMatrix<T>,
{
    let n = A.nrows();
    debug_assert!(U.size() == A.size());

    for k in 0..n {
        let mut t = A[(k, k)];
        for m in 0..k {
            t -= U[(m, k)] * U[(m, k)];
        }

        if t.is_nan() || t <= min_pivot {
            return Err(DenseError::NotPositiveDefinite { pivot: k });
        }

        let ukk = t.sqrt();
        U[(k, k)] = ukk;

        for j in (k + 1)..n {
            let mut s = A[(k, j)];
            for m in 0..k {
                s -= U[(m, k)] * U[(m, j)];
            }
            U[(k, j)] = s / ukk;
        }

        // strictly lower part of row k
        for j in 0..k {
            U[(k, j)] = T::zero();
        }
    }
    Ok(())
}

/// Operations on upper triangular Cholesky factors
pub trait CholeskyFactor<T: FloatT>: DenseMatrix<T> {
    /// Computes `log(det(A))` for `A = UᵀU`, where `self = U` is a
    /// Cholesky factor produced by [`chol`](crate::algebra::Cholesky::chol).
    ///
    /// Only the diagonal of `self` is read and nothing is checked.  On a
    /// matrix that is not such a factor the result is meaningless, and is
    /// NaN if any diagonal term is negative.
    fn logdet(&self) -> T {
        let mut ld = T::zero();
        for i in 0..self.nrows().min(self.ncols()) {
            ld += T::ln(self[(i, i)]);
        }
        ld + ld
    }
}

impl<T: FloatT, M: DenseMatrix<T>> CholeskyFactor<T> for M {}

macro_rules! generate_test_cholesky {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let Scopy = S.clone();

            let U = S.chol().unwrap();
            assert!(U.is_triu());

            let mut M = Matrix::<$fxx>::zeros((3, 3));
            M.mul(&U.t(), &U, 1.0, 0.0);

            assert!(M.sum_abs_diff(&Scopy).unwrap() < (1e-8 as $fxx).$tolfn());

            //S is never modified
            assert_eq!(S.sum_abs_diff(&Scopy).unwrap(), 0.0);
        }
    };
}

generate_test_cholesky!(f32, test_cholesky_f32, sqrt);
generate_test_cholesky!(f64, test_cholesky_f64, abs);

macro_rules! generate_test_cholesky_logdet {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        #[allow(clippy::excessive_precision)]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let U = S.chol().unwrap();
            assert!((U.logdet() - 5.69035945432406).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky_logdet!(f32, test_cholesky_logdet_f32, sqrt);
generate_test_cholesky_logdet!(f64, test_cholesky_logdet_f64, abs);

#[test]
fn test_cholesky_reads_upper_triangle() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [4., 2.],
        [2., 5.]]);

    // garbage in the lower triangle is ignored
    let mut B = A.clone();
    B[(1, 0)] = 1000.;

    let UA = A.chol().unwrap();
    let UB = B.chol().unwrap();
    assert_eq!(UA.sum_abs_diff(&UB), Ok(0.));

    #[rustfmt::skip]
    let U = Matrix::from(&[
        [2., 1.],
        [0., 2.]]);
    assert_eq!(UA.sum_abs_diff(&U), Ok(0.));
}

#[test]
fn test_cholesky_failures() {
    // negative leading term
    let A = Matrix::from(&[[-1., 0.], [0., 1.]]);
    assert_eq!(
        A.chol().unwrap_err(),
        DenseError::NotPositiveDefinite { pivot: 0 }
    );

    // positive semidefinite, zero pivot in the second row
    let A = MatrixFixed::<2, 2, f64>::from(&[[1., 1.], [1., 1.]]);
    assert_eq!(
        A.chol().unwrap_err(),
        DenseError::NotPositiveDefinite { pivot: 1 }
    );

    // not square
    let A = Matrix::<f64>::zeros((2, 3));
    assert!(matches!(
        A.chol(),
        Err(DenseError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_cholesky_min_pivot() {
    let A = Matrix::from(&[[1., 0.], [0., 1e-10]]);
    assert!(A.chol().is_ok());

    let settings = DenseSettingsBuilder::<f64>::default()
        .min_pivot(1e-8)
        .build()
        .unwrap();
    assert_eq!(
        A.chol_with_settings(&settings).unwrap_err(),
        DenseError::NotPositiveDefinite { pivot: 1 }
    );
}

#[test]
fn test_cholesky_into_with_settings() {
    let A = Matrix::from(&[[1., 0.], [0., 1e-10]]);
    let mut U = Matrix::<f64>::zeros((2, 2));
    assert!(A.chol_into(&mut U).is_ok());

    let settings = DenseSettingsBuilder::<f64>::default()
        .min_pivot(1e-8)
        .build()
        .unwrap();
    let mut U = Matrix::<f64>::identity(2);
    assert_eq!(
        A.chol_into_with_settings(&mut U, &settings).unwrap_err(),
        DenseError::NotPositiveDefinite { pivot: 1 }
    );
    assert_eq!(U.sum_abs_diff(&Matrix::<f64>::identity(2)), Ok(0.));

    // stale lower triangle in a same shape output is cleared
    let mut U = Matrix::<f64>::zeros((2, 2));
    U.fill(7.);
    let B = Matrix::from(&[[4., 2.], [2., 5.]]);
    B.chol_into(&mut U).unwrap();
    assert!(U.is_triu());
    assert_eq!(U.sum_abs_diff(&Matrix::from(&[[2., 1.], [0., 2.]])), Ok(0.));
}

#[test]
fn test_cholesky_into() {
    #[rustfmt::skip]
    let A = MatrixFixed::<3, 3, f64>::from(
        &[[ 8., -2., 4.],
          [-2., 12., 2.],
          [ 4.,  2., 6.]]);

    // dynamic output is reshaped as needed
    let mut U = Matrix::<f64>::zeros((1, 5));
    A.chol_into(&mut U).unwrap();
    assert_eq!(U.size(), (3, 3));
    assert_eq!(U.sum_abs_diff(&A.chol().unwrap()), Ok(0.));

    // fixed output of the wrong shape is rejected
    let mut U = MatrixFixed::<2, 2, f64>::zeros();
    assert!(A.chol_into(&mut U).is_err());

    // fixed output of the wrong shape is rejected before factoring,
    // even when the input is also indefinite
    #[rustfmt::skip]
    let B = Matrix::from(&[
        [1., 2., 0.],
        [2., 1., 0.],
        [0., 0., 1.]]);
    let mut U = MatrixFixed::<2, 2, f64>::zeros();
    assert_eq!(
        B.chol_into(&mut U).unwrap_err(),
        DenseError::DimensionMismatch {
            expected: (2, 2),
            found: (3, 3)
        }
    );

    // output is untouched on failure
    let B = Matrix::from(&[[1., 2.], [2., 1.]]);
    let mut U = Matrix::<f64>::identity(2);
    assert!(B.chol_into(&mut U).is_err());
    assert_eq!(U.sum_abs_diff(&Matrix::<f64>::identity(2)), Ok(0.));
}

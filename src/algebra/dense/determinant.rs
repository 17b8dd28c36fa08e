#![allow(non_snake_case)]

use crate::algebra::*;

impl<T, M> Determinant<T> for M
where
    T: FloatT,
    M: DenseMatrixMut<T> + Clone,
{
    fn det_with_settings(&self, settings: &DenseSettings<T>) -> Result<T, DenseError> {
        if !self.is_square() {
            let n = self.nrows();
            return Err(DenseError::mismatch((n, n), self.size()));
        }

        match self.nrows() {
            0 => Ok(T::one()),
            1 => {
                let a = self[(0, 0)];
                if a.abs() <= settings.pivot_tol {
                    Ok(T::zero())
                } else {
                    Ok(a)
                }
            }
            _ => {
                // eliminate on a private copy so that self is untouched
                let mut U = self.clone();
                Ok(lu_determinant(&mut U, settings.pivot_tol))
            }
        }
    }
}

// Reduces U to upper triangular form in place by Gaussian
// elimination with partial pivoting and returns the product
// of the pivots times the sign of the row permutation.
//
// Entries below the diagonal are not zeroed, since they are
// never read again.  Returns zero as soon as a column has no
// pivot larger than pivot_tol in magnitude.

fn lu_determinant<T, M>(U: &mut M, pivot_tol: T) -> T
where
    T: FloatT,
    M: DenseMatrixMut<T>,
{
    let n = U.nrows();
    let mut sign = T::one();

    for k in 0..n {
        // largest magnitude entry in column k, at or below row k
        let mut p = k;
        for i in (k + 1)..n {
            if U[(i, k)].abs() > U[(p, k)].abs() {
                p = i;
            }
        }

        if U[(p, k)].abs() <= pivot_tol {
            return T::zero();
        }

        if p != k {
            for j in k..n {
                let tmp = U[(k, j)];
                U[(k, j)] = U[(p, j)];
                U[(p, j)] = tmp;
            }
            sign = -sign;
        }

        let d = U[(k, k)];
        for i in (k + 1)..n {
            let f = U[(i, k)] / d;
            if f == T::zero() {
                continue;
            }
            for j in (k + 1)..n {
                let ukj = U[(k, j)];
                U[(i, j)] -= f * ukj;
            }
        }
    }

    let mut det = T::one();
    for k in 0..n {
        det *= U[(k, k)];
    }
    det * sign
}

macro_rules! generate_test_det {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let A = Matrix::<$fxx>::from(&[
                [ 2., -1.,  0.],
                [-1.,  2., -1.],
                [ 0., -1.,  2.]]);

            let d = A.det().unwrap();
            assert!((d - 4.).abs() < (1e-12 as $fxx).$tolfn());

            // requires a row exchange at the first step
            #[rustfmt::skip]
            let A = Matrix::<$fxx>::from(&[
                [0., 1.],
                [1., 0.]]);
            assert_eq!(A.det().unwrap(), -1.);
        }
    };
}

generate_test_det!(f32, test_det_f32, sqrt);
generate_test_det!(f64, test_det_f64, abs);

#[test]
fn test_det_small_and_empty() {
    assert_eq!(Matrix::<f64>::zeros((0, 0)).det(), Ok(1.));
    assert_eq!(Matrix::from(&[[-3.5]]).det(), Ok(-3.5));
    assert_eq!(MatrixFixed::<1, 1, f64>::from(&[[0.25]]).det(), Ok(0.25));
}

#[test]
fn test_det_not_square() {
    let A = Matrix::<f64>::zeros((2, 3));
    assert_eq!(
        A.det(),
        Err(DenseError::DimensionMismatch {
            expected: (2, 2),
            found: (2, 3)
        })
    );
    let A = MatrixFixed::<3, 1, f64>::zeros();
    assert!(A.det().is_err());
}

#[test]
fn test_det_singular() {
    // zero column after the first elimination step
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.],
        [2., 4., 7.],
        [4., 8., 1.]]);
    assert_eq!(A.det(), Ok(0.));

    // all zero
    assert_eq!(MatrixFixed::<4, 4, f64>::zeros().det(), Ok(0.));
}

#[test]
fn test_det_pivot_tol() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 0.],
        [0., 1e-14]]);

    assert_eq!(A.det(), Ok(1e-14));

    let settings = DenseSettingsBuilder::<f64>::default()
        .pivot_tol(1e-12)
        .build()
        .unwrap();
    assert_eq!(A.det_with_settings(&settings), Ok(0.));

    // a single element is held to the same tolerance
    let B = Matrix::from(&[[1e-14]]);
    assert_eq!(B.det(), Ok(1e-14));
    assert_eq!(B.det_with_settings(&settings), Ok(0.));
    let B = MatrixFixed::<1, 1, f64>::from(&[[-3.]]);
    assert_eq!(B.det_with_settings(&settings), Ok(-3.));
}

#[test]
fn test_det_does_not_modify_input() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 3.],
        [4., 2.]]);
    let B = A.clone();
    assert_eq!(A.det(), Ok(-10.));
    assert_eq!(A.sum_abs_diff(&B), Ok(0.));
}

#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, DenseMatrixMut, FloatT, MultiplyGEMM};

impl<T, M> MultiplyGEMM<T> for M
where
    T: FloatT,
    M: DenseMatrixMut<T>,
{
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        // inner products are accumulated in order of increasing k,
        // which the scalar congruence transform relies on
        for j in 0..B.ncols() {
            for i in 0..A.nrows() {
                let mut acc = T::zero();
                for k in 0..A.ncols() {
                    acc += A[(i, k)] * B[(k, j)];
                }
                self[(i, j)] = if β == T::zero() {
                    α * acc
                } else {
                    α * acc + β * self[(i, j)]
                };
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    use crate::algebra::{Matrix, ShapedMatrix};

    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::new_from_slice((m, n), &c);
    C.mul(&A, &B, 1.0, 1.0);

    assert!(C.data() == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // transposed multiply
    let mut C = Matrix::<f64>::zeros((n, m));
    C.mul(&B.t(), &A.t(), 1.0, 0.0);

    assert_eq!(C.size(), (4, 2));
    assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
}

#[test]
fn test_gemm_ignores_output_when_beta_zero() {
    use crate::algebra::{Matrix, MatrixFixed};

    let A = MatrixFixed::<2, 2, f64>::identity();
    let B = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);

    // NaN in the output must not leak through a zero β
    let mut C = Matrix::<f64>::zeros((2, 2));
    C.fill(f64::NAN);
    C.mul(&A, &B, 1.0, 0.0);
    assert_eq!(C.sum_abs_diff(&B), Ok(0.));
}

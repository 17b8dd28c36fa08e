#![allow(non_snake_case)]
use crate::algebra::*;

#[rustfmt::skip]
fn test_matrix_3x3() -> Matrix<f64> {
    Matrix::from(&[
        [4., -3.,  7.],
        [1.,  8., -1.],
        [0., -1.,  2.]])
}

#[test]
fn test_matrix_layout() {
    let A = test_matrix_3x3();
    assert_eq!(A.size(), (3, 3));
    assert_eq!(A.data(), &[4., 1., 0., -3., 8., -1., 7., -1., 2.]);

    let B = Matrix::new_from_slice((3, 3), A.data());
    assert_eq!(A.sum_abs_diff(&B), Ok(0.));

    let C = Matrix::from_row_slice((3, 3), &[4., -3., 7., 1., 8., -1., 0., -1., 2.]).unwrap();
    assert_eq!(A.sum_abs_diff(&C), Ok(0.));
}

#[test]
fn test_matrix_from_row_slice_bad_length() {
    assert_eq!(
        Matrix::from_row_slice((2, 2), &[1., 2., 3.]).unwrap_err(),
        DenseError::DimensionMismatch {
            expected: (2, 2),
            found: (3, 1)
        }
    );
}

#[test]
fn test_matrix_get_set() {
    let mut A = test_matrix_3x3();

    assert_eq!(A.get(0, 2), Ok(7.));
    assert_eq!(
        A.get(3, 0),
        Err(DenseError::OutOfRange {
            index: (3, 0),
            size: (3, 3)
        })
    );

    assert!(A.set(2, 2, -5.).is_ok());
    assert_eq!(A[(2, 2)], -5.);
    assert!(A.set(0, 3, 1.).is_err());
}

#[test]
fn test_matrix_reshape() {
    let mut A = test_matrix_3x3();
    A.reshape((2, 4)).unwrap();
    assert_eq!(A.size(), (2, 4));
    assert_eq!(A.data().len(), 8);
    assert_eq!(A.sum_abs(), 0.);
}

#[test]
fn test_matrix_transpose() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let B = A.transpose();
    assert_eq!(B.size(), (3, 2));
    assert_eq!(B.sum_abs_diff(&A.t()), Ok(0.));
    assert_eq!(B[(2, 0)], 3.);
    assert_eq!(A.t().size(), (3, 2));
}

#[test]
fn test_matrix_difference() {
    let A = test_matrix_3x3();
    let mut B = A.clone();
    B[(1, 2)] += 0.5;
    B[(0, 0)] -= 0.25;

    let D = A.difference(&B).unwrap();
    assert_eq!(D[(1, 2)], -0.5);
    assert_eq!(D[(0, 0)], 0.25);
    assert_eq!(D.sum_abs(), 0.75);
    assert_eq!(A.sum_abs_diff(&B), Ok(0.75));

    // shapes must agree
    let C = Matrix::<f64>::zeros((3, 2));
    assert!(A.difference(&C).is_err());
    assert!(A.sum_abs_diff(&C).is_err());
}

#[test]
fn test_matrix_is_close() {
    let A = test_matrix_3x3();
    let mut B = A.clone();
    B[(2, 1)] += 1e-6;

    assert!(A.is_close(&B, 1e-4));
    assert!(!A.is_close(&B, 1e-8));

    // never close on a shape mismatch
    let C = Matrix::<f64>::zeros((3, 2));
    assert!(!A.is_close(&C, f64::INFINITY));

    // fixed and dynamic matrices compare directly
    let F = MatrixFixed::<3, 3, f64>::try_from(&A).unwrap();
    assert!(F.is_close(&A, 1e-14));
}

#[test]
fn test_matrix_symmetry_checks() {
    let A = test_matrix_3x3();
    assert!(!A.is_symmetric(1e-10));
    assert!(!A.is_triu());

    #[rustfmt::skip]
    let mut S = Matrix::from(&[
        [2., 1., 0.],
        [1., 2., 1.],
        [0., 1., 2.]]);
    assert!(S.is_symmetric(0.));

    S[(2, 0)] = 1e-9;
    assert!(!S.is_symmetric(0.));
    assert!(S.is_symmetric(1e-8));

    // rectangular matrices are never symmetric
    assert!(!Matrix::<f64>::zeros((2, 3)).is_symmetric(1.));

    #[rustfmt::skip]
    let U = Matrix::from(&[
        [2., 1., 0.],
        [0., 2., 1.],
        [0., 0., 2.]]);
    assert!(U.is_triu());
    assert!(!U.transpose().is_triu());
}

#[test]
fn test_matrix_display() {
    let A = Matrix::from(&[
        [1., -2.], //
        [0.5, 4.], //
    ]);
    let s = format!("{}", A);
    assert_eq!(s, "\n[  1.0 -2.0]\n[  0.5 4.0]\n\n");

    let F = MatrixFixed::<2, 2, f64>::try_from(&A).unwrap();
    assert_eq!(format!("{}", F), s);
}

#[test]
fn test_error_display() {
    let e = DenseError::NotPositiveDefinite { pivot: 2 };
    assert_eq!(
        e.to_string(),
        "Matrix is not positive definite (non-positive pivot in row 2)"
    );

    let e = DenseError::mismatch((3, 3), (2, 3));
    assert_eq!(
        e.to_string(),
        "Incompatible dimensions: expected (3, 3), found (2, 3)"
    );
}

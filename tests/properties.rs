#![allow(non_snake_case)]

// randomized checks of the algebraic identities satisfied by the
// determinant, Cholesky and congruence engines.  Every test draws
// from a fixed seed so that failures are reproducible.

use densecore::algebra::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NTRIALS: usize = 20;

fn random_matrix(rng: &mut StdRng, size: (usize, usize)) -> Matrix<f64> {
    let mut A = Matrix::<f64>::zeros(size);
    for j in 0..size.1 {
        for i in 0..size.0 {
            A[(i, j)] = rng.gen_range(-1.0..1.0);
        }
    }
    A
}

// BᵀB + nI is comfortably positive definite
fn random_spd(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let B = random_matrix(rng, (n, n));
    let mut A = Matrix::<f64>::identity(n);
    A.mul(&B.t(), &B, 1.0, n as f64);

    // make the upper and lower triangles exact mirrors
    for j in 0..n {
        for i in (j + 1)..n {
            A[(i, j)] = A[(j, i)];
        }
    }
    A
}

fn swap_rows(A: &mut Matrix<f64>, r1: usize, r2: usize) {
    for j in 0..A.ncols() {
        let tmp = A[(r1, j)];
        A[(r1, j)] = A[(r2, j)];
        A[(r2, j)] = tmp;
    }
}

#[test]
fn test_det_row_swap_flips_sign() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(2..=8);
        let A = random_matrix(&mut rng, (n, n));
        let mut B = A.clone();
        swap_rows(&mut B, 0, n - 1);

        let dA = A.det().unwrap();
        let dB = B.det().unwrap();
        assert!(
            (dA + dB).abs() <= 1e-12 * dA.abs().max(1.),
            "det(A) = {:e}, det(B) = {:e}",
            dA,
            dB
        );
    }
}

#[test]
fn test_det_repeated_row_is_zero() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(2..=8);
        let mut A = random_matrix(&mut rng, (n, n));
        let (src, dst) = (rng.gen_range(0..n), rng.gen_range(0..n));
        if src == dst {
            continue;
        }
        for j in 0..n {
            A[(dst, j)] = A[(src, j)];
        }
        assert!(A.det().unwrap().abs() < 1e-12);
    }
}

#[test]
fn test_det_of_product() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(1..=6);
        let A = random_matrix(&mut rng, (n, n));
        let B = random_matrix(&mut rng, (n, n));
        let mut AB = Matrix::<f64>::zeros((n, n));
        AB.mul(&A, &B, 1.0, 0.0);

        let lhs = AB.det().unwrap();
        let rhs = A.det().unwrap() * B.det().unwrap();
        assert!((lhs - rhs).abs() <= 1e-10 * rhs.abs().max(1.));

        // transpose leaves the determinant unchanged
        let dt = A.transpose().det().unwrap();
        assert!((dt - A.det().unwrap()).abs() <= 1e-12 * dt.abs().max(1.));
    }
}

#[test]
fn test_chol_reconstructs_input() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(1..=10);
        let A = random_spd(&mut rng, n);
        let U = A.chol().unwrap();
        assert!(U.is_triu());

        for i in 0..n {
            assert!(U[(i, i)] > 0.);
        }

        let mut UtU = Matrix::<f64>::zeros((n, n));
        UtU.mul(&U.t(), &U, 1.0, 0.0);
        assert!(UtU.is_close(&A, 1e-10 * (n * n) as f64));

        // det(A) = exp(logdet(A))
        let d = A.det().unwrap();
        assert!((U.logdet() - d.ln()).abs() < 1e-9);
    }
}

#[test]
fn test_chol_rejects_indefinite() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(1..=8);
        let k = rng.gen_range(0..n);
        let mut A = random_spd(&mut rng, n);
        A[(k, k)] = -A[(k, k)];

        assert_eq!(
            A.chol().unwrap_err(),
            DenseError::NotPositiveDefinite { pivot: k }
        );
        assert!(A.chol_into(&mut Matrix::<f64>::zeros((0, 0))).is_err());
    }
}

#[test]
fn test_hcht_symmetric_and_semidefinite() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..NTRIALS {
        let m = rng.gen_range(1..=6);
        let n = rng.gen_range(1..=6);
        let H = random_matrix(&mut rng, (m, n));
        let C = random_spd(&mut rng, n);

        let S = H.hcht(&C).unwrap();
        assert_eq!(S.size(), (m, m));
        assert!(S.is_symmetric(1e-10));

        // S + I is positive definite when S is semidefinite
        let mut P = S.clone();
        for i in 0..m {
            P[(i, i)] += 1.;
        }
        assert!(P.chol().is_ok());

        // agrees with the explicit product H*C*Hᵀ
        let mut HC = Matrix::<f64>::zeros((m, n));
        HC.mul(&H, &C, 1.0, 0.0);
        let mut R = Matrix::<f64>::zeros((m, m));
        R.mul(&HC, &H.t(), 1.0, 0.0);
        assert_eq!(S.sum_abs_diff(&R), Ok(0.));
    }
}

#[test]
fn test_hcht_scalar_matches_general_path() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..NTRIALS {
        let n = rng.gen_range(0..=8);
        let H = random_matrix(&mut rng, (1, n));
        let C = random_spd(&mut rng, n);

        let s = H.hcht_scalar(&C).unwrap();
        let S = H.hcht(&C).unwrap();
        assert_eq!(s, S[(0, 0)]);
        assert!(s >= 0.);
    }
}

#[test]
fn test_fixed_and_dynamic_agree() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..NTRIALS {
        let A = random_spd(&mut rng, 4);
        let H = random_matrix(&mut rng, (3, 4));

        let Af = MatrixFixed::<4, 4, f64>::try_from(&A).unwrap();
        let Hf = MatrixFixed::<3, 4, f64>::try_from(&H).unwrap();

        assert_eq!(Af.det().unwrap(), A.det().unwrap());
        assert_eq!(Af.chol().unwrap().sum_abs_diff(&A.chol().unwrap()), Ok(0.));
        assert_eq!(Hf.hcht(&Af).unwrap().sum_abs_diff(&H.hcht(&A).unwrap()), Ok(0.));

        // round trip through the dynamic type
        let B: Matrix<f64> = Af.into();
        assert_eq!(B.sum_abs_diff(&A), Ok(0.));
    }
}

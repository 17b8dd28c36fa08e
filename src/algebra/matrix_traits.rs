#![allow(non_snake_case)]

use crate::algebra::{DenseError, FloatT};
use std::ops::{Index, IndexMut};

/// Row and column dimensions of a matrix
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `self.nrows() == self.ncols()`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense types are `Matrix` and `MatrixFixed`.  The
//`DenseMatrix` trait is implemented on both, and on the `Adjoint` view,
//so that every engine can be written once against this read-only
//interface.  Indexing with `[(i,j)]` is only bounds checked in debug
//builds.   Use `get` for an access that always reports `OutOfRange`.

/// Read access to a rectangular buffer of floats
pub trait DenseMatrix<T: FloatT>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// Returns `Ok(())` if `idx` lies within the matrix dimensions
    fn check_index(&self, idx: (usize, usize)) -> Result<(), DenseError> {
        let size = self.size();
        if idx.0 < size.0 && idx.1 < size.1 {
            Ok(())
        } else {
            Err(DenseError::OutOfRange { index: idx, size })
        }
    }

    /// Bounds checked element access
    fn get(&self, i: usize, j: usize) -> Result<T, DenseError> {
        self.check_index((i, j))?;
        Ok(self[(i, j)])
    }

    /// Sum of the absolute values of all elements
    fn sum_abs(&self) -> T {
        let mut out = T::zero();
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                out += self[(i, j)].abs();
            }
        }
        out
    }

    /// Sum of absolute elementwise differences between `self` and `B`,
    /// without forming the difference.  Fails on a shape mismatch.
    fn sum_abs_diff<MATB>(&self, B: &MATB) -> Result<T, DenseError>
    where
        MATB: DenseMatrix<T>,
    {
        if self.size() != B.size() {
            return Err(DenseError::mismatch(self.size(), B.size()));
        }
        let mut out = T::zero();
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                out += (self[(i, j)] - B[(i, j)]).abs();
            }
        }
        Ok(out)
    }

    /// True if `B` has the same shape and the summed absolute
    /// difference of their elements is below `tol`.
    fn is_close<MATB>(&self, B: &MATB, tol: T) -> bool
    where
        MATB: DenseMatrix<T>,
    {
        matches!(self.sum_abs_diff(B), Ok(d) if d < tol)
    }

    /// True if the matrix is square and `|A(i,j) - A(j,i)| <= tol` everywhere
    fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for c in 0..self.ncols() {
            for r in 0..c {
                let d = (self[(r, c)] - self[(c, r)]).abs();
                if d.is_nan() || d > tol {
                    return false;
                }
            }
        }
        true
    }

    /// True if every element strictly below the diagonal is exactly zero
    fn is_triu(&self) -> bool {
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

/// Write access to a rectangular buffer of floats
pub trait DenseMatrixMut<T: FloatT>: DenseMatrix<T> + IndexMut<(usize, usize)> {
    /// Change the shape of the matrix to `size` and set every element to
    /// zero.  Fixed size matrices accept only their own shape.
    fn reshape(&mut self, size: (usize, usize)) -> Result<(), DenseError>;

    /// Bounds checked element assignment
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), DenseError> {
        self.check_index((i, j))?;
        self[(i, j)] = v;
        Ok(())
    }

    /// Set every element to `v`
    fn fill(&mut self, v: T) {
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                self[(i, j)] = v;
            }
        }
    }

    /// Elementwise difference `self - B`, returned as a new matrix
    fn difference<MATB>(&self, B: &MATB) -> Result<Self, DenseError>
    where
        Self: Clone,
        MATB: DenseMatrix<T>,
    {
        if self.size() != B.size() {
            return Err(DenseError::mismatch(self.size(), B.size()));
        }
        let mut out = self.clone();
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                out[(i, j)] = self[(i, j)] - B[(i, j)];
            }
        }
        Ok(out)
    }
}

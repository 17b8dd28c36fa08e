#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

// statically sized matrix types.
//
// NB: data is stored as [[T; R]; C], i.e. as C columns of
// length R.  We can't write [T; R*C] for const generic R
// and C, and the nested layout is still column major and
// contiguous.

impl<const R: usize, const C: usize, T> ShapedMatrix for MatrixFixed<R, C, T> {
    fn nrows(&self) -> usize {
        R
    }
    fn ncols(&self) -> usize {
        C
    }
    fn size(&self) -> (usize, usize) {
        (R, C)
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for MatrixFixed<R, C, T> {
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[idx.1][idx.0]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for MatrixFixed<R, C, T> {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.data[idx.1][idx.0]
    }
}

impl<const R: usize, const C: usize, T: FloatT> DenseMatrix<T> for MatrixFixed<R, C, T> {}

impl<const R: usize, const C: usize, T: FloatT> DenseMatrixMut<T> for MatrixFixed<R, C, T> {
    fn reshape(&mut self, size: (usize, usize)) -> Result<(), DenseError> {
        if size != (R, C) {
            return Err(DenseError::mismatch((R, C), size));
        }
        self.fill(T::zero());
        Ok(())
    }
}

impl<const R: usize, const C: usize, T: FloatT> Default for MatrixFixed<R, C, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize, T: FloatT> MatrixFixed<R, C, T> {
    /// An R x C matrix of zeros
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); R]; C],
        }
    }

    /// Matrix from a copy of row major data
    pub fn from_row_slice(src: &[T]) -> Result<Self, DenseError> {
        if src.len() != R * C {
            return Err(DenseError::mismatch((R, C), (src.len(), 1)));
        }
        let mut A = Self::zeros();
        for (k, v) in src.iter().enumerate() {
            A[(k / C, k % C)] = *v;
        }
        Ok(A)
    }

    /// Transposed view of the matrix.  Does not copy.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Transposed copy of the matrix
    pub fn transpose(&self) -> MatrixFixed<C, R, T> {
        let mut B = MatrixFixed::<C, R, T>::zeros();
        for j in 0..C {
            for i in 0..R {
                B[(j, i)] = self[(i, j)];
            }
        }
        B
    }

    /// Copy from a dynamic matrix of matching dimensions
    pub fn copy_from(&mut self, src: &Matrix<T>) -> Result<&mut Self, DenseError> {
        if src.size() != (R, C) {
            return Err(DenseError::mismatch((R, C), src.size()));
        }
        for (col, srccol) in self.data.iter_mut().zip(src.data().chunks_exact(R.max(1))) {
            col.copy_from_slice(srccol);
        }
        Ok(self)
    }
}

impl<const N: usize, T: FloatT> MatrixFixed<N, N, T> {
    /// Identity matrix
    pub fn identity() -> Self {
        let mut A = Self::zeros();
        for i in 0..N {
            A[(i, i)] = T::one();
        }
        A
    }
}

impl<const R: usize, const C: usize, T: FloatT> From<&[[T; C]; R]> for MatrixFixed<R, C, T> {
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut A = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                A[(i, j)] = *v;
            }
        }
        A
    }
}

impl<const R: usize, const C: usize, T: FloatT> From<MatrixFixed<R, C, T>> for Matrix<T> {
    fn from(B: MatrixFixed<R, C, T>) -> Self {
        Self::from(&B)
    }
}

impl<const R: usize, const C: usize, T: FloatT> From<&MatrixFixed<R, C, T>> for Matrix<T> {
    fn from(B: &MatrixFixed<R, C, T>) -> Self {
        let data: Vec<T> = B.data.iter().flatten().copied().collect();
        Matrix::new_from_slice((R, C), &data)
    }
}

impl<const R: usize, const C: usize, T: FloatT> TryFrom<&Matrix<T>> for MatrixFixed<R, C, T> {
    type Error = DenseError;
    fn try_from(B: &Matrix<T>) -> Result<Self, Self::Error> {
        let mut A = Self::zeros();
        A.copy_from(B)?;
        Ok(A)
    }
}

impl<const R: usize, const C: usize, T: FloatT> std::fmt::Display for MatrixFixed<R, C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

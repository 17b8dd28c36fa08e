#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

impl<T> Matrix<T> {
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        debug_assert!(
            idx.0 < self.size.0 && idx.1 < self.size.1,
            "index {:?} out of range for matrix of size {:?}",
            idx,
            self.size
        );
        idx.0 + self.size.0 * idx.1
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T: FloatT> DenseMatrix<T> for Matrix<T> {}

impl<T: FloatT> DenseMatrixMut<T> for Matrix<T> {
    fn reshape(&mut self, size: (usize, usize)) -> Result<(), DenseError> {
        let (m, n) = size;
        self.data.clear();
        self.data.resize(m * n, T::zero());
        self.size = size;
        Ok(())
    }

    fn fill(&mut self, v: T) {
        self.data.fill(v);
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// An m x n matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { size, data }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Matrix from a copy of column major data
    ///
    /// # Panics
    /// Panics if `src.len()` does not match the matrix dimensions.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert_eq!(m * n, src.len());
        Self {
            size,
            data: src.to_vec(),
        }
    }

    /// Matrix from a copy of row major data, the ordering in which
    /// matrices are usually written out by hand.
    pub fn from_row_slice(size: (usize, usize), src: &[T]) -> Result<Self, DenseError> {
        let (m, n) = size;
        if m * n != src.len() {
            return Err(DenseError::mismatch(size, (src.len(), 1)));
        }
        let mut A = Self::zeros(size);
        for (k, v) in src.iter().enumerate() {
            A[(k / n, k % n)] = *v;
        }
        Ok(A)
    }

    /// The matrix data in column major format
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Transposed view of the matrix.  Does not copy.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Transposed copy of the matrix
    pub fn transpose(&self) -> Self {
        let (m, n) = self.size;
        let mut B = Matrix::zeros((n, m));
        for j in 0..n {
            for i in 0..m {
                B[(j, i)] = self[(i, j)];
            }
        }
        B
    }
}

// Row wise construction from a 2D array, so that
// matrix literals read the way they are printed.
impl<const R: usize, const C: usize, T> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Matrix<T> {
        let mut A = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                A[(i, j)] = *v;
            }
        }
        A
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

pub(crate) fn display_matrix<T, M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    T: FloatT,
    M: DenseMatrix<T>,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

// All dense matrix types store their data in column major
// format.   Element (i,j) of an m x n matrix is found at
// linear position i + m*j.

/// Dense matrix with dimensions set at runtime.
///
/// Data is heap allocated and owned exclusively by the matrix. Cloning
/// copies the buffer.  The shape can be changed through
/// [`reshape`](crate::algebra::DenseMatrixMut::reshape).
#[derive(Debug, Clone)]
pub struct Matrix<T = f64> {
    /// dimensions (rows, columns)
    pub(crate) size: (usize, usize),
    /// vector of data in column major format
    pub(crate) data: Vec<T>,
}

/// Dense matrix with dimensions fixed at compile time.
///
/// Data is stored inline as an array of `C` columns, each of length `R`,
/// so the matrix has the same value semantics as a plain array and never
/// allocates.
#[derive(Debug, Clone, Copy)]
pub struct MatrixFixed<const R: usize, const C: usize, T = f64> {
    /// array of columns
    pub(crate) data: [[T; R]; C],
}

/// Read only transposed view of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

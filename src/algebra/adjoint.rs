#![allow(non_snake_case)]
// Transposed read-only views of a matrix
use crate::algebra::{Adjoint, DenseMatrix, FloatT, ShapedMatrix};
use std::ops::Index;

impl<M> ShapedMatrix for Adjoint<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.ncols()
    }
    fn ncols(&self) -> usize {
        self.src.nrows()
    }
}

impl<M> Index<(usize, usize)> for Adjoint<'_, M>
where
    M: Index<(usize, usize)>,
{
    type Output = M::Output;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        //reverse the indices
        &self.src[(idx.1, idx.0)]
    }
}

impl<T, M> DenseMatrix<T> for Adjoint<'_, M>
where
    T: FloatT,
    M: DenseMatrix<T>,
{
}

#[test]
fn test_adjoint_indexing() {
    use crate::algebra::Matrix;

    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let At = A.t();

    assert_eq!(At.size(), (3, 2));
    assert_eq!(At[(0, 1)], 4.);
    assert_eq!(At[(2, 0)], 3.);
    assert_eq!(At.get(1, 1), Ok(5.));
    assert!(At.get(2, 2).is_err());
}

// Statically sized matrices.  These share every engine
// with the heap allocated `Matrix` type through the
// `DenseMatrix` and `DenseMatrixMut` traits.

mod types;

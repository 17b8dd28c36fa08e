//! __densecore__ is a small dense linear algebra kernel providing the three
//! primitives that estimation and filtering pipelines lean on most heavily:
//!
//! * the congruence transform $HCH^\top$, used to propagate a covariance $C$
//!   through a linear map $H$, together with a scalar fast path for a single
//!   row $H$,
//! * the determinant, via Gaussian elimination with partial pivoting,
//! * the Cholesky factorization $A = U^\top U$ of a symmetric positive
//!   definite matrix, with $U$ upper triangular.
//!
//! Every operation is available on two matrix representations:
//! [`Matrix`](crate::algebra::Matrix), whose dimensions are set at runtime
//! and whose data lives on the heap, and
//! [`MatrixFixed`](crate::algebra::MatrixFixed), whose dimensions are part of
//! the type and whose data is stored inline.   Both implement the same
//! capability traits and are driven through the same implementation of each
//! algorithm, so results agree exactly across representations.
//!
//! ```
//! use densecore::algebra::*;
//!
//! let H = Matrix::from(&[
//!     [0.2, -0.3], //
//!     [0.1, 0.9],  //
//! ]);
//! let C = Matrix::from(&[
//!     [0.8, -0.1], //
//!     [-0.1, 0.8], //
//! ]);
//!
//! let S = H.hcht(&C).unwrap();
//! assert!(S.is_symmetric(1e-12));
//! assert!(S.chol().is_ok());
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;

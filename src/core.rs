//! Building blocks of the graph: the dense [`Matrix`], the edge type
//! [markers](marker) and the error types.

pub mod error;
pub mod marker;
pub mod matrix;

pub use error::*;
pub use matrix::Matrix;

//! Edge type markers.
//!
//! The edge type is the only behavioral difference between a directed and an
//! undirected graph: it decides which cells of the adjacency matrix an edge
//! occupies. Everything else (storage, neighbor queries, traversals) is shared.

use std::mem;

use super::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

pub trait EdgeType: private::Sealed + 'static {
    fn is_directed() -> bool;

    /// Line drawn between the endpoints when rendering an edge, `--` or `->`.
    fn connector() -> &'static str;

    /// Writes `weight` to the cells of the edge `(src, dst)` and returns the
    /// previous content of the `(src, dst)` cell.
    ///
    /// Writing `None` removes the edge. Both indices must be in bounds of the
    /// matrix.
    fn write_edge<W: Clone>(
        matrix: &mut Matrix<Option<W>>,
        src: usize,
        dst: usize,
        weight: Option<W>,
    ) -> Option<W>;
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn connector() -> &'static str {
        "--"
    }

    fn write_edge<W: Clone>(
        matrix: &mut Matrix<Option<W>>,
        src: usize,
        dst: usize,
        weight: Option<W>,
    ) -> Option<W> {
        if src != dst {
            matrix[(dst, src)] = weight.clone();
        }
        mem::replace(&mut matrix[(src, dst)], weight)
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }

    fn connector() -> &'static str {
        "->"
    }

    fn write_edge<W: Clone>(
        matrix: &mut Matrix<Option<W>>,
        src: usize,
        dst: usize,
        weight: Option<W>,
    ) -> Option<W> {
        mem::replace(&mut matrix[(src, dst)], weight)
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
}

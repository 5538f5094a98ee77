//! Callback-driven graph traversals.
//!
//! A traversal visits every vertex of the graph exactly once, including
//! vertices unreachable from the first one: whenever a pass finishes, a new one
//! starts from the smallest vertex index not yet visited.
//!
//! Both traversals are **iterative**, the depth of the graph is not limited by
//! the size of the program stack. Neighbors are always explored in increasing
//! index order using [`Graph::next_neighbor`], so the order of callback
//! invocations is deterministic.
//!
//! The two algorithms report their progress differently, see [`Dfs`] and
//! [`Bfs`].

pub mod bfs;
pub mod dfs;

#[doc(inline)]
pub use self::{bfs::Bfs, dfs::Dfs};

use fixedbitset::FixedBitSet;

use crate::{core::marker::EdgeType, graph::Graph};

/// Trait for a specific graph traversal approach.
pub trait Traversal {
    /// Traverses the whole `graph`, passing the value of a vertex and
    /// optionally the weight of an edge to `callback` at every visitation
    /// event.
    fn traverse<V, W, Ty, F>(&self, graph: &Graph<V, W, Ty>, callback: F)
    where
        Ty: EdgeType,
        F: FnMut(&V, Option<&W>);
}

/// Returns the smallest neighbor of `src` greater than `after` that has not
/// been visited yet.
fn next_unvisited<V, W, Ty: EdgeType>(
    graph: &Graph<V, W, Ty>,
    visited: &FixedBitSet,
    src: usize,
    mut after: Option<usize>,
) -> Option<usize> {
    loop {
        let dst = graph.next_neighbor(src, after)?;
        if !visited.contains(dst) {
            return Some(dst);
        }
        after = Some(dst);
    }
}

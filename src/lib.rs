//! Dense adjacency-matrix graphs.
//!
//! A [`Graph`] keeps its vertices in insertion order and its edges in a square
//! [matrix](core::Matrix) that doubles its extent whenever the vertices outgrow
//! it. The only difference between [directed](DirectedGraph) and
//! [undirected](UndirectedGraph) graphs is how an edge is written to the
//! matrix, see [`EdgeType`](core::marker::EdgeType).
//!
//! Graphs are traversed by [depth-first](visit::Dfs) or
//! [breadth-first](visit::Bfs) search which report every visited vertex to a
//! callback, see [`Graph::for_each`].
//!
//! # Examples
//!
//! ```
//! use adjgraph::{infra::export::Trace, visit::Bfs, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new_directed();
//!
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//!
//! graph.insert_edge(a, b, 1).unwrap();
//! graph.insert_edge(a, c, 2).unwrap();
//!
//! assert_eq!(graph.next_neighbor(a, None), Some(b));
//! assert_eq!(graph.next_neighbor(a, Some(b)), Some(c));
//!
//! assert_eq!(Trace::of(&graph, Bfs), "a --( 1 )-> b\na --( 2 )-> c\n");
//! ```

pub mod core;
pub mod graph;
pub mod infra;
pub mod ingest;
pub mod visit;

#[doc(inline)]
pub use crate::graph::{DirectedGraph, Graph, UndirectedGraph, DEFAULT_CAPACITY};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::marker::{Directed, EdgeType, Undirected},
        graph::{DirectedGraph, Graph, UndirectedGraph},
        visit::{Bfs, Dfs, Traversal},
    };
}

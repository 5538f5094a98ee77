//! [Proptest](proptest) strategies generating graphs.

use std::fmt;

use proptest::{
    collection::vec,
    prelude::{any, Strategy},
};

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    graph::Graph,
};

pub const MAX_VERTICES: usize = 16;
pub const MAX_EDGES: usize = 64;

/// Generates graphs with up to [`MAX_VERTICES`] vertices and up to
/// [`MAX_EDGES`] insertions of edges between random vertex pairs. Inserting an
/// edge twice overwrites it, so the final edge count may be smaller.
pub fn graph<V, W, Ty>(vertex: V, weight: W) -> impl Strategy<Value = Graph<V::Value, W::Value, Ty>>
where
    V: Strategy,
    W: Strategy,
    W::Value: Clone,
    Ty: EdgeType + fmt::Debug,
{
    (
        vec(vertex, 0..=MAX_VERTICES),
        vec((any::<usize>(), any::<usize>(), weight), 0..=MAX_EDGES),
    )
        .prop_map(|(vertices, edges)| {
            let n = vertices.len();
            let mut graph = Graph::from_vertices(vertices);

            if n > 0 {
                for (src, dst, weight) in edges {
                    // Indices are reduced into the vertex range.
                    let _ = graph.insert_edge(src % n, dst % n, weight);
                }
            }

            graph
        })
}

pub fn graph_undirected<V, W>(
    vertex: V,
    weight: W,
) -> impl Strategy<Value = Graph<V::Value, W::Value, Undirected>>
where
    V: Strategy,
    W: Strategy,
    W::Value: Clone,
{
    graph(vertex, weight)
}

pub fn graph_directed<V, W>(
    vertex: V,
    weight: W,
) -> impl Strategy<Value = Graph<V::Value, W::Value, Directed>>
where
    V: Strategy,
    W: Strategy,
    W::Value: Clone,
{
    graph(vertex, weight)
}

use std::collections::VecDeque;

use super::*;

/// Breadth-first traversal.
///
/// When vertex `u` is taken from the queue, each of its unvisited neighbors `v`
/// is marked visited and reported by two callback invocations: first the value
/// of `u` with the weight of the edge `(u, v)`, then the value of `v` with no
/// weight.
///
/// Unlike [`Dfs`](super::Dfs), a root without unvisited neighbors produces no
/// callback at all.
///
/// # Examples
///
/// ```
/// use adjgraph::{graph::DirectedGraph, visit::Bfs};
///
/// let mut graph = DirectedGraph::from_vertices([0, 1, 2]);
/// graph.insert_edge(0, 1, 5).unwrap();
/// graph.insert_edge(1, 2, 7).unwrap();
///
/// let mut calls = Vec::new();
/// graph.for_each(Bfs, |v, w| calls.push((*v, w.copied())));
///
/// assert_eq!(calls, vec![(0, Some(5)), (1, None), (1, Some(7)), (2, None)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Traversal for Bfs {
    fn traverse<V, W, Ty, F>(&self, graph: &Graph<V, W, Ty>, mut callback: F)
    where
        Ty: EdgeType,
        F: FnMut(&V, Option<&W>),
    {
        let n = graph.vertex_count();
        let mut visited = FixedBitSet::with_capacity(n);
        let mut queue = VecDeque::new();

        for root in 0..n {
            if visited.put(root) {
                continue;
            }

            queue.push_back(root);

            while let Some(src) = queue.pop_front() {
                let mut cursor = None;

                while let Some(dst) = next_unvisited(graph, &visited, src, cursor) {
                    cursor = Some(dst);
                    visited.insert(dst);

                    callback(&graph[src], graph.cell(src, dst));
                    callback(&graph[dst], None);

                    queue.push_back(dst);
                }
            }
        }
    }
}

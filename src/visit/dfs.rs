use super::*;

/// Depth-first traversal.
///
/// When the traversal descends from vertex `u` to its unvisited neighbor `v`,
/// the callback receives the value of `u` and the weight of the edge `(u, v)`.
/// A vertex that has no unvisited neighbor at the time it is discovered is
/// reported once with no weight, which marks the end of a chain.
///
/// Every traversed edge is thus reported exactly once, attributed to its
/// source.
///
/// # Examples
///
/// ```
/// use adjgraph::{graph::DirectedGraph, visit::Dfs};
///
/// let mut graph = DirectedGraph::from_vertices([0, 1, 2, 3]);
/// graph.insert_edge(0, 1, 'a').unwrap();
/// graph.insert_edge(0, 2, 'b').unwrap();
///
/// let mut calls = Vec::new();
/// graph.for_each(Dfs, |v, w| calls.push((*v, w.copied())));
///
/// assert_eq!(
///     calls,
///     vec![(0, Some('a')), (1, None), (0, Some('b')), (2, None), (3, None)]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Traversal for Dfs {
    fn traverse<V, W, Ty, F>(&self, graph: &Graph<V, W, Ty>, mut callback: F)
    where
        Ty: EdgeType,
        F: FnMut(&V, Option<&W>),
    {
        let n = graph.vertex_count();
        let mut visited = FixedBitSet::with_capacity(n);
        // Vertices being explored, each with the last neighbor descended into.
        let mut stack: Vec<(usize, Option<usize>)> = Vec::new();

        for root in 0..n {
            if visited.put(root) {
                continue;
            }

            open(graph, &visited, &mut stack, root, &mut callback);

            while let Some(&(src, cursor)) = stack.last() {
                match next_unvisited(graph, &visited, src, cursor) {
                    Some(dst) => {
                        let top = stack.len() - 1;
                        stack[top].1 = Some(dst);

                        visited.insert(dst);
                        callback(&graph[src], graph.cell(src, dst));
                        open(graph, &visited, &mut stack, dst, &mut callback);
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
    }
}

fn open<V, W, Ty, F>(
    graph: &Graph<V, W, Ty>,
    visited: &FixedBitSet,
    stack: &mut Vec<(usize, Option<usize>)>,
    vertex: usize,
    callback: &mut F,
) where
    Ty: EdgeType,
    F: FnMut(&V, Option<&W>),
{
    if next_unvisited(graph, visited, vertex, None).is_some() {
        stack.push((vertex, None));
    } else {
        callback(&graph[vertex], None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{DirectedGraph, UndirectedGraph},
        infra::testing::record,
    };

    #[test]
    fn isolated_vertices() {
        let graph = DirectedGraph::<_, u8>::from_vertices(["a", "b", "c"]);

        assert_eq!(
            record(&graph, Dfs),
            vec![("a", None), ("b", None), ("c", None)]
        );
    }

    #[test]
    fn disconnected() {
        let mut graph = UndirectedGraph::from_vertices(0..5);
        graph.insert_edge(0, 3, 1).unwrap();
        graph.insert_edge(1, 4, 2).unwrap();

        assert_eq!(
            record(&graph, Dfs),
            vec![(0, Some(1)), (3, None), (1, Some(2)), (4, None), (2, None)]
        );
    }

    #[test]
    fn backtracks_to_remaining_neighbors() {
        //   0
        //  / \
        // 1   2
        // |
        // 3
        let mut graph = UndirectedGraph::from_vertices(0..4);
        graph.insert_edge(0, 1, 10).unwrap();
        graph.insert_edge(0, 2, 20).unwrap();
        graph.insert_edge(1, 3, 13).unwrap();

        assert_eq!(
            record(&graph, Dfs),
            vec![(0, Some(10)), (1, Some(13)), (3, None), (0, Some(20)), (2, None)]
        );
    }

    #[test]
    fn neighbor_visited_during_descent_is_skipped() {
        // 0 -> 1 -> 2 and 0 -> 2: by the time 0 gets back to 2, it is visited.
        let mut graph = DirectedGraph::from_vertices(0..3);
        graph.insert_edge(0, 1, 'x').unwrap();
        graph.insert_edge(1, 2, 'y').unwrap();
        graph.insert_edge(0, 2, 'z').unwrap();

        assert_eq!(
            record(&graph, Dfs),
            vec![(0, Some('x')), (1, Some('y')), (2, None)]
        );
    }

    #[test]
    fn cycle_and_self_loop() {
        let mut graph = DirectedGraph::from_vertices(0..3);
        graph.insert_edge(0, 0, 0).unwrap();
        graph.insert_edge(0, 1, 1).unwrap();
        graph.insert_edge(1, 2, 2).unwrap();
        graph.insert_edge(2, 0, 3).unwrap();

        assert_eq!(
            record(&graph, Dfs),
            vec![(0, Some(1)), (1, Some(2)), (2, None)]
        );
    }

    #[test]
    fn directed_edge_into_visited_root() {
        // Vertex 1 is a root of its own pass; its edge back to 0 is not
        // traversed because 0 is already visited.
        let mut graph = DirectedGraph::from_vertices(0..2);
        graph.insert_edge(1, 0, 4).unwrap();

        assert_eq!(record(&graph, Dfs), vec![(0, None), (1, None)]);
    }

    #[test]
    fn long_path() {
        let n = 5_000;
        let mut graph = DirectedGraph::with_capacity(n);
        for v in 0..n {
            graph.insert_vertex(v);
        }
        for v in 1..n {
            graph.insert_edge(v - 1, v, ()).unwrap();
        }

        let mut count = 0;
        graph.dfs(|_, _| count += 1);
        assert_eq!(count, n);
    }
}

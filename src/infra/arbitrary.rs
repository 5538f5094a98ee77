use std::fmt;

use arbitrary::Arbitrary;

use crate::{
    core::{marker::EdgeType, IndexOutOfRange},
    graph::Graph,
};

/// Vertex index that is not guaranteed to be in range.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub u8);

impl Index {
    /// Maps the index into `0..=m` so that out-of-range indices are generated
    /// too, but rarely.
    pub fn get(&self, m: usize) -> usize {
        self.0 as usize % (m + 1)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, W> {
    InsertVertex(V),
    InsertEdge(Index, Index, W),
    RemoveEdge(Index, Index),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<W> {
    InsertVertex(usize),
    InsertEdge(Result<Option<W>, IndexOutOfRange>),
    RemoveEdge(Result<Option<W>, IndexOutOfRange>),
}

impl<V, W: Clone> MutOp<V, W> {
    pub fn apply<Ty: EdgeType>(self, graph: &mut Graph<V, W, Ty>) -> MutOpResult<W> {
        let n = graph.vertex_count();

        match self {
            MutOp::InsertVertex(vertex) => MutOpResult::InsertVertex(graph.insert_vertex(vertex)),
            MutOp::InsertEdge(src, dst, weight) => {
                MutOpResult::InsertEdge(graph.insert_edge(src.get(n), dst.get(n), weight))
            }
            MutOp::RemoveEdge(src, dst) => {
                MutOpResult::RemoveEdge(graph.remove_edge(src.get(n), dst.get(n)))
            }
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, W> MutOpsSeq<V, W> {
    /// Renders the sequence as Rust code, useful for turning a fuzzer finding
    /// into a test.
    pub fn replay(&self) -> String
    where
        V: fmt::Debug,
        W: fmt::Debug,
    {
        let mut code = String::new();
        let mut n = 0;

        for op in self.0.iter() {
            let line = match op {
                MutOp::InsertVertex(vertex) => {
                    n += 1;
                    format!("graph.insert_vertex({vertex:?});\n")
                }
                MutOp::InsertEdge(src, dst, weight) => format!(
                    "let _ = graph.insert_edge({}, {}, {weight:?});\n",
                    src.get(n),
                    dst.get(n)
                ),
                MutOp::RemoveEdge(src, dst) => {
                    format!("let _ = graph.remove_edge({}, {});\n", src.get(n), dst.get(n))
                }
            };
            code.push_str(&line);
        }

        code
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use super::*;
    use crate::{
        core::marker::{Directed, Undirected},
        infra::testing::check_consistency,
    };

    #[test]
    fn index_includes_one_past_the_end() {
        assert_eq!(Index(3).get(3), 3);
        assert_eq!(Index(4).get(3), 0);
        assert_eq!(Index(200).get(0), 0);
    }

    #[test]
    fn apply() {
        let mut graph = Graph::<_, _, Undirected>::new();

        assert_eq!(
            MutOp::InsertVertex('a').apply(&mut graph),
            MutOpResult::InsertVertex(0)
        );
        assert_eq!(
            MutOp::InsertEdge(Index(0), Index(0), 1).apply(&mut graph),
            MutOpResult::InsertEdge(Ok(None))
        );
        assert!(matches!(
            MutOp::<char, i32>::RemoveEdge(Index(1), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(Err(_))
        ));
        assert_eq!(
            MutOp::<char, i32>::RemoveEdge(Index(0), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(Ok(Some(1)))
        );
    }

    #[test]
    fn random_sequences_stay_consistent() {
        let mut rng = fastrand::Rng::with_seed(42);

        for _ in 0..200 {
            let bytes = (0..256).map(|_| rng.u8(..)).collect::<Vec<_>>();
            let mut u = Unstructured::new(&bytes);

            let ops = match MutOpsSeq::<u8, i8>::arbitrary(&mut u) {
                Ok(ops) => ops,
                Err(_) => continue,
            };

            let mut directed = Graph::<_, _, Directed>::with_capacity(1);
            let mut undirected = Graph::<_, _, Undirected>::with_capacity(1);

            for op in ops {
                op.clone().apply(&mut directed);
                op.apply(&mut undirected);

                check_consistency(&directed).unwrap();
                check_consistency(&undirected).unwrap();
            }
        }
    }

    #[test]
    fn replay() {
        let ops = MutOpsSeq(vec![
            MutOp::InsertVertex(1),
            MutOp::InsertEdge(Index(0), Index(1), 2),
            MutOp::RemoveEdge(Index(0), Index(1)),
        ]);

        assert_eq!(
            ops.replay(),
            "graph.insert_vertex(1);\nlet _ = graph.insert_edge(0, 1, 2);\nlet _ = graph.remove_edge(0, 1);\n"
        );
    }
}

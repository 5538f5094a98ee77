//! Loading graphs from text records.
//!
//! Every line holds one record of three whitespace-separated tokens,
//! `source destination weight`. Reading stops at the end of input or at the
//! first line with at most one character.
//!
//! How the source and destination tokens map to vertices is controlled by
//! [`VertexPolicy`].

use std::{
    fs::File,
    hash::Hash,
    io::{BufRead, BufReader},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use rustc_hash::FxHashMap;

use crate::{
    core::{marker::EdgeType, IngestError, Token},
    graph::Graph,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexPolicy {
    /// Records describe chains of edges. The source is appended as a new vertex
    /// unless it is equal to the most recently inserted vertex, the destination
    /// is always appended as a new vertex.
    ///
    /// Equal values in non-adjacent records therefore become distinct
    /// vertices. This is the format of existing record files.
    #[default]
    Chain,
    /// Tokens with equal values always refer to the same vertex, a new vertex
    /// is appended only for a value not seen before.
    Distinct,
}

/// Reads records from `reader` into `graph` and returns the number of records
/// read.
pub fn read_records<V, W, Ty, R>(
    graph: &mut Graph<V, W, Ty>,
    reader: R,
    policy: VertexPolicy,
) -> Result<usize, IngestError>
where
    V: FromStr + Eq + Hash + Clone,
    W: FromStr + Clone,
    Ty: EdgeType,
    R: BufRead,
{
    let mut loader = Loader::new(graph, policy);
    let mut count = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.chars().count() <= 1 {
            break;
        }

        log::debug!("record {}: {}", i + 1, line);

        let mut tokens = line.split_whitespace();
        let src = parse::<V>(&mut tokens, i + 1, Token::Source)?;
        let dst = parse::<V>(&mut tokens, i + 1, Token::Destination)?;
        let weight = parse::<W>(&mut tokens, i + 1, Token::Weight)?;

        loader.insert(src, dst, weight)?;
        count += 1;
    }

    Ok(count)
}

/// Reads records from the file at `path` into `graph`.
///
/// If the file cannot be opened, the failure is logged and the graph is left
/// untouched, reporting zero records read.
pub fn read_file<V, W, Ty, P>(
    graph: &mut Graph<V, W, Ty>,
    path: P,
    policy: VertexPolicy,
) -> Result<usize, IngestError>
where
    V: FromStr + Eq + Hash + Clone,
    W: FromStr + Clone,
    Ty: EdgeType,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match File::open(path) {
        Ok(file) => read_records(graph, BufReader::new(file), policy),
        Err(error) => {
            log::warn!("cannot open {}: {}", path.display(), error);
            Ok(0)
        }
    }
}

fn parse<T: FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    line: usize,
    token: Token,
) -> Result<T, IngestError> {
    let text = tokens
        .next()
        .ok_or(IngestError::MissingToken { line, token })?;

    text.parse().map_err(|_| IngestError::InvalidToken {
        line,
        token,
        text: text.to_string(),
    })
}

struct Loader<'a, V, W, Ty: EdgeType> {
    graph: &'a mut Graph<V, W, Ty>,
    policy: VertexPolicy,
    index: FxHashMap<V, usize>,
}

impl<'a, V, W, Ty> Loader<'a, V, W, Ty>
where
    V: Eq + Hash + Clone,
    W: Clone,
    Ty: EdgeType,
{
    fn new(graph: &'a mut Graph<V, W, Ty>, policy: VertexPolicy) -> Self {
        let index = match policy {
            VertexPolicy::Chain => FxHashMap::default(),
            // The first occurrence wins if the graph already has duplicates.
            VertexPolicy::Distinct => graph.vertices().iter().enumerate().rev().fold(
                FxHashMap::default(),
                |mut index, (i, vertex)| {
                    index.insert(vertex.clone(), i);
                    index
                },
            ),
        };

        Self {
            graph,
            policy,
            index,
        }
    }

    fn insert(&mut self, src: V, dst: V, weight: W) -> Result<(), IngestError> {
        let (src, dst) = match self.policy {
            VertexPolicy::Chain => {
                if self.graph.vertices().last() != Some(&src) {
                    self.graph.insert_vertex(src);
                }
                self.graph.insert_vertex(dst);

                let n = self.graph.vertex_count();
                (n - 2, n - 1)
            }
            VertexPolicy::Distinct => (self.vertex(src), self.vertex(dst)),
        };

        self.graph.insert_edge(src, dst, weight)?;
        Ok(())
    }

    fn vertex(&mut self, value: V) -> usize {
        if let Some(&index) = self.index.get(&value) {
            return index;
        }

        let index = self.graph.insert_vertex(value.clone());
        self.index.insert(value, index);
        index
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        graph::{DirectedGraph, UndirectedGraph},
        infra::testing::{check_consistency, record},
        visit::Dfs,
    };

    const RECORDS: &str = "1 2 5\n2 3 7\n1 3 4\n";

    #[test]
    fn chain_collapses_consecutive_sources_only() {
        let mut graph = DirectedGraph::<i32, i32>::new();

        let count = read_records(&mut graph, Cursor::new(RECORDS), VertexPolicy::Chain).unwrap();

        assert_eq!(count, 3);
        // "2" of the second line repeats the last vertex, "1" of the third
        // line does not.
        assert_eq!(graph.vertices(), &[1, 2, 3, 1, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight_at(0, 1), Ok(Some(&5)));
        assert_eq!(graph.weight_at(1, 2), Ok(Some(&7)));
        assert_eq!(graph.weight_at(3, 4), Ok(Some(&4)));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn chain_repeated_destination_is_new_vertex() {
        let mut graph = DirectedGraph::<i32, i32>::new();

        read_records(&mut graph, Cursor::new("1 1 9\n"), VertexPolicy::Chain).unwrap();

        assert_eq!(graph.vertices(), &[1, 1]);
        assert_eq!(graph.weight_at(0, 1), Ok(Some(&9)));
    }

    #[test]
    fn distinct_reuses_vertices() {
        let mut graph = DirectedGraph::<i32, i32>::new();

        read_records(&mut graph, Cursor::new(RECORDS), VertexPolicy::Distinct).unwrap();

        assert_eq!(graph.vertices(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight_at(0, 2), Ok(Some(&4)));
        assert_eq!(
            record(&graph, Dfs),
            vec![(1, Some(5)), (2, Some(7)), (3, None)]
        );
    }

    #[test]
    fn distinct_extends_existing_graph() {
        let mut graph = UndirectedGraph::<String, u32>::from_vertices([
            String::from("a"),
            String::from("b"),
        ]);

        read_records(&mut graph, Cursor::new("b c 1\nc a 2\n"), VertexPolicy::Distinct).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight_at(1, 2), Ok(Some(&1)));
        assert_eq!(graph.weight_at(0, 2), Ok(Some(&2)));
    }

    #[test]
    fn short_line_terminates() {
        let mut graph = DirectedGraph::<i32, i32>::new();

        let count = read_records(
            &mut graph,
            Cursor::new("1 2 3\n\n4 5 6\n"),
            VertexPolicy::Chain,
        )
        .unwrap();
        assert_eq!(count, 1);

        let count = read_records(&mut graph, Cursor::new("x\n4 5 6\n"), VertexPolicy::Chain).unwrap();
        assert_eq!(count, 0);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn missing_token() {
        let mut graph = DirectedGraph::<i32, i32>::new();

        let result = read_records(&mut graph, Cursor::new("1 2 3\n4 5\n"), VertexPolicy::Chain);

        assert_matches!(
            result,
            Err(IngestError::MissingToken {
                line: 2,
                token: Token::Weight
            })
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn invalid_token() {
        let mut graph = DirectedGraph::<i32, u8>::new();

        let result = read_records(&mut graph, Cursor::new("1 x 3\n"), VertexPolicy::Chain);
        assert_matches!(
            result,
            Err(IngestError::InvalidToken { line: 1, token: Token::Destination, ref text }) if text == "x"
        );

        let result = read_records(&mut graph, Cursor::new("1 2 300\n"), VertexPolicy::Chain);
        assert_matches!(
            result,
            Err(IngestError::InvalidToken {
                token: Token::Weight,
                ..
            })
        );
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RECORDS.as_bytes()).unwrap();

        let mut graph = UndirectedGraph::<i32, i32>::new();
        let count = super::read_file(&mut graph, file.path(), VertexPolicy::Distinct).unwrap();

        assert_eq!(count, 3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight_at(2, 0), Ok(Some(&4)));
    }

    #[test]
    fn missing_file_is_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir().unwrap();
        let mut graph = DirectedGraph::<i32, i32>::new();

        let count = super::read_file(
            &mut graph,
            dir.path().join("records.txt"),
            VertexPolicy::Chain,
        )
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(graph.vertex_count(), 0);
    }
}

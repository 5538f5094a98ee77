use thiserror::Error;

use crate::{core::marker::EdgeType, graph::Graph, visit::Traversal};

/// Creates a path `0 - 1 - ... - (n - 1)` where vertex values are their
/// indices and the edge `(i, i + 1)` has weight `i + 1`.
pub fn create_path<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, usize, Ty> {
    let mut graph = Graph::from_vertices(0..vertex_count);

    for src in 1..vertex_count {
        // Both endpoints exist.
        let _ = graph.insert_edge(src - 1, src, src);
    }

    graph
}

/// Creates a graph with an edge between every pair of distinct vertices, all
/// with weight `1`.
pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, usize, Ty> {
    let mut graph = Graph::from_vertices(0..vertex_count);

    for src in 0..vertex_count {
        for dst in 0..vertex_count {
            if src == dst || (!Ty::is_directed() && dst < src) {
                continue;
            }

            let _ = graph.insert_edge(src, dst, 1);
        }
    }

    graph
}

/// Collects the callback invocations of the traversal `algo`.
pub fn record<V, W, Ty, A>(graph: &Graph<V, W, Ty>, algo: A) -> Vec<(V, Option<W>)>
where
    V: Clone,
    W: Clone,
    Ty: EdgeType,
    A: Traversal,
{
    let mut calls = Vec::new();
    graph.for_each(algo, |vertex, weight| {
        calls.push((vertex.clone(), weight.cloned()))
    });
    calls
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("capacity ({0}) is less than vertex count ({1})")]
    CapacityTooSmall(usize, usize),
    #[error("adjacency matrix is not square ({0}x{1})")]
    MatrixNotSquare(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("cell ({0}, {1}) holds an edge but a vertex does not exist")]
    DanglingEdge(usize, usize),
    #[error("cells ({0}, {1}) and ({1}, {0}) of an undirected graph differ")]
    Asymmetric(usize, usize),
    #[error("neighbor cursor disagrees with the matrix at row {0}")]
    NeighborsMismatch(usize),
}

pub fn check_consistency<V, W, Ty>(graph: &Graph<V, W, Ty>) -> Result<(), ConsistencyCheckError>
where
    W: PartialEq,
    Ty: EdgeType,
{
    let matrix = graph.matrix();
    let vertex_count = graph.vertex_count();

    if matrix.rows() != matrix.cols() {
        return Err(ConsistencyCheckError::MatrixNotSquare(
            matrix.rows(),
            matrix.cols(),
        ));
    }

    if graph.capacity() < vertex_count {
        return Err(ConsistencyCheckError::CapacityTooSmall(
            graph.capacity(),
            vertex_count,
        ));
    }

    let dangling = matrix
        .iter()
        .find(|(row, col, cell)| cell.is_some() && (*row >= vertex_count || *col >= vertex_count));

    if let Some((row, col, _)) = dangling {
        return Err(ConsistencyCheckError::DanglingEdge(row, col));
    }

    if !Ty::is_directed() {
        let asymmetric = matrix
            .iter()
            .find(|(row, col, cell)| matrix[(*col, *row)] != **cell);

        if let Some((row, col, _)) = asymmetric {
            return Err(ConsistencyCheckError::Asymmetric(row, col));
        }
    }

    let edges = graph.edges().count();
    if edges != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges,
            graph.edge_count(),
        ));
    }

    for src in 0..vertex_count {
        let from_cursor = graph.neighbors(src).map(|(dst, _)| dst);
        let from_matrix = (0..vertex_count).filter(|&dst| matrix[(src, dst)].is_some());

        if !from_cursor.eq(from_matrix) {
            return Err(ConsistencyCheckError::NeighborsMismatch(src));
        }
    }

    Ok(())
}

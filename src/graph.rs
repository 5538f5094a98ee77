//! The adjacency-matrix graph.
//!
//! A [`Graph`] stores its vertices in insertion order, so the vertex index is
//! also its ID, and keeps a square matrix of `Option<W>` cells sized to the
//! vertex capacity. A cell holds `Some(weight)` if there is an edge from the
//! row vertex to the column vertex. Zero (or any other value) is a valid
//! weight.
//!
//! Vertices can't be removed, only edges.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{graph::UndirectedGraph, infra::export::Trace, visit::Dfs};
//!
//! let mut graph = UndirectedGraph::new_undirected();
//!
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//!
//! graph.insert_edge(a, b, 3).unwrap();
//! graph.insert_edge(b, c, 0).unwrap();
//!
//! assert_eq!(graph.weight_at(b, a), Ok(Some(&3)));
//! assert_eq!(graph.edge_count(), 2);
//!
//! assert_eq!(Trace::of(&graph, Dfs), "a --( 3 )-- b --( 0 )-- c\n");
//! ```

use std::{marker::PhantomData, mem, ops::Index};

use crate::{
    core::{
        marker::{Directed, EdgeType, Undirected},
        EndpointKind, IndexOutOfRange, Matrix,
    },
    visit::{Bfs, Dfs, Traversal},
};

/// Vertex capacity of a graph created by [`Graph::new`].
pub const DEFAULT_CAPACITY: usize = 10;

pub type DirectedGraph<V, W> = Graph<V, W, Directed>;
pub type UndirectedGraph<V, W> = Graph<V, W, Undirected>;

#[derive(Debug, Clone)]
pub struct Graph<V, W, Ty: EdgeType> {
    vertices: Vec<V>,
    matrix: Matrix<Option<W>>,
    n_edges: usize,
    ty: PhantomData<Ty>,
}

impl<V, W, Ty: EdgeType> Graph<V, W, Ty> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            matrix: Matrix::from_fn(capacity, capacity, |_, _| None),
            n_edges: 0,
            ty: PhantomData,
        }
    }

    /// Creates a graph with given vertices and no edges. The capacity is equal
    /// to the number of vertices.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let vertices = vertices.into_iter().collect::<Vec<_>>();
        let n = vertices.len();

        Self {
            vertices,
            matrix: Matrix::from_fn(n, n, |_, _| None),
            n_edges: 0,
            ty: PhantomData,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Number of vertices the graph can hold before its matrix needs to grow.
    pub fn capacity(&self) -> usize {
        self.matrix.rows()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut V> {
        self.vertices.get_mut(index)
    }

    /// All vertices, in the index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn find_vertex(&self, vertex: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// The raw adjacency matrix. Its extent is the capacity, cells outside of
    /// the vertex range are always empty.
    pub fn matrix(&self) -> &Matrix<Option<W>> {
        &self.matrix
    }

    /// Appends a vertex and returns its index.
    ///
    /// When the vertex count reaches the capacity, the capacity doubles and the
    /// existing edges are moved to a new, larger matrix.
    pub fn insert_vertex(&mut self, vertex: V) -> usize {
        if self.vertices.len() >= self.capacity() {
            self.grow();
        }

        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    pub fn weight_at(&self, src: usize, dst: usize) -> Result<Option<&W>, IndexOutOfRange> {
        self.check_range(src, dst)?;
        Ok(self.matrix[(src, dst)].as_ref())
    }

    pub fn contains_edge(&self, src: usize, dst: usize) -> bool {
        matches!(self.weight_at(src, dst), Ok(Some(_)))
    }

    /// Returns the smallest neighbor of `src` that is greater than `after` (or
    /// the smallest neighbor at all if `after` is `None`).
    ///
    /// Returns `None` if there is no such neighbor or `src` is not a vertex of
    /// the graph.
    pub fn next_neighbor(&self, src: usize, after: Option<usize>) -> Option<usize> {
        if src >= self.vertex_count() {
            return None;
        }

        let start = after.map_or(0, |k| k.saturating_add(1));
        (start..self.vertex_count()).find(|&dst| self.matrix[(src, dst)].is_some())
    }

    /// Iterates over the neighbors of `src` in increasing index order together
    /// with the weights of the connecting edges.
    pub fn neighbors(&self, src: usize) -> NeighborsIter<'_, V, W, Ty> {
        NeighborsIter {
            graph: self,
            src,
            cursor: None,
        }
    }

    /// Iterates over all edges as `(src, dst, weight)` in row-major order.
    ///
    /// In undirected graphs, every edge is reported once with `src <= dst`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &W)> + '_ {
        let n = self.vertex_count();

        (0..n).flat_map(move |src| {
            let first = if Ty::is_directed() { 0 } else { src };
            (first..n).filter_map(move |dst| {
                self.matrix[(src, dst)]
                    .as_ref()
                    .map(|weight| (src, dst, weight))
            })
        })
    }

    /// Runs the traversal `algo` on the graph, calling `callback` at every
    /// visitation event.
    ///
    /// See [`Dfs`] and [`Bfs`] for the order and the arguments of the calls.
    pub fn for_each<A, F>(&self, algo: A, callback: F)
    where
        A: Traversal,
        F: FnMut(&V, Option<&W>),
    {
        algo.traverse(self, callback);
    }

    pub fn dfs<F>(&self, callback: F)
    where
        F: FnMut(&V, Option<&W>),
    {
        self.for_each(Dfs, callback);
    }

    pub fn bfs<F>(&self, callback: F)
    where
        F: FnMut(&V, Option<&W>),
    {
        self.for_each(Bfs, callback);
    }

    /// Exchanges vertices and edges with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub(crate) fn cell(&self, src: usize, dst: usize) -> Option<&W> {
        self.matrix[(src, dst)].as_ref()
    }

    fn grow(&mut self) {
        let capacity = (self.capacity() * 2).max(1);

        log::trace!(
            "growing adjacency matrix capacity from {} to {}",
            self.capacity(),
            capacity
        );

        let matrix = mem::take(&mut self.matrix);
        self.matrix = matrix.grow(capacity, capacity, || None);
    }

    fn check_range(&self, src: usize, dst: usize) -> Result<(), IndexOutOfRange> {
        let n = self.vertex_count();

        if src >= n {
            Err(IndexOutOfRange::new(src, dst, n, EndpointKind::Source))
        } else if dst >= n {
            Err(IndexOutOfRange::new(src, dst, n, EndpointKind::Destination))
        } else {
            Ok(())
        }
    }
}

impl<V, W: Clone, Ty: EdgeType> Graph<V, W, Ty> {
    /// Connects `src` and `dst` with an edge of given weight and returns the
    /// weight it replaced, if the edge already existed.
    ///
    /// The edge count grows by one for a new edge, even in undirected graphs
    /// where two cells are written.
    pub fn insert_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: W,
    ) -> Result<Option<W>, IndexOutOfRange> {
        self.check_range(src, dst)?;

        let prev = Ty::write_edge(&mut self.matrix, src, dst, Some(weight));
        if prev.is_none() {
            self.n_edges += 1;
        }

        Ok(prev)
    }

    /// Disconnects `src` and `dst` and returns the weight of the removed edge.
    ///
    /// Removing an edge that does not exist is not an error, the graph just
    /// stays the same and `None` is returned.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<Option<W>, IndexOutOfRange> {
        self.check_range(src, dst)?;

        let prev = Ty::write_edge(&mut self.matrix, src, dst, None);
        if prev.is_some() {
            self.n_edges -= 1;
        }

        Ok(prev)
    }
}

impl<V, W> Graph<V, W, Undirected> {
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W, Directed> {
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<V, W, Ty: EdgeType> Default for Graph<V, W, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, Ty: EdgeType> FromIterator<V> for Graph<V, W, Ty> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<V, W, Ty: EdgeType> Index<usize> for Graph<V, W, Ty> {
    type Output = V;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

pub struct NeighborsIter<'a, V, W, Ty: EdgeType> {
    graph: &'a Graph<V, W, Ty>,
    src: usize,
    cursor: Option<usize>,
}

impl<'a, V, W, Ty: EdgeType> Iterator for NeighborsIter<'a, V, W, Ty> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        let dst = self.graph.next_neighbor(self.src, self.cursor)?;
        self.cursor = Some(dst);
        self.graph.cell(self.src, dst).map(|weight| (dst, weight))
    }
}

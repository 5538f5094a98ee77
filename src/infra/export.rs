//! Textual renderings of graphs and traversals.
//!
//! * [`Trace`] renders the callback invocations of a traversal, one chain of
//!   edges per line.
//! * [`Adjacency`] dumps the adjacency matrix.
//! * [`Dot`] exports the graph in the GraphViz format.

use std::{
    fmt::{self, Display},
    io::{self, Write},
    marker::PhantomData,
};

use crate::{
    core::{marker::EdgeType, Matrix},
    graph::Graph,
    visit::Traversal,
};

pub trait Export<V, W, Ty: EdgeType> {
    fn export<O: Write>(&self, graph: &Graph<V, W, Ty>, out: &mut O) -> io::Result<()>;
}

/// Accumulates traversal steps as text.
///
/// A step with a weight renders as `value --( weight )-- ` in undirected
/// graphs and `value --( weight )-> ` in directed graphs. A step without a
/// weight renders as the value followed by a line break.
#[derive(Debug, Clone)]
pub struct Trace<Ty> {
    out: String,
    ty: PhantomData<Ty>,
}

impl<Ty: EdgeType> Trace<Ty> {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            ty: PhantomData,
        }
    }

    /// Renders the whole traversal `algo` of `graph`.
    pub fn of<V, W, A>(graph: &Graph<V, W, Ty>, algo: A) -> String
    where
        V: Display,
        W: Display,
        A: Traversal,
    {
        let mut trace = Self::new();
        graph.for_each(algo, |vertex, weight| trace.step(vertex, weight));
        trace.into_string()
    }

    pub fn step<V: Display, W: Display>(&mut self, vertex: &V, weight: Option<&W>) {
        self.out.push_str(&step::<Ty, V, W>(vertex, weight));
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl<Ty: EdgeType> Default for Trace<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a single traversal step in the [`Trace`] format.
pub fn write_step<Ty, V, W, O>(out: &mut O, vertex: &V, weight: Option<&W>) -> io::Result<()>
where
    Ty: EdgeType,
    V: Display,
    W: Display,
    O: Write,
{
    out.write_all(step::<Ty, V, W>(vertex, weight).as_bytes())
}

fn step<Ty: EdgeType, V: Display, W: Display>(vertex: &V, weight: Option<&W>) -> String {
    match weight {
        Some(weight) => format!("{vertex} --( {weight} ){} ", Ty::connector()),
        None => format!("{vertex}\n"),
    }
}

/// Displays the adjacency matrix of the vertices of a graph.
///
/// Uses the [`Matrix`] format, empty cells are shown as the `empty`
/// placeholder (`0` by default).
pub struct Adjacency<'a, V, W, Ty: EdgeType> {
    graph: &'a Graph<V, W, Ty>,
    empty: &'a str,
}

impl<'a, V, W, Ty: EdgeType> Adjacency<'a, V, W, Ty> {
    pub fn new(graph: &'a Graph<V, W, Ty>) -> Self {
        Self { graph, empty: "0" }
    }

    pub fn with_empty(self, empty: &'a str) -> Self {
        Self { empty, ..self }
    }
}

impl<V, W: Display, Ty: EdgeType> Display for Adjacency<'_, V, W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.graph.vertex_count();
        let cells = Matrix::from_fn(n, n, |src, dst| match self.graph.cell(src, dst) {
            Some(weight) => weight.to_string(),
            None => self.empty.to_string(),
        });

        Display::fmt(&cells, f)
    }
}

pub struct Dot<V, W> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_edge_label: Box<dyn Fn(&W) -> String>,
}

impl<V, W> Dot<V, W> {
    pub fn new<FV, FW>(name: Option<String>, get_vertex_label: FV, get_edge_label: FW) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FW: Fn(&W) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string<Ty: EdgeType>(&self, graph: &Graph<V, W, Ty>) -> String {
        let mut out = Vec::new();
        self.export(graph, &mut out)
            .expect("writing to vec does not fail");

        String::from_utf8(out).expect("dot format is text format")
    }
}

impl<V: Display, W: Display> Dot<V, W> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |w| format!("{w}"))
    }
}

impl<V, W, Ty: EdgeType> Export<V, W, Ty> for Dot<V, W> {
    fn export<O: Write>(&self, graph: &Graph<V, W, Ty>, out: &mut O) -> io::Result<()> {
        if graph.is_directed() {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (index, vertex) in graph.vertices().iter().enumerate() {
            writeln!(
                out,
                "    v{index} [label={:?}];",
                (self.get_vertex_label)(vertex)
            )?;
        }

        for (src, dst, weight) in graph.edges() {
            writeln!(
                out,
                "    v{src} {} v{dst} [label={:?}];",
                Ty::connector(),
                (self.get_edge_label)(weight)
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

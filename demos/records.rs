//! Builds a directed graph from `records.txt` in the current directory and
//! prints its depth-first and breadth-first traversals.
//!
//! Each line of the file is a `source destination weight` record, see
//! `demos/records.txt` for an example. Run with `RUST_LOG=debug` to see the
//! records as they are read.

use std::io::{self, Write};

use adjgraph::{
    core::marker::Directed,
    infra::export::{write_step, Adjacency},
    ingest::{self, VertexPolicy},
    visit::{Bfs, Dfs, Traversal},
    DirectedGraph,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut graph = DirectedGraph::<i32, i32>::new_directed();

    println!("Building graph from records.txt");
    ingest::read_file(&mut graph, "records.txt", VertexPolicy::Chain)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", Adjacency::new(&graph))?;
    writeln!(out, "{} edges", graph.edge_count())?;

    writeln!(out, "DFS")?;
    print_traversal(&mut out, &graph, Dfs)?;

    writeln!(out, "BFS")?;
    print_traversal(&mut out, &graph, Bfs)?;

    Ok(())
}

fn print_traversal<O, A>(out: &mut O, graph: &DirectedGraph<i32, i32>, algo: A) -> io::Result<()>
where
    O: Write,
    A: Traversal,
{
    let mut result = Ok(());

    graph.for_each(algo, |vertex, weight| {
        if result.is_ok() {
            result = write_step::<Directed, _, _, _>(out, vertex, weight);
        }
    });

    result
}

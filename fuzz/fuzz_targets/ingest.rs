#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::testing::check_consistency,
    ingest::{read_records, VertexPolicy},
    DirectedGraph, UndirectedGraph,
};

fuzz_target!(|data: &[u8]| {
    let mut directed = DirectedGraph::<i16, i8>::new();
    let _ = read_records(&mut directed, data, VertexPolicy::Chain);
    check_consistency(&directed).unwrap();

    let mut undirected = UndirectedGraph::<i16, i8>::new();
    let _ = read_records(&mut undirected, data, VertexPolicy::Distinct);
    check_consistency(&undirected).unwrap();
});

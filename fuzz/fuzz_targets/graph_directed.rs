#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    core::marker::Directed,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    visit::{Bfs, Dfs},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::<_, _, Directed>::with_capacity(1);

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    let mut count = 0;
    graph.for_each(Dfs, |_, weight| count += weight.is_some() as usize);
    assert!(count < graph.vertex_count().max(1));

    graph.for_each(Bfs, |_, _| {});
});

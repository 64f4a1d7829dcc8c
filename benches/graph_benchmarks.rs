use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keygraph::{Edge, Graph, GraphConfig, Vertex};

fn chain_graph(size: u64, config: GraphConfig) -> Graph<u64, u64> {
    let mut graph = Graph::with_config(config);
    graph.add_vertices((0..size).map(|i| Vertex::of(i, i)));
    graph.add_edges((1..size).map(|i| Edge::bidirectional(i - 1, i)));
    graph
}

/// Benchmark bulk edge insertion throughput
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100u64, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| chain_graph(size, GraphConfig::default()));
        });
    }
    group.finish();
}

/// Benchmark endpoint scans, sequential vs rayon
fn bench_endpoint_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("endpoint_scan");

    for size in [1000u64, 100_000].iter() {
        let sequential = chain_graph(*size, GraphConfig::sequential());
        let parallel = chain_graph(*size, GraphConfig { parallel_threshold: 0 });
        let key = size / 2;

        group.bench_with_input(BenchmarkId::new("sequential", size), &key, |b, key| {
            b.iter(|| sequential.get_edges(key).len());
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &key, |b, key| {
            b.iter(|| parallel.get_edges(key).len());
        });
    }
    group.finish();
}

/// Benchmark vertex removal with edge cascade
fn bench_remove_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_vertex");

    for size in [1000u64, 10_000].iter() {
        let graph = chain_graph(*size, GraphConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = graph.clone();
                graph.remove_vertex(&(size / 2)).is_ok()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_insertion, bench_endpoint_scan, bench_remove_vertex);
criterion_main!(benches);

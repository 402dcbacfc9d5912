// Cycle detection benchmarks on chains, wide fan-outs and random DAGs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dagcheck_core::{check_dag, Pipeline};
use rand::prelude::*;

fn chain(size: usize) -> Pipeline {
    let mut pipeline = Pipeline::default();
    for i in 0..size {
        pipeline = pipeline.with_node(format!("n{}", i));
    }
    for i in 1..size {
        pipeline = pipeline.with_edge(format!("n{}", i - 1), format!("n{}", i));
    }
    pipeline
}

fn fan_out(size: usize) -> Pipeline {
    let mut pipeline = Pipeline::default().with_node("root");
    for i in 0..size {
        pipeline = pipeline
            .with_node(format!("leaf{}", i))
            .with_edge("root", format!("leaf{}", i));
    }
    pipeline
}

fn random_dag(size: usize, edges_per_node: usize) -> Pipeline {
    let mut rng = StdRng::seed_from_u64(0xDA6);
    let mut pipeline = Pipeline::default();
    for i in 0..size {
        pipeline = pipeline.with_node(format!("n{}", i));
    }
    for j in 1..size {
        for _ in 0..edges_per_node {
            let i = rng.random_range(0..j);
            pipeline = pipeline.with_edge(format!("n{}", i), format!("n{}", j));
        }
    }
    pipeline.nodes.shuffle(&mut rng);
    pipeline
}

fn benchmark_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    for size in [100, 1000, 10000].iter() {
        let pipeline = chain(*size);
        group.bench_with_input(BenchmarkId::new("check_dag", size), &pipeline, |b, p| {
            b.iter(|| black_box(check_dag(black_box(p))));
        });
    }

    group.finish();
}

fn benchmark_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for size in [1000, 10000].iter() {
        let pipeline = fan_out(*size);
        group.bench_with_input(BenchmarkId::new("check_dag", size), &pipeline, |b, p| {
            b.iter(|| black_box(check_dag(black_box(p))));
        });
    }

    group.finish();
}

fn benchmark_random_dag(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_dag");

    for size in [1000, 10000].iter() {
        let pipeline = random_dag(*size, 4);
        group.bench_with_input(BenchmarkId::new("check_dag", size), &pipeline, |b, p| {
            b.iter(|| black_box(check_dag(black_box(p))));
        });

        let cyclic = pipeline.clone().with_edge(format!("n{}", size - 1), "n0");
        group.bench_with_input(BenchmarkId::new("check_dag_cyclic", size), &cyclic, |b, p| {
            b.iter(|| black_box(check_dag(black_box(p))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_chain, benchmark_fan_out, benchmark_random_dag);
criterion_main!(benches);

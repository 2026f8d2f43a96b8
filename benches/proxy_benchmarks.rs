// Performance benchmarks for the StatsD proxy
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use statsd_proxy::backend::structs::statsd_backend::StatsdBackend;
use statsd_proxy::metric::metric::{parse_line, split_lines};
use statsd_proxy::metric::structs::metric_sample::MetricSample;
use statsd_proxy::ring::structs::hash_ring::HashRing;

fn create_ring(rt: &tokio::runtime::Runtime, size: u16, mirror: bool) -> HashRing {
    rt.block_on(async {
        let mut ring = HashRing::new(mirror);
        for offset in 0..size {
            let backend = StatsdBackend::new("127.0.0.1", 20000 + offset, 0, 1000).unwrap();
            backend.check_liveness().await;
            ring.add(Arc::new(backend)).unwrap();
        }
        ring
    })
}

fn bench_parse_line(c: &mut Criterion) {
    c.bench_function("parse_line", |b| {
        b.iter(|| black_box(parse_line(black_box("api.requests.latency:12.5|ms|@0.1"))));
    });
}

fn bench_parse_datagram(c: &mut Criterion) {
    let datagram: Vec<u8> = (0..16)
        .map(|i| format!("service.metric_{i}:{i}|c\n"))
        .collect::<String>()
        .into_bytes();
    c.bench_function("parse_datagram_16_lines", |b| {
        b.iter(|| {
            let parsed = split_lines(black_box(&datagram))
                .filter_map(|line| MetricSample::from_bytes(line).ok())
                .count();
            black_box(parsed)
        });
    });
}

fn bench_resolve_metric(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("resolve_metric");
    for size in [2u16, 8, 32] {
        let ring = create_ring(&rt, size, false);
        group.bench_with_input(BenchmarkId::from_parameter(size), &ring, |b, ring| {
            b.iter(|| black_box(ring.resolve_metric(black_box("api.requests.latency")).map(|backends| backends.len())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_parse_datagram, bench_resolve_metric);
criterion_main!(benches);

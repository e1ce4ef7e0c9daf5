//! Criterion benchmarks for collinear extraction.
//! Brute sizes stay small (O(n⁴)); fast sizes go up to a few hundred points.
//! Results: by default under target/criterion.

use collinear::rand::{draw_planted, CloudCfg, PlantedCfg, ReplayToken};
use collinear::Extractor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn planted(n: usize, seed: u64) -> Extractor {
    let lines = (n / 16).max(1);
    let run_len = 5;
    let cfg = PlantedCfg {
        cloud: CloudCfg {
            noise: n.saturating_sub(lines * run_len),
            bound: 4096,
        },
        lines,
        run_len,
    };
    Extractor::new(draw_planted(cfg, ReplayToken { seed, index: n as u64 }))
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for &n in &[16usize, 32, 48] {
        let ex = planted(n, 41);
        group.bench_with_input(BenchmarkId::new("brute", n), &ex, |b, ex| {
            b.iter(|| ex.lines_brute())
        });
    }
    for &n in &[16usize, 64, 256, 512] {
        let ex = planted(n, 42);
        group.bench_with_input(BenchmarkId::new("fast", n), &ex, |b, ex| {
            b.iter(|| ex.lines_fast())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

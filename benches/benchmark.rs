//! Performance benchmarks for OverlapSampler
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use overlap_sampler::core::{
    boundary_positions, EditOp, EditScript, Overlap, SampledOverlap, SamplingConfig, Strand,
};
use overlap_sampler::formats::{sample_overlaps, OverlapAlignment, PafRecordView};

/// Noisy long-read style alignment of `len` columns
fn synthetic_script(len: usize) -> EditScript {
    let ops = (0..len)
        .map(|k| match k % 37 {
            0 => EditOp::Insert,
            5 => EditOp::Delete,
            11 | 23 => EditOp::Mismatch,
            _ => EditOp::Match,
        })
        .collect::<Vec<_>>();
    EditScript::new(ops)
}

fn synthetic_overlap(script: &EditScript, target_start: u64) -> Overlap {
    Overlap {
        query_name: "read".to_string(),
        query_len: script.query_len() + 1000,
        query_start: 500,
        query_end: 500 + script.query_len(),
        strand: Strand::Plus,
        target_name: "contig".to_string(),
        target_len: target_start + script.target_len(),
        target_start,
        target_end: target_start + script.target_len(),
    }
}

/// Benchmark boundary generation
fn bench_boundaries(c: &mut Criterion) {
    c.bench_function("boundary_positions_100k", |b| {
        b.iter(|| {
            let result = boundary_positions(
                black_box(123),
                black_box(100_123),
                black_box(500),
                black_box(0),
            );
            black_box(result)
        })
    });
}

/// Benchmark single overlap sampling at several alignment lengths
fn bench_single_overlap(c: &mut Criterion) {
    let config = SamplingConfig::default();
    let mut group = c.benchmark_group("sample_overlap");

    for len in [1_000usize, 10_000, 100_000].iter() {
        let script = synthetic_script(*len);
        let overlap = synthetic_overlap(&script, 250);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| {
                let sampled =
                    SampledOverlap::from_alignment(black_box(&overlap), 0, &script, &config);
                black_box(sampled)
            })
        });
    }

    group.finish();
}

/// Benchmark parallel batch sampling
fn bench_batch(c: &mut Criterion) {
    let config = SamplingConfig::new(500, 10).unwrap();
    let alignments: Vec<OverlapAlignment> = (0..256u64)
        .map(|i| {
            let script = synthetic_script(20_000);
            let overlap = synthetic_overlap(&script, i * 97);
            OverlapAlignment { overlap_id: i, overlap, script }
        })
        .collect();

    let mut group = c.benchmark_group("batch_sampling");
    group.throughput(Throughput::Elements(alignments.len() as u64));

    for threads in [1usize, 4].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(threads), threads, |b, &threads| {
            b.iter(|| {
                let result = sample_overlaps(black_box(&alignments), &config, threads).unwrap();
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark PAF line parsing
fn bench_paf_parsing(c: &mut Criterion) {
    let line = b"read1\t12000\t35\t11835\t+\tread2\t15000\t2100\t13901\t11299\t11802\t60\ttp:A:S\tcg:Z:500=1I300=2D10999=";

    c.bench_function("paf_parsing", |b| {
        b.iter(|| {
            let view = PafRecordView::parse(black_box(line.as_slice())).unwrap();
            black_box(view.to_alignment())
        })
    });
}

criterion_group!(
    benches,
    bench_boundaries,
    bench_single_overlap,
    bench_batch,
    bench_paf_parsing,
);

criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mini_llm_cpu::{argmax, softmax};

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");

    for size in [7, 1024, 32000] {
        let logits: Vec<f32> = (0..size).map(|i| (i % 17) as f32 * 0.25 - 2.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| softmax(black_box(&logits)).unwrap());
        });
    }

    group.finish();
}

fn bench_argmax(c: &mut Criterion) {
    let logits: Vec<f32> = (0..32000).map(|i| ((i * 31) % 101) as f32).collect();

    c.bench_function("argmax_32000", |bencher| {
        bencher.iter(|| argmax(black_box(&logits)).unwrap());
    });
}

criterion_group!(benches, bench_softmax, bench_argmax);
criterion_main!(benches);

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
};
use peekbuf::{
    buffered,
    PeekableProducer,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

fn test_data(size: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(0..1000)).collect()
}

// Plain draining, the overhead a buffer adds over the bare iterator
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek_buffer_drain");

    for size in [10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || test_data(size),
                |data| {
                    for item in buffered(data) {
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// Tokenizer-style access: look a few items ahead, then consume one
fn bench_lift_then_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek_buffer_lift_then_next");

    for depth in [1usize, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::new("depth", depth), depth, |b, &depth| {
            b.iter_batched(
                || test_data(100_000),
                |data| {
                    let mut buf = buffered(data);
                    while buf.has_next() {
                        black_box(buf.lift(depth));
                        black_box(buf.next());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// Run-length style scanning with the derived views
fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek_buffer_runs");

    group.bench_function("take_while_ref", |b| {
        b.iter_batched(
            || test_data(100_000).into_iter().map(|x| x / 100).collect::<Vec<_>>(),
            |data| {
                let mut buf = buffered(data);
                while let Some(&first) = buf.head_option() {
                    black_box(buf.take_while_ref(|&x| x == first).count());
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("peek_while_then_drop_while", |b| {
        b.iter_batched(
            || test_data(100_000).into_iter().map(|x| x / 100).collect::<Vec<_>>(),
            |data| {
                let mut buf = buffered(data);
                while let Some(&first) = buf.head_option() {
                    black_box(buf.peek_while(|&x| x == first).count());
                    buf.drop_while(|&x| x == first);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(30)
        .measurement_time(std::time::Duration::from_secs(5));
    targets = bench_drain, bench_lift_then_next, bench_runs
);
criterion_main!(benches);

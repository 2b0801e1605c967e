use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use int_array::DynamicIntArray;
use rand::{thread_rng, Rng};

const AR_ELEMS: usize = 1 << 20;

fn setup_ar(n: usize) -> DynamicIntArray {
    let mut ar = DynamicIntArray::with_capacity(n);
    let mut rng = rand::thread_rng();
    for _ in 0..n {
        ar.add(rng.gen());
    }

    ar
}

fn bench_ar_ops(c: &mut Criterion) {
    let mut ar = setup_ar(AR_ELEMS);
    let mut rng = thread_rng();
    let n = ar.size();

    let mut group = c.benchmark_group("ar_ops");
    group.sample_size(250);

    group.bench_function("get", |b| {
        b.iter_batched(
            || rng.gen_range(0..n),
            |i| {
                let _ = ar.get(black_box(i));
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("set", |b| {
        b.iter_batched(
            || (rng.gen_range(0..n), rng.gen()),
            |(i, v)| {
                let _ = ar.set(black_box(i), v);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let mut pushed = DynamicIntArray::new();
    group.bench_function(BenchmarkId::new("add", "no_reserve"), |b| {
        b.iter(|| {
            pushed.add(black_box(0));
        })
    });
    let mut pushed = DynamicIntArray::with_capacity(100_000_000);
    group.bench_function(BenchmarkId::new("add", "with_reserve"), |b| {
        b.iter(|| {
            pushed.add(black_box(0));
        })
    });

    ar.sort();
    group.bench_function("binary_search", |b| {
        b.iter_batched(
            || rng.gen(),
            |key| ar.binary_search(black_box(key)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_ar_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("ar_reorder");

    for n in [1 << 10, 1 << 14, 1 << 18] {
        let ar = setup_ar(n);
        group.bench_with_input(BenchmarkId::new("sort", n), &ar, |b, ar| {
            b.iter_batched_ref(|| ar.clone(), |ar| ar.sort(), criterion::BatchSize::LargeInput)
        });
        group.bench_with_input(BenchmarkId::new("reverse", n), &ar, |b, ar| {
            b.iter_batched_ref(|| ar.clone(), |ar| ar.reverse(), criterion::BatchSize::LargeInput)
        });
        group.bench_with_input(BenchmarkId::new("remove_at_front", n), &ar, |b, ar| {
            b.iter_batched_ref(
                || ar.clone(),
                |ar| ar.remove_at(black_box(0)),
                criterion::BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(ar_benches, bench_ar_ops, bench_ar_reorder);
criterion_main!(ar_benches);

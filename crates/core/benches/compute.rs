use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feewise::calc::{compute, FeeInputs};

fn bench_compute(c: &mut Criterion) {
    let inputs = FeeInputs::default();

    c.bench_function("compute_breakdown", |b| {
        b.iter(|| compute(black_box(&inputs)))
    });

    c.bench_function("compute_and_round", |b| {
        b.iter(|| compute(black_box(&inputs)).rounded())
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);

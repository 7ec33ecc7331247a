use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fixpoint::Q24;

fn bench_q24_mul(c: &mut Criterion) {
    let a = Q24::from_f32(0.8320503);
    let b = Q24::from_f32(0.5547002);
    c.bench_function("q24_mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
}

fn bench_q24_div(c: &mut Criterion) {
    let a = Q24::from_f32(0.8320503);
    let b = Q24::from_f32(0.5547002);
    c.bench_function("q24_div", |bench| bench.iter(|| black_box(a) / black_box(b)));
}

fn bench_q24_mul_chain(c: &mut Criterion) {
    let values: Vec<Q24> = (1..=64).map(|i| Q24::from_f32(1.0 + i as f32 / 1024.0)).collect();
    c.bench_function("q24_mul_chain_64", |bench| {
        bench.iter(|| {
            black_box(&values)
                .iter()
                .fold(Q24::ONE, |acc, &v| acc * v)
        })
    });
}

fn bench_q24_from_f32(c: &mut Criterion) {
    c.bench_function("q24_from_f32", |bench| {
        bench.iter(|| Q24::from_f32(black_box(0.8320503)))
    });
}

criterion_group!(
    benches,
    bench_q24_mul,
    bench_q24_div,
    bench_q24_mul_chain,
    bench_q24_from_f32
);
criterion_main!(benches);

use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use gausbin::prelude::*;

fn bench_binomial_pmf(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_pmf");
    for n in [10_u64, 1_000, 100_000] {
        group.bench_function(format!("pmf_n{}", n), |b| {
            let binom = Binomial::new(n, 0.37).unwrap();
            let k = n / 3;
            b.iter(|| binom.pmf(&k))
        });
    }
    group.bench_function("cdf_n1000", |b| {
        let binom = Binomial::new(1_000, 0.37).unwrap();
        b.iter(|| binom.cdf(&400_u64))
    });
}

fn bench_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_from_sample");
    let flips: Vec<f64> = (0..10_000).map(|i| f64::from(i % 3 == 0)).collect();
    let sample = Sample::new(flips).unwrap();

    group.bench_function("binomial", |b| {
        let mut binom = Binomial::default();
        binom.set_observations(sample.clone());
        b.iter(|| binom.estimate_from_sample())
    });
    group.bench_function("gaussian", |b| {
        let mut gauss = Gaussian::standard();
        gauss.set_observations(sample.clone());
        b.iter(|| gauss.refresh_from_sample())
    });
}

criterion_group!(binomial_benches, bench_binomial_pmf, bench_estimation);
criterion_main!(binomial_benches);

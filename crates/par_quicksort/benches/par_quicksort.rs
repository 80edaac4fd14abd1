use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{DISTRIBUTIONS, Distribution, apply_runtime_for_size, generate_dataset, seed_for};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use par_quicksort::{ALL_SERIAL_SORTS, SortConfig, Sorter, TUNED_PARAMS};
use rayon::slice::ParallelSliceMut;

const BENCH_SIZES: [usize; 3] = [65_536, 1 << 20, 1 << 22];
const CUTOFF_SWEEP_SIZE: usize = 1 << 20;
const CUTOFFS: [usize; 5] = [32, 128, TUNED_PARAMS.parallel_cutoff, 4096, 32_768];

fn time_sort(base: &[u64], iters: u64, mut sort: impl FnMut(&mut [u64])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        sort(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_dataset(dist, size, seed_for(dist, size, 0xBA5E_0001));

            for &serial in &ALL_SERIAL_SORTS {
                let sorter = Sorter::new(SortConfig::default().with_serial(serial))
                    .expect("default config is valid");
                let name = format!("fork_join_{}", serial.name());
                group.bench_function(BenchmarkId::new(name, size), |bencher| {
                    bencher.iter_custom(|iters| time_sort(&base, iters, |v| sorter.sort(v)));
                });
            }

            group.bench_function(BenchmarkId::new("rayon_par_sort_unstable", size), |bencher| {
                bencher.iter_custom(|iters| time_sort(&base, iters, |v| v.par_sort_unstable()));
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| time_sort(&base, iters, |v| v.sort_unstable()));
            });
        }

        group.finish();
    }
}

fn bench_cutoff(c: &mut Criterion) {
    let dist = Distribution::RandomUniform;
    let base = generate_dataset(dist, CUTOFF_SWEEP_SIZE, seed_for(dist, CUTOFF_SWEEP_SIZE, 0xC07F));

    let mut group = c.benchmark_group("cutoff");
    apply_runtime_for_size(&mut group, CUTOFF_SWEEP_SIZE);
    for &cutoff in &CUTOFFS {
        let sorter = Sorter::new(SortConfig::default().with_cutoff(cutoff))
            .expect("default config is valid");
        group.bench_function(BenchmarkId::new("fork_join", cutoff), |bencher| {
            bencher.iter_custom(|iters| time_sort(&base, iters, |v| sorter.sort(v)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_cutoff);
criterion_main!(benches);

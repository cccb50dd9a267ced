#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use pwl_interp::{pwl_basis_1d, pwl_value_1d, Interp1D, PiecewiseLinear1D};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

enum Kind {
    Interp,
    Extrap,
}

/// Noisy, increasing grid on [0, 1) with random values
fn gen_grid(rng: &mut StdRng, gridsize: usize) -> (Vec<f64>, Vec<f64>) {
    let dx = 1.0 / gridsize as f64;
    let xd: Vec<f64> = (0..gridsize)
        .map(|i| (i as f64 + 0.5 * rng.random::<f64>()) * dx)
        .collect();
    let yd: Vec<f64> = (0..gridsize).map(|_| rng.random::<f64>()).collect();
    (xd, yd)
}

/// Shuffled observation points, either inside the grid or spread well past both ends
fn gen_obs(rng: &mut StdRng, xd: &[f64], size: usize, kind: &Kind) -> Vec<f64> {
    let (lo, hi) = (xd[0], xd[xd.len() - 1]);
    let (lo, hi) = match kind {
        Kind::Interp => (lo, hi),
        Kind::Extrap => (lo - (hi - lo), hi + (hi - lo)),
    };
    let mut obs: Vec<f64> = (0..size)
        .map(|i| lo + (hi - lo) * (i as f64) / (size.max(2) - 1) as f64)
        .collect();
    obs.shuffle(rng);
    obs
}

fn bench_value(c: &mut Criterion, kind: Kind, name: &str) {
    let rng = &mut StdRng::seed_from_u64(0);

    for gridsize in [10, 100, 1000] {
        let mut group = c.benchmark_group(format!("{name}_1D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            group.throughput(Throughput::Elements(*size as u64));

            let (xd, yd) = gen_grid(rng, gridsize);
            let obs = gen_obs(rng, &xd, *size, &kind);

            group.bench_with_input(BenchmarkId::new("pwl_value_1d (scan)", size), size, |b, &size| {
                let mut out = vec![0.0; size];
                b.iter(|| black_box(pwl_value_1d(&xd, &yd, &obs, &mut out).unwrap()));
            });

            group.bench_with_input(
                BenchmarkId::new("PiecewiseLinear1D (bisection)", size),
                size,
                |b, &size| {
                    let mut out = vec![0.0; size];
                    b.iter(|| {
                        black_box({
                            let interp = PiecewiseLinear1D::new(&xd, &yd).unwrap();
                            interp.eval(&obs, &mut out).unwrap()
                        })
                    });
                },
            );
        }
        group.finish();
    }
}

fn bench_interp(c: &mut Criterion) {
    bench_value(c, Kind::Interp, "Interp");
}

fn bench_extrap(c: &mut Criterion) {
    bench_value(c, Kind::Extrap, "Extrap");
}

fn bench_basis(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);

    for gridsize in [10, 100] {
        let mut group = c.benchmark_group(format!("Basis_1D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 1_000].iter() {
            group.throughput(Throughput::Elements(*size as u64));

            let (xd, _) = gen_grid(rng, gridsize);
            let obs = gen_obs(rng, &xd, *size, &Kind::Interp);

            group.bench_with_input(BenchmarkId::new("pwl_basis_1d", size), size, |b, &size| {
                let mut out = vec![0.0; size * gridsize];
                b.iter(|| black_box(pwl_basis_1d(&xd, &obs, &mut out).unwrap()));
            });
        }
        group.finish();
    }
}

criterion_group!(benches_interp, bench_interp);
criterion_group!(benches_extrap, bench_extrap);
criterion_group!(benches_basis, bench_basis);
criterion_main!(benches_interp, benches_extrap, benches_basis);

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nbody_sim::{OrbitalSystemCreator, Simulation, SimulationParams};
use rand::{rngs::StdRng, SeedableRng};

const WIDTH: f64 = 1920.;
const HEIGHT: f64 = 1080.;

fn orbital_system(n_par: u32) -> Simulation {
    let mut creator = OrbitalSystemCreator::with_rng(
        1.,
        WIDTH,
        HEIGHT,
        100.,
        8000.,
        StdRng::seed_from_u64(0),
    );
    let particles = creator.create_particles(n_par);

    Simulation::new(particles, SimulationParams::new(1., 2., 1e-3, WIDTH, HEIGHT))
}

fn force_summation(c: &mut Criterion) {
    let mut group = c.benchmark_group("force summation");
    for n_par in [100, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("serial", n_par), &n_par, |b, &n_par| {
            b.iter_batched_ref(
                || orbital_system(n_par),
                |sim| {
                    for _ in 0..10 {
                        sim.step();
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("multithreaded", n_par),
            &n_par,
            |b, &n_par| {
                b.iter_batched_ref(
                    || orbital_system(n_par).multithreaded(4),
                    |sim| {
                        for _ in 0..10 {
                            sim.step();
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("rayon", n_par), &n_par, |b, &n_par| {
            b.iter_batched_ref(
                || orbital_system(n_par).rayon_iter(),
                |sim| {
                    for _ in 0..10 {
                        sim.step();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, force_summation);
criterion_main!(benches);

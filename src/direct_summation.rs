use std::{sync::mpsc, thread};

use nalgebra::Vector2;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{gravity, particle::Particle};

/// How the pairwise force summation is executed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    SingleThreaded,
    Multithreaded {
        num_threads: usize,
    },
    #[cfg(feature = "rayon")]
    RayonIter,
}

impl Execution {
    /// Short name used for benchmark records.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Execution::SingleThreaded => "Serial",
            Execution::Multithreaded { .. } => "Multithreaded",
            #[cfg(feature = "rayon")]
            Execution::RayonIter => "Rayon",
        }
    }
}

/// The exact O(n²) all-pairs force solver.
///
/// The single-threaded strategy is the reference: it walks every unordered
/// pair once and applies the force with opposite signs to both particles.
/// The parallel strategies avoid the resulting write sharing by either
/// merging per-thread partial accumulators or by partitioning the work per
/// output particle; they trade the pair shortcut for race-free writes and
/// agree with the reference only up to floating-point summation order.
#[derive(Copy, Clone, Debug, Default)]
pub struct DirectSummation {
    execution: Execution,
}

impl DirectSummation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            execution: Execution::SingleThreaded,
        }
    }

    /// Calculate the forces with multiple threads.
    ///
    /// Every thread gets a chunk of the particles as force sources and
    /// accumulates their contribution to all particles into a private
    /// buffer; the buffers are summed after all threads are done.
    #[must_use]
    pub fn multithreaded(mut self, num_threads: usize) -> Self {
        assert!(num_threads > 0, "need at least one thread");
        self.execution = Execution::Multithreaded { num_threads };
        self
    }

    /// Use Rayon to calculate the forces with multiple threads.
    ///
    /// The work is split per output accumulator, so every worker reads all
    /// positions but owns the accelerations it writes.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn rayon_iter(mut self) -> Self {
        self.execution = Execution::RayonIter;
        self
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Accumulate the gravitational acceleration from all other particles
    /// onto every particle's `acceleration` field.
    ///
    /// Positions and velocities are left untouched. Callers reset the
    /// accumulators beforehand; a particle never attracts itself.
    pub fn calculate_accelerations(&self, particles: &mut [Particle], g: f64, epsilon: f64) {
        match self.execution {
            Execution::SingleThreaded => {
                for i in 0..particles.len() {
                    let (head, tail) = particles.split_at_mut(i + 1);
                    let p1 = &mut head[i];
                    for p2 in tail {
                        let force =
                            gravity::force(p1.position, p1.mass, p2.position, p2.mass, g, epsilon);
                        p1.acceleration += force / p1.mass;
                        p2.acceleration -= force / p2.mass;
                    }
                }
            }
            Execution::Multithreaded { num_threads } => {
                let (tx, rx) = mpsc::channel();

                let mut chunks: Vec<_> = (0..=num_threads)
                    .map(|i| i * (particles.len() / num_threads))
                    .collect();
                chunks[num_threads] = particles.len();

                let shared: &[Particle] = particles;
                thread::scope(|s| {
                    for i in 0..num_threads {
                        let tx = &tx;
                        let offset = chunks[i];
                        let local_particles = &shared[chunks[i]..chunks[i + 1]];

                        s.spawn(move || {
                            let acc: Vec<_> = shared
                                .iter()
                                .enumerate()
                                .map(|(j, p1)| {
                                    let mut acc = Vector2::zeros();
                                    for (k, p2) in local_particles.iter().enumerate() {
                                        if offset + k == j {
                                            continue;
                                        }
                                        acc += gravity::acceleration(
                                            p1.position,
                                            p2.position,
                                            p2.mass,
                                            g,
                                            epsilon,
                                        );
                                    }
                                    acc
                                })
                                .collect();
                            tx.send(acc).unwrap();
                        });
                    }
                });

                for acc in rx.iter().take(num_threads) {
                    for (p, a) in particles.iter_mut().zip(acc) {
                        p.acceleration += a;
                    }
                }
            }
            #[cfg(feature = "rayon")]
            Execution::RayonIter => {
                let mut accelerations = vec![Vector2::zeros(); particles.len()];

                let shared: &[Particle] = particles;
                accelerations
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(i, acc)| {
                        let p1 = &shared[i];
                        for (j, p2) in shared.iter().enumerate() {
                            if i == j {
                                continue;
                            }
                            *acc += gravity::acceleration(
                                p1.position,
                                p2.position,
                                p2.mass,
                                g,
                                epsilon,
                            );
                        }
                    });

                for (p, acc) in particles.iter_mut().zip(accelerations) {
                    p.acceleration += acc;
                }
            }
        }
    }
}

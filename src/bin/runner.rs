use std::{env, error::Error, thread, time::Instant};

use log::{info, warn};
use nbody_sim::{Benchmark, OrbitalSystemCreator, Simulation, SimulationParams};

const WIDTH: f64 = 1920.;
const HEIGHT: f64 = 1080.;
const G: f64 = 1.;
const SOFTENING: f64 = 2.;
const DT: f64 = 1e-3;
const MAX_MASS_SMALL: f64 = 100.;
const MAX_MASS_BIG: f64 = 8000.;

const DEFAULT_NUM_BODIES: u32 = 250;
const DEFAULT_NUM_STEPS: usize = 1_000;

const RESULTS_FILE: &str = "benchmark_results.csv";

/// Headless driver: `runner [num_bodies] [num_steps] [serial|threads|rayon]`.
///
/// Steps a randomly initialized orbital system, feeds the measured step
/// rate into a [`Benchmark`], and appends the summary to the results file
/// once all steps are done.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);

    let num_bodies = match args.next().map(|arg| arg.parse::<u32>()) {
        None => DEFAULT_NUM_BODIES,
        Some(Ok(n)) if n >= 2 => n,
        Some(_) => {
            warn!("number of bodies must be an integer of at least 2, using {DEFAULT_NUM_BODIES}");
            DEFAULT_NUM_BODIES
        }
    };

    let num_steps = match args.next().map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_NUM_STEPS,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            warn!("invalid number of steps, using {DEFAULT_NUM_STEPS}");
            DEFAULT_NUM_STEPS
        }
    };

    let params = SimulationParams::new(G, SOFTENING, DT, WIDTH, HEIGHT);
    let mut creator = OrbitalSystemCreator::new(G, WIDTH, HEIGHT, MAX_MASS_SMALL, MAX_MASS_BIG);
    let particles = creator.create_particles(num_bodies);
    let total_bodies = particles.len();

    let mut sim = Simulation::new(particles, params);
    sim = match args.next().as_deref() {
        None | Some("serial") => sim,
        Some("threads") => {
            let num_threads = thread::available_parallelism().map(|n| n.get()).unwrap_or(4);
            sim.multithreaded(num_threads)
        }
        #[cfg(feature = "rayon")]
        Some("rayon") => sim.rayon_iter(),
        Some(mode) => return Err(format!("unknown execution mode: {mode}").into()),
    };

    let mut benchmark = Benchmark::new(sim.execution().label(), total_bodies);

    info!(
        "running {num_steps} steps with {total_bodies} bodies ({})",
        sim.execution().label()
    );

    for _ in 0..num_steps {
        let frame_start = Instant::now();
        sim.step();
        benchmark.add_frame(1. / frame_start.elapsed().as_secs_f64());
    }

    benchmark.save(RESULTS_FILE)?;
    println!(
        "{} with {} bodies: {:.2} steps/s average (saved to {RESULTS_FILE})",
        sim.execution().label(),
        total_bodies,
        benchmark.average_fps()
    );

    Ok(())
}

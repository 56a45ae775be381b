use crate::{
    direct_summation::{DirectSummation, Execution},
    integrator,
    particle::Particle,
};

/// Parameters fixed for the duration of a run.
///
/// `width` and `height` only matter for initialization placement; the
/// simulated region is unbounded and particles may leave it freely.
#[derive(Copy, Clone, Debug)]
pub struct SimulationParams {
    pub g: f64,
    pub epsilon: f64,
    pub dt: f64,
    pub width: f64,
    pub height: f64,
}

impl SimulationParams {
    /// # Panics
    ///
    /// Panics if `dt` is not positive or `epsilon` is negative.
    #[must_use]
    pub fn new(g: f64, epsilon: f64, dt: f64, width: f64, height: f64) -> Self {
        assert!(dt > 0., "time step must be positive, got {dt}");
        assert!(epsilon >= 0., "softening length must be non-negative, got {epsilon}");

        Self {
            g,
            epsilon,
            dt,
            width,
            height,
        }
    }
}

/// Owns the particle collection and drives it through discrete time steps.
///
/// A step is not interruptible: force summation and integration run to
/// completion before `step` returns, so readers always observe a fully
/// stepped collection. The collection is replaced wholesale on
/// reinitialization and never resized mid-step.
pub struct Simulation {
    params: SimulationParams,
    particles: Vec<Particle>,
    summation: DirectSummation,
}

impl Simulation {
    #[must_use]
    pub fn new(particles: Vec<Particle>, params: SimulationParams) -> Self {
        Self {
            params,
            particles,
            summation: DirectSummation::new(),
        }
    }

    /// Calculate the forces with multiple threads.
    #[must_use]
    pub fn multithreaded(mut self, num_threads: usize) -> Self {
        self.summation = self.summation.multithreaded(num_threads);
        self
    }

    /// Use Rayon to calculate the forces with multiple threads.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn rayon_iter(mut self) -> Self {
        self.summation = self.summation.rayon_iter();
        self
    }

    /// Advance the system by one time step:
    /// reset accumulators, sum forces over all pairs, integrate.
    pub fn step(&mut self) {
        for par in &mut self.particles {
            par.reset_acceleration();
        }

        self.summation
            .calculate_accelerations(&mut self.particles, self.params.g, self.params.epsilon);

        integrator::advance(&mut self.particles, self.params.dt);
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the whole particle collection, e.g. on a reset with a new
    /// body count.
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    #[must_use]
    pub fn params(&self) -> SimulationParams {
        self.params
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        self.summation.execution()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    use crate::particle::Color;

    use super::*;

    fn params() -> SimulationParams {
        SimulationParams::new(1., 0., 1e-3, 1920., 1080.)
    }

    /// Central body and one light body on an ideal circular orbit.
    fn circular_orbit(distance: f64) -> Vec<Particle> {
        let central_mass = 5e4;
        let speed = (central_mass / distance).sqrt();

        vec![
            Particle::new(Vector2::zeros(), Vector2::zeros(), central_mass, 10., Color::WHITE),
            Particle::new(
                Vector2::new(distance, 0.),
                Vector2::new(0., speed),
                20.,
                1.,
                Color::WHITE,
            ),
        ]
    }

    #[test]
    fn circular_orbit_keeps_its_radius() {
        let distance = 200.;
        let mut sim = Simulation::new(circular_orbit(distance), params());

        // ~8 time units; the orbital period is 2 pi r / v ~ 79.
        for _ in 0..8_000 {
            sim.step();
        }

        let center = sim.particles()[0].position;
        let r = (sim.particles()[1].position - center).norm();
        assert!(
            (r - distance).abs() < 0.02 * distance,
            "orbit drifted from {distance} to {r}"
        );
    }

    #[test]
    fn step_accelerates_both_bodies_towards_each_other() {
        let mut sim = Simulation::new(circular_orbit(100.), params());
        sim.step();

        let pars = sim.particles();
        // the light body is pulled inward, the heavy one barely moves
        assert!(pars[1].acceleration.x < 0.);
        assert!(pars[0].acceleration.x > 0.);
        assert!(pars[0].acceleration.norm() < pars[1].acceleration.norm());
    }

    #[test]
    fn replace_particles_swaps_the_population() {
        let mut sim = Simulation::new(circular_orbit(100.), params());
        sim.step();

        sim.replace_particles(vec![Particle::new(
            Vector2::zeros(),
            Vector2::zeros(),
            1.,
            1.,
            Color::WHITE,
        )]);

        assert_eq!(sim.particles().len(), 1);
        assert_abs_diff_eq!(sim.particles()[0].acceleration, Vector2::zeros());
    }

    #[test]
    #[should_panic(expected = "time step must be positive")]
    fn zero_time_step_is_rejected() {
        SimulationParams::new(1., 0., 0., 100., 100.);
    }
}

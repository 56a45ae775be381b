use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::{rngs::ThreadRng, Rng};
use rand_distr::{Distribution, Uniform};

use crate::particle::{Color, Particle};

/// Mass of the central body, independent of the requested population size.
pub const CENTRAL_MASS: f64 = 5e4;

const CENTRAL_RADIUS: f64 = 10.;

/// Creates a population of particles orbiting one massive central body.
///
/// The central body sits at the center of the configured bounds at rest.
/// It is surrounded by `n / 50` heavy and `n - 1` light particles, each
/// placed at a uniformly random angle and orbital distance with a velocity
/// perpendicular to its radius vector. The speed is the ideal circular-orbit
/// speed scaled by a random factor in [0.7, 1), so all orbits are mildly
/// sub-circular and counter-clockwise.
///
/// Callers are expected to request at least two bodies; the creator itself
/// does not validate `n`.
pub struct OrbitalSystemCreator<R: Rng> {
    rng: R,
    g: f64,
    width: f64,
    height: f64,
    max_mass_small: f64,
    max_mass_big: f64,
}

impl OrbitalSystemCreator<ThreadRng> {
    #[must_use]
    pub fn new(g: f64, width: f64, height: f64, max_mass_small: f64, max_mass_big: f64) -> Self {
        Self::with_rng(g, width, height, max_mass_small, max_mass_big, rand::thread_rng())
    }
}

impl<R: Rng> OrbitalSystemCreator<R> {
    /// Like [`OrbitalSystemCreator::new`], but with a caller-supplied
    /// random source, e.g. a seeded [`StdRng`](rand::rngs::StdRng).
    #[must_use]
    pub fn with_rng(
        g: f64,
        width: f64,
        height: f64,
        max_mass_small: f64,
        max_mass_big: f64,
        rng: R,
    ) -> Self {
        Self {
            rng,
            g,
            width,
            height,
            max_mass_small,
            max_mass_big,
        }
    }

    pub fn create_particles(&mut self, n: u32) -> Vec<Particle> {
        let center = Vector2::new(self.width / 2., self.height / 2.);
        let max_distance = self.width.min(self.height) / 2. - 50.;

        let mut particles = Vec::with_capacity(1 + (n / 50 + n.saturating_sub(1)) as usize);
        particles.push(Particle::new(
            center,
            Vector2::zeros(),
            CENTRAL_MASS,
            CENTRAL_RADIUS,
            Color::WHITE,
        ));

        let big_distance = Uniform::new(250., max_distance);
        let big_mass = Uniform::new(1000., self.max_mass_big);
        let big_radius = Uniform::new(4., 9.);
        for _ in 0..n / 50 {
            let mass = big_mass.sample(&mut self.rng);
            let radius = big_radius.sample(&mut self.rng);
            particles.push(self.orbiting_particle(
                center,
                big_distance,
                mass,
                radius,
                Color::WHITE,
            ));
        }

        let small_distance = Uniform::new(50., max_distance);
        let small_mass = Uniform::new(20., self.max_mass_small);
        let small_radius = Uniform::new(0.5, 1.5);
        for _ in 0..n.saturating_sub(1) {
            let mass = small_mass.sample(&mut self.rng);
            let radius = small_radius.sample(&mut self.rng);
            let color = Color::new(
                self.rng.gen_range(50..=255),
                self.rng.gen_range(50..=255),
                self.rng.gen_range(50..=255),
            );
            particles.push(self.orbiting_particle(center, small_distance, mass, radius, color));
        }

        particles
    }

    fn orbiting_particle(
        &mut self,
        center: Vector2<f64>,
        distance_distr: Uniform<f64>,
        mass: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        let angle = self.rng.gen_range(0.0..TAU);
        let distance = distance_distr.sample(&mut self.rng);
        let orbit_factor = self.rng.gen_range(0.7..1.0);

        let position = center + Vector2::new(angle.cos(), angle.sin()) * distance;

        // v = sqrt(G M / r) for a circular orbit, scaled down by the orbit
        // factor and rotated a quarter turn from the radius vector.
        let speed = orbit_factor * (self.g * CENTRAL_MASS / distance).sqrt();
        let velocity = Vector2::new(-angle.sin(), angle.cos()) * speed;

        Particle::new(position, velocity, mass, radius, color)
    }
}

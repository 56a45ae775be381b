use nalgebra::Vector2;

/// An RGB display color.
///
/// The simulation core never interprets this; it is carried through for
/// whatever draws the particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single point mass.
///
/// `acceleration` is transient per-step state: it is zeroed at the start of
/// every step and only written by the force summation during that step.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub acceleration: Vector2<f64>,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    /// Create a particle with zeroed acceleration.
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not strictly positive, since the force-to-
    /// acceleration conversion divides by it.
    #[must_use]
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        radius: f64,
        color: Color,
    ) -> Self {
        assert!(mass > 0., "particle mass must be positive, got {mass}");

        Self {
            position,
            velocity,
            acceleration: Vector2::zeros(),
            mass,
            radius,
            color,
        }
    }

    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vector2::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_starts_unaccelerated() {
        let par = Particle::new(
            Vector2::new(1., 2.),
            Vector2::new(-0.5, 0.),
            10.,
            1.,
            Color::WHITE,
        );
        assert_eq!(par.acceleration, Vector2::zeros());
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_is_rejected() {
        Particle::new(Vector2::zeros(), Vector2::zeros(), 0., 1., Color::WHITE);
    }
}

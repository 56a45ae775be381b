use crate::particle::Particle;

/*
 * Semi-implicit Euler:
 * v_(i + 1) = v_i + a_i dt
 * x_(i + 1) = x_i + v_(i + 1) dt
 *
 * Updating the velocity first keeps orbits bounded far better than the
 * explicit variant at the same cost.
 */
pub fn advance(particles: &mut [Particle], dt: f64) {
    for par in particles {
        par.velocity += par.acceleration * dt;

        let v = par.velocity;
        par.position += v * dt;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    use crate::particle::Color;

    use super::*;

    #[test]
    fn position_uses_updated_velocity() {
        let mut particles = vec![Particle::new(
            Vector2::zeros(),
            Vector2::new(1., 0.),
            1.,
            1.,
            Color::WHITE,
        )];
        particles[0].acceleration = Vector2::new(0., 2.);

        advance(&mut particles, 0.5);

        // v = (1, 0) + (0, 2) * 0.5 = (1, 1), x = (1, 1) * 0.5
        assert_abs_diff_eq!(particles[0].velocity, Vector2::new(1., 1.));
        assert_abs_diff_eq!(particles[0].position, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn unaccelerated_particle_moves_uniformly() {
        let mut particles = vec![Particle::new(
            Vector2::new(3., -2.),
            Vector2::new(-1., 4.),
            10.,
            1.,
            Color::WHITE,
        )];

        for _ in 0..10 {
            advance(&mut particles, 0.1);
        }

        assert_abs_diff_eq!(particles[0].position, Vector2::new(2., 2.), epsilon = 1e-12);
        assert_abs_diff_eq!(particles[0].velocity, Vector2::new(-1., 4.));
    }
}

use nalgebra::Vector2;

/// The gravitational force on body 1 exerted by body 2.
///
/// The softening length `epsilon` is added to the squared distance before
/// the square root, so the result is finite for any pair of positions.
/// For coincident positions the force degenerates to the zero vector.
pub fn force(
    position1: Vector2<f64>,
    mass1: f64,
    position2: Vector2<f64>,
    mass2: f64,
    g: f64,
    epsilon: f64,
) -> Vector2<f64> {
    let r = position2 - position1;
    let dist_sq = r.norm_squared() + epsilon * epsilon;
    r * g * mass1 * mass2 / (dist_sq * dist_sq.sqrt())
}

/// The gravitational acceleration of body 1 towards body 2.
///
/// Saves one division by `mass1` compared to [`force`]; used by the
/// execution strategies that accumulate per output particle.
pub fn acceleration(
    position1: Vector2<f64>,
    position2: Vector2<f64>,
    mass2: f64,
    g: f64,
    epsilon: f64,
) -> Vector2<f64> {
    let r = position2 - position1;
    let dist_sq = r.norm_squared() + epsilon * epsilon;
    r * g * mass2 / (dist_sq * dist_sq.sqrt())
}

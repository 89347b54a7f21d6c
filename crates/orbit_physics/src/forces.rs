use orbit_core::Vector2;

use crate::mass::Mass;

/// Gravitational acceleration exerted on a body at `target` by `source_mass` at `source`.
/// Distance is floored at `min_distance`; coincident points give zero.
pub fn gravity_acceleration(
    target: Vector2,
    source: Vector2,
    source_mass: f64,
    g: f64,
    min_distance: f64,
) -> Vector2 {
    let offset = source - target;
    let dist = offset.magnitude();
    if dist == 0.0 {
        return Vector2::ZERO;
    }
    let guarded = dist.max(min_distance);
    let magnitude = g * source_mass / (guarded * guarded);
    offset.scale(magnitude / dist)
}

/// Velocity changes for one unordered pair over `dt`: `(on_a, on_b)`.
/// A source without gravity contributes nothing.
pub fn pair_contributions(
    a: &Mass,
    b: &Mass,
    g: f64,
    min_distance: f64,
    dt: f64,
) -> (Vector2, Vector2) {
    let on_a = if b.has_gravity() {
        gravity_acceleration(a.position(), b.position(), b.mass_kg(), g, min_distance).scale(dt)
    } else {
        Vector2::ZERO
    };
    let on_b = if a.has_gravity() {
        gravity_acceleration(b.position(), a.position(), a.mass_kg(), g, min_distance).scale(dt)
    } else {
        Vector2::ZERO
    };
    (on_a, on_b)
}

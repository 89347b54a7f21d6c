use orbit_core::Vector2;

use crate::mass::Mass;

/// Total kinetic energy of the free masses
pub fn kinetic_energy(masses: &[Mass]) -> f64 {
    masses
        .iter()
        .filter(|m| !m.is_fixed())
        .map(|m| 0.5 * m.mass_kg() * m.velocity().magnitude_squared())
        .sum()
}

/// Pairwise potential energy with the same distance floor the force uses.
/// A pair where neither side has gravity contributes nothing.
pub fn potential_energy(masses: &[Mass], g: f64, min_distance: f64) -> f64 {
    let mut pe = 0.0;
    for (i, a) in masses.iter().enumerate() {
        for b in &masses[i + 1..] {
            if !a.has_gravity() && !b.has_gravity() {
                continue;
            }
            let dist = a.position().distance(b.position()).max(min_distance);
            if dist > 0.0 {
                pe -= g * a.mass_kg() * b.mass_kg() / dist;
            }
        }
    }
    pe
}

/// Mass-weighted mean position, `None` when there is no mass
pub fn center_of_mass(masses: &[Mass]) -> Option<Vector2> {
    let total: f64 = masses.iter().map(|m| m.mass_kg()).sum();
    if total <= 0.0 {
        return None;
    }
    let weighted = masses
        .iter()
        .fold(Vector2::ZERO, |acc, m| acc.scaled_add(m.position(), m.mass_kg()));
    Some(weighted.scale(1.0 / total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::{MassConfig, MassIdAllocator};

    fn pair() -> Vec<Mass> {
        let mut ids = MassIdAllocator::new();
        vec![
            Mass::new(MassConfig::anchor(3.0, Vector2::ZERO), 1.0, &mut ids),
            Mass::new(
                MassConfig::free(1.0, Vector2::new(4.0, 0.0), Vector2::new(0.0, 2.0)),
                1.0,
                &mut ids,
            ),
        ]
    }

    #[test]
    fn test_kinetic_energy_ignores_fixed() {
        assert!((kinetic_energy(&pair()) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_potential_energy_is_negative() {
        let pe = potential_energy(&pair(), 1.0, 0.0);
        assert!((pe + 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_center_of_mass() {
        let com = center_of_mass(&pair()).unwrap();
        assert!((com.x - 1.0).abs() < 1e-12);
        assert_eq!(center_of_mass(&[]), None);
    }
}

use orbit_core::{SimConfig, Vector2, Viewport};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;

use crate::mass::MassConfig;

/// Preset initial conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Fixed star with planets on circular orbits
    #[default]
    Orbit,
    /// Two equal stars around their barycenter plus a circumbinary planet
    Binary,
    /// Seeded random disk around a fixed core
    Cluster,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Orbit, Scenario::Binary, Scenario::Cluster];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Binary => "binary",
            Self::Cluster => "cluster",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Orbit => Self::Binary,
            Self::Binary => Self::Cluster,
            Self::Cluster => Self::Orbit,
        }
    }

    /// Mass configurations in canvas coordinates for `viewport`
    pub fn build(&self, config: &SimConfig, viewport: Viewport) -> Vec<MassConfig> {
        match self {
            Self::Orbit => orbit(config, viewport),
            Self::Binary => binary(config, viewport),
            Self::Cluster => {
                let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
                cluster(config, viewport, &mut rng)
            }
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scenario {s:?}"))
    }
}

/// Circular orbit speed at distance `r` around `central_mass`
pub fn circular_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}

/// Velocity for a counter-clockwise (on screen) orbit of `position` around `center`
fn tangential(center: Vector2, position: Vector2, speed: f64) -> Vector2 {
    let offset = position - center;
    let r = offset.magnitude();
    if r == 0.0 {
        return Vector2::ZERO;
    }
    // Canvas y points down: (dy, -dx) turns counter-clockwise on screen
    Vector2::new(offset.y, -offset.x).scale(speed / r)
}

fn orbit(config: &SimConfig, viewport: Viewport) -> Vec<MassConfig> {
    let center = viewport.center();
    let star_mass = 500.0 * config.base_mass;
    let g = config.gravity_constant;

    // (distance, angle in turns, mass in base units)
    let planets = [
        (80.0, 0.0, 0.5),
        (150.0, 0.25, 2.0),
        (230.0, 0.5, 8.0),
        (320.0, 0.75, 1.0),
    ];

    let mut masses = vec![MassConfig::anchor(star_mass, center)];
    for (r, turn, m) in planets {
        let angle = turn * std::f64::consts::TAU;
        let position = center + Vector2::new(angle.cos(), angle.sin()).scale(r);
        let velocity = tangential(center, position, circular_speed(g, star_mass, r));
        masses.push(MassConfig::free(m * config.base_mass, position, velocity));
    }
    masses
}

fn binary(config: &SimConfig, viewport: Viewport) -> Vec<MassConfig> {
    let center = viewport.center();
    let g = config.gravity_constant;
    let star_mass = 150.0 * config.base_mass;
    let separation = 160.0;
    let r = separation / 2.0;

    // Equal masses: v^2 = G m / (2 d)
    let star_speed = (g * star_mass / (2.0 * separation)).sqrt();

    let left = center + Vector2::new(-r, 0.0);
    let right = center + Vector2::new(r, 0.0);
    let planet = center + Vector2::new(300.0, 0.0);

    vec![
        MassConfig::free(star_mass, left, tangential(center, left, star_speed)),
        MassConfig::free(star_mass, right, tangential(center, right, star_speed)),
        MassConfig::free(
            config.base_mass,
            planet,
            tangential(center, planet, circular_speed(g, 2.0 * star_mass, 300.0)),
        ),
    ]
}

fn cluster(config: &SimConfig, viewport: Viewport, rng: &mut impl Rng) -> Vec<MassConfig> {
    let center = viewport.center();
    let g = config.gravity_constant;
    let core_mass = 400.0 * config.base_mass;
    let max_r = 0.45 * viewport.width.min(viewport.height);
    let min_r = 40.0f64.min(max_r * 0.5);

    let mut masses = Vec::with_capacity(config.body_count as usize + 2);
    masses.push(MassConfig::anchor(core_mass, center));

    // A collapsed viewport leaves no ring to scatter bodies into
    let body_count = if max_r > min_r { config.body_count } else { 0 };
    for _ in 0..body_count {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let r = rng.gen_range(min_r..max_r);
        let position = center + Vector2::new(angle.cos(), angle.sin()).scale(r);

        // Log-uniform between half and 16x the base mass
        let mass = config.base_mass * 2f64.powf(rng.gen_range(-1.0..4.0));
        let speed = circular_speed(g, core_mass, r) * rng.gen_range(0.85..1.15);
        masses.push(MassConfig::free(mass, position, tangential(center, position, speed)));
    }

    // One massless tracer on the outer edge
    let tracer = center + Vector2::new(0.0, -max_r);
    masses.push(MassConfig::tracer(
        config.base_mass,
        tracer,
        tangential(center, tracer, circular_speed(g, core_mass, max_r)),
    ));
    masses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    #[test]
    fn test_cluster_is_deterministic_per_seed() {
        let config = SimConfig::default();
        let a = Scenario::Cluster.build(&config, viewport());
        let b = Scenario::Cluster.build(&config, viewport());
        assert_eq!(a, b);
        assert_eq!(a.len(), config.body_count as usize + 2);

        let other = SimConfig {
            seed: config.seed + 1,
            ..config
        };
        assert_ne!(a, Scenario::Cluster.build(&other, viewport()));
    }

    #[test]
    fn test_cluster_stays_in_view() {
        let vp = viewport();
        for m in Scenario::Cluster.build(&SimConfig::default(), vp) {
            assert!(vp.contains(m.position));
            assert!(m.mass_kg > 0.0);
        }
    }

    #[test]
    fn test_cluster_on_collapsed_viewport_keeps_core_and_tracer() {
        let config = SimConfig::default();
        for vp in [Viewport::new(0.0, 0.0), Viewport::new(1280.0, 0.0)] {
            let masses = Scenario::Cluster.build(&config, vp);
            assert_eq!(masses.len(), 2);
            assert!(masses[0].fixed);
            assert!(!masses[1].has_gravity);
        }
    }

    #[test]
    fn test_orbit_velocities_are_tangential() {
        let vp = viewport();
        let masses = Scenario::Orbit.build(&SimConfig::default(), vp);
        assert!(masses[0].fixed);
        for m in &masses[1..] {
            let offset = m.position - vp.center();
            let dot = offset.x * m.velocity.x + offset.y * m.velocity.y;
            assert!(dot.abs() < 1e-6);
        }
    }

    #[test]
    fn test_binary_has_zero_net_momentum() {
        let masses = Scenario::Binary.build(&SimConfig::default(), viewport());
        let stars = &masses[..2];
        let px: f64 = stars.iter().map(|m| m.mass_kg * m.velocity.x).sum();
        let py: f64 = stars.iter().map(|m| m.mass_kg * m.velocity.y).sum();
        assert!(px.abs() < 1e-6 && py.abs() < 1e-6);
    }

    #[test]
    fn test_scenario_parse_and_cycle() {
        assert_eq!("Binary".parse::<Scenario>(), Ok(Scenario::Binary));
        assert!("galaxy".parse::<Scenario>().is_err());
        assert_eq!(Scenario::Cluster.next(), Scenario::Orbit);
    }
}

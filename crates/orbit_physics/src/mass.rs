use std::collections::VecDeque;

use orbit_core::{HistorySample, MassId, Vector2, Viewport};

/// Hands out mass ids in strictly increasing order
#[derive(Debug, Clone, Default)]
pub struct MassIdAllocator {
    next: u64,
}

impl MassIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> MassId {
        let id = MassId(self.next);
        self.next += 1;
        id
    }
}

/// Construction parameters for a mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassConfig {
    pub mass_kg: f64,
    pub position: Vector2,
    pub velocity: Vector2,
    pub fixed: bool,
    pub has_gravity: bool,
}

impl MassConfig {
    pub fn free(mass_kg: f64, position: Vector2, velocity: Vector2) -> Self {
        Self {
            mass_kg,
            position,
            velocity,
            fixed: false,
            has_gravity: true,
        }
    }

    pub fn anchor(mass_kg: f64, position: Vector2) -> Self {
        Self {
            mass_kg,
            position,
            velocity: Vector2::ZERO,
            fixed: true,
            has_gravity: true,
        }
    }

    /// Attracted by others but exerts nothing
    pub fn tracer(mass_kg: f64, position: Vector2, velocity: Vector2) -> Self {
        Self {
            has_gravity: false,
            ..Self::free(mass_kg, position, velocity)
        }
    }
}

/// Per-call inputs to [`Mass::integrate`]
#[derive(Debug, Clone, Copy)]
pub struct IntegrateParams {
    /// Step length the pending deltas were scaled by
    pub dt: f64,
    pub viewport: Viewport,
    pub history_window: f64,
    pub record_history: bool,
}

/// A point mass with its trail.
/// Radius is derived once at construction and never updated.
#[derive(Debug, Clone)]
pub struct Mass {
    id: MassId,
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    mass_kg: f64,
    radius: f64,
    fixed: bool,
    has_gravity: bool,
    accel_magnitude: f64,
    pending_velocity_delta: Vector2,
    pending_position_delta: Vector2,
    history: VecDeque<HistorySample>,
}

impl Mass {
    pub fn new(config: MassConfig, base_mass: f64, ids: &mut MassIdAllocator) -> Self {
        Self {
            id: ids.allocate(),
            position: config.position,
            velocity: config.velocity,
            acceleration: Vector2::ZERO,
            mass_kg: config.mass_kg,
            radius: render_radius(config.mass_kg, base_mass),
            fixed: config.fixed,
            has_gravity: config.has_gravity,
            accel_magnitude: 0.0,
            pending_velocity_delta: Vector2::ZERO,
            pending_position_delta: Vector2::ZERO,
            history: VecDeque::new(),
        }
    }

    /// Copy of `preset` with a fresh id and an empty trail
    pub fn from_preset(preset: &Mass, base_mass: f64, ids: &mut MassIdAllocator) -> Self {
        Self::new(preset.config(), base_mass, ids)
    }

    /// Public fields needed to recreate this mass
    pub fn config(&self) -> MassConfig {
        MassConfig {
            mass_kg: self.mass_kg,
            position: self.position,
            velocity: self.velocity,
            fixed: self.fixed,
            has_gravity: self.has_gravity,
        }
    }

    pub fn id(&self) -> MassId {
        self.id
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Acceleration applied in the last integrate call
    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn has_gravity(&self) -> bool {
        self.has_gravity
    }

    pub fn accel_magnitude(&self) -> f64 {
        self.accel_magnitude
    }

    pub fn pending_velocity_delta(&self) -> Vector2 {
        self.pending_velocity_delta
    }

    pub fn pending_position_delta(&self) -> Vector2 {
        self.pending_position_delta
    }

    pub fn history(&self) -> &VecDeque<HistorySample> {
        &self.history
    }

    /// Start of tick: drop last tick's accumulation
    pub fn reset_deltas(&mut self) {
        if self.fixed {
            return;
        }
        self.pending_velocity_delta = Vector2::ZERO;
        self.pending_position_delta = Vector2::ZERO;
        self.accel_magnitude = 0.0;
    }

    /// Add one source's velocity change for this tick.
    /// `accel_magnitude` sums contribution magnitudes, it is not the magnitude of the sum.
    pub fn accumulate(&mut self, contribution: Vector2) {
        if self.fixed {
            return;
        }
        self.pending_velocity_delta.add_by(contribution);
        self.accel_magnitude += contribution.magnitude();
    }

    /// Stage this tick's position change from the current velocity
    pub fn stage_drift(&mut self, dt: f64) {
        if self.fixed {
            return;
        }
        self.pending_position_delta = self.velocity.scale(dt);
    }

    /// Apply pending deltas and update the trail
    pub fn integrate(&mut self, elapsed: f64, params: &IntegrateParams) {
        if self.fixed {
            return;
        }
        self.position.add_by(self.pending_position_delta);
        self.velocity.add_by(self.pending_velocity_delta);
        if params.dt > 0.0 {
            self.acceleration = self.pending_velocity_delta.scale(1.0 / params.dt);
        }

        // At most one eviction per call
        let stale = self
            .history
            .front()
            .is_some_and(|first| elapsed - first.time > params.history_window);
        if self.history.len() > 1 && stale {
            self.history.pop_front();
        }

        if !params.viewport.contains(self.position) {
            return;
        }
        if !params.record_history {
            return;
        }
        self.history.push_back(HistorySample {
            time: elapsed,
            x: self.position.x,
            y: self.position.y,
        });
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// `log2(mass / (base / 2))`. Zero or negative for light bodies.
pub fn render_radius(mass_kg: f64, base_mass: f64) -> f64 {
    (mass_kg / (base_mass / 2.0)).log2()
}

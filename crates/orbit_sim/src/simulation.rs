use bevy::prelude::*;
use orbit_core::{AccelRange, ColorMode, DrawCommand, MassId, SimConfig, Viewport};
use orbit_physics::draw::emit_draw_commands;
use orbit_physics::forces::pair_contributions;
use orbit_physics::procgen::Scenario;
use orbit_physics::{IntegrateParams, Mass, MassConfig, MassIdAllocator};

use crate::state::RunState;

/// Per-tick inputs owned by the caller
#[derive(Debug, Clone, Copy)]
pub struct TickOptions {
    pub viewport: Viewport,
    pub color_mode: ColorMode,
    pub record_history: bool,
}

/// Draw commands for one mass
#[derive(Debug, Clone, PartialEq)]
pub struct MassDraw {
    pub id: MassId,
    pub commands: Vec<DrawCommand>,
}

/// Output of one tick, in collection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub elapsed: f64,
    pub accel_range: AccelRange,
    pub draws: Vec<MassDraw>,
}

impl Frame {
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.draws.iter().flat_map(|d| d.commands.iter())
    }
}

/// Owns every mass and advances them together
#[derive(Resource)]
pub struct Simulation {
    pub config: SimConfig,
    masses: Vec<Mass>,
    ids: MassIdAllocator,
    state: RunState,
    frame: Frame,
    /// Completed running ticks
    pub steps: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            masses: Vec::new(),
            ids: MassIdAllocator::new(),
            state: RunState::Running,
            frame: Frame::default(),
            steps: 0,
        }
    }

    /// Advance one step and return the frame to draw.
    /// While paused nothing moves and the frame is projected from current state.
    pub fn tick(&mut self, elapsed: f64, dt: f64, options: &TickOptions) -> &Frame {
        if self.state == RunState::Running {
            self.step(elapsed, dt, options);
            self.steps += 1;
        }
        self.frame = self.project(elapsed, options.color_mode);
        &self.frame
    }

    fn step(&mut self, elapsed: f64, dt: f64, options: &TickOptions) {
        for mass in self.masses.iter_mut() {
            mass.reset_deltas();
        }

        let g = self.config.gravity_constant;
        let min_distance = self.config.min_distance;
        for i in 0..self.masses.len() {
            let (head, tail) = self.masses.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if a.is_fixed() && b.is_fixed() {
                    continue;
                }
                let (on_a, on_b) = pair_contributions(a, b, g, min_distance, dt);
                a.accumulate(on_a);
                b.accumulate(on_b);
            }
        }

        let params = IntegrateParams {
            dt,
            viewport: options.viewport,
            history_window: self.config.history_window,
            record_history: options.record_history,
        };
        for mass in self.masses.iter_mut() {
            mass.stage_drift(dt);
            mass.integrate(elapsed, &params);
        }
    }

    /// Draw commands for the current state. Reads only.
    pub fn project(&self, elapsed: f64, mode: ColorMode) -> Frame {
        let accel_range = self.accel_range();
        Frame {
            elapsed,
            accel_range,
            draws: self
                .masses
                .iter()
                .map(|m| MassDraw {
                    id: m.id(),
                    commands: emit_draw_commands(m, mode, accel_range),
                })
                .collect(),
        }
    }

    /// Color bounds: extremes of the free masses, max capped by `max_accel`
    pub fn accel_range(&self) -> AccelRange {
        let mut free = self
            .masses
            .iter()
            .filter(|m| !m.is_fixed())
            .map(|m| m.accel_magnitude());
        let Some(first) = free.next() else {
            return AccelRange::default();
        };
        let (min, max) = free.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a)));
        let max = max.min(self.config.max_accel);
        AccelRange {
            min: min.min(max),
            max,
        }
    }

    /// Last frame produced by `tick`
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn spawn(&mut self, config: MassConfig) -> MassId {
        let mass = Mass::new(config, self.config.base_mass, &mut self.ids);
        let id = mass.id();
        self.masses.push(mass);
        id
    }

    /// Add a copy of `preset` with a new id
    pub fn spawn_from_preset(&mut self, preset: &Mass) -> MassId {
        let mass = Mass::from_preset(preset, self.config.base_mass, &mut self.ids);
        let id = mass.id();
        self.masses.push(mass);
        id
    }

    pub fn remove(&mut self, id: MassId) -> Option<Mass> {
        let index = self.masses.iter().position(|m| m.id() == id)?;
        let mass = self.masses.remove(index);
        info!("Removed mass {} ({} left)", id, self.masses.len());
        Some(mass)
    }

    pub fn clear(&mut self) {
        self.masses.clear();
        self.frame = Frame::default();
    }

    /// Replace every mass. Ids keep counting up from the previous set.
    pub fn replace_masses(&mut self, configs: impl IntoIterator<Item = MassConfig>) {
        self.clear();
        for config in configs {
            self.spawn(config);
        }
    }

    pub fn load_scenario(&mut self, scenario: Scenario, viewport: Viewport) {
        let configs = scenario.build(&self.config, viewport);
        self.replace_masses(configs);
        info!(
            "Loaded scenario '{}' with {} masses ({}x{})",
            scenario.name(),
            self.masses.len(),
            viewport.width,
            viewport.height
        );
    }

    pub fn clear_histories(&mut self) {
        for mass in self.masses.iter_mut() {
            mass.clear_history();
        }
    }

    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    pub fn get(&self, id: MassId) -> Option<&Mass> {
        self.masses.iter().find(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn pause(&mut self) {
        self.set_state(RunState::Paused);
    }

    pub fn resume(&mut self) {
        self.set_state(RunState::Running);
    }

    pub fn toggle_pause(&mut self) {
        self.set_state(self.state.toggled());
    }

    fn set_state(&mut self, state: RunState) {
        if self.state != state {
            info!("Simulation {} -> {}", self.state.name(), state.name());
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::Vector2;

    fn options() -> TickOptions {
        TickOptions {
            viewport: Viewport::new(1000.0, 1000.0),
            color_mode: ColorMode::Size,
            record_history: true,
        }
    }

    #[test]
    fn test_accel_range_ignores_fixed() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.spawn(MassConfig::anchor(1e6, Vector2::new(500.0, 500.0)));
        sim.spawn(MassConfig::free(1.0, Vector2::new(600.0, 500.0), Vector2::ZERO));
        sim.spawn(MassConfig::free(1.0, Vector2::new(800.0, 500.0), Vector2::ZERO));
        sim.tick(0.01, 0.01, &options());

        let range = sim.accel_range();
        assert!(range.min > 0.0);
        assert!(range.min < range.max);
    }

    #[test]
    fn test_accel_range_caps_max() {
        let config = SimConfig {
            max_accel: 1e-9,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(config);
        sim.spawn(MassConfig::free(1e6, Vector2::new(10.0, 10.0), Vector2::ZERO));
        sim.spawn(MassConfig::free(1e6, Vector2::new(20.0, 10.0), Vector2::ZERO));
        sim.tick(0.1, 0.1, &options());

        let range = sim.accel_range();
        assert_eq!(range.max, 1e-9);
        assert_eq!(range.min, range.max);
    }

    #[test]
    fn test_empty_tick_yields_empty_frame() {
        let mut sim = Simulation::new(SimConfig::default());
        let frame = sim.tick(1.0, 0.1, &options());
        assert!(frame.draws.is_empty());
        assert_eq!(sim.accel_range(), AccelRange::default());
    }

    #[test]
    fn test_remove_by_id() {
        let mut sim = Simulation::new(SimConfig::default());
        let a = sim.spawn(MassConfig::free(1.0, Vector2::ZERO, Vector2::ZERO));
        let b = sim.spawn(MassConfig::free(2.0, Vector2::ZERO, Vector2::ZERO));
        assert!(sim.remove(a).is_some());
        assert!(sim.remove(a).is_none());
        assert_eq!(sim.len(), 1);
        assert!(sim.get(b).is_some());
    }

    #[test]
    fn test_replace_keeps_ids_unique() {
        let mut sim = Simulation::new(SimConfig::default());
        let first = sim.spawn(MassConfig::free(1.0, Vector2::ZERO, Vector2::ZERO));
        sim.replace_masses([MassConfig::free(1.0, Vector2::ZERO, Vector2::ZERO)]);
        assert!(sim.masses()[0].id() > first);
    }

    #[test]
    fn test_toggle_pause() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.toggle_pause();
        assert!(sim.is_paused());
        sim.toggle_pause();
        assert_eq!(sim.state(), RunState::Running);
    }
}

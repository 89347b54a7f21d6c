use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use orbit_core::{ColorMode, Viewport};
use orbit_physics::procgen::Scenario;

use crate::simulation::{Simulation, TickOptions};

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>()
            .add_systems(Startup, load_initial_scenario)
            .add_systems(Update, simulation_tick.in_set(SimulationSet));
    }
}

/// The tick system. Anything reading the frame runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Display and control toggles, changed by the UI
#[derive(Resource, Debug, Clone)]
pub struct SimSettings {
    pub color_mode: ColorMode,
    pub record_history: bool,
    pub scenario: Scenario,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            record_history: true,
            scenario: Scenario::default(),
        }
    }
}

/// Simulated seconds since start. Stops while paused.
#[derive(Resource, Default, Debug)]
pub struct SimClock {
    pub elapsed: f64,
}

/// Primary window size in logical pixels, or the configured size before one exists
pub fn current_viewport(
    windows: &Query<&Window, With<PrimaryWindow>>,
    sim: &Simulation,
) -> Viewport {
    windows
        .get_single()
        .map(|w| Viewport::new(w.width() as f64, w.height() as f64))
        .unwrap_or(Viewport::new(sim.config.window_width, sim.config.window_height))
}

fn load_initial_scenario(
    mut sim: ResMut<Simulation>,
    settings: Res<SimSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = current_viewport(&windows, &sim);
    sim.load_scenario(settings.scenario, viewport);
}

/// Main simulation tick
fn simulation_tick(
    mut sim: ResMut<Simulation>,
    mut clock: ResMut<SimClock>,
    settings: Res<SimSettings>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let dt = if sim.is_paused() {
        0.0
    } else {
        time.delta_secs_f64() * sim.config.time_scale
    };
    clock.elapsed += dt;

    let options = TickOptions {
        viewport: current_viewport(&windows, &sim),
        color_mode: settings.color_mode,
        record_history: settings.record_history,
    };
    let elapsed = clock.elapsed;
    let frame = sim.tick(elapsed, dt, &options);
    trace!("Tick at {:.3}s: {} masses", elapsed, frame.draws.len());
}

use bevy::prelude::*;
use orbit_core::SimConfig;
use orbit_physics::procgen::Scenario;
use orbit_render::plugin::OrbitRenderPlugin;
use orbit_sim::Simulation;
use orbit_sim::pipeline::{SimSettings, SimulationPlugin};

/// Configuration problems found before logging was up
#[derive(Resource, Default)]
struct StartupWarnings(Vec<String>);

fn main() {
    let mut warnings = Vec::new();
    let config = load_config(&mut warnings);
    let scenario = load_scenario(&mut warnings);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit - 2D gravity toy".into(),
                resolution: (config.window_width as f32, config.window_height as f32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        .insert_resource(SimSettings {
            scenario,
            record_history: config.record_history,
            ..default()
        })
        .insert_resource(Simulation::new(config))
        .insert_resource(StartupWarnings(warnings))
        .add_plugins(SimulationPlugin)
        .add_plugins(OrbitRenderPlugin)
        .add_systems(Startup, report_startup_warnings)
        .run();
}

/// Defaults plus environment overrides; falls back to defaults when invalid
fn load_config(warnings: &mut Vec<String>) -> SimConfig {
    let config = match SimConfig::default().with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            warnings.push(e);
            SimConfig::default()
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warnings.push(format!("invalid configuration, using defaults: {e}"));
            SimConfig::default()
        }
    }
}

fn load_scenario(warnings: &mut Vec<String>) -> Scenario {
    match std::env::var("ORBIT_SCENARIO") {
        Ok(name) => name.parse().unwrap_or_else(|e| {
            warnings.push(e);
            Scenario::default()
        }),
        Err(_) => Scenario::default(),
    }
}

fn report_startup_warnings(warnings: Res<StartupWarnings>) {
    for warning in &warnings.0 {
        error!("{}", warning);
    }
}

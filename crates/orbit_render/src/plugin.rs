use bevy::prelude::*;
use orbit_sim::pipeline::SimulationSet;

use super::camera;
use super::canvas;
use super::ui;

/// Window-side half of the app: camera, draw sink, HUD and controls
pub struct OrbitRenderPlugin;

impl Plugin for OrbitRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    ui::control_system.before(SimulationSet),
                    canvas::draw_frame.after(SimulationSet),
                    ui::update_hud.after(SimulationSet),
                ),
            );
    }
}

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use orbit_physics::diagnostics;
use orbit_sim::Simulation;
use orbit_sim::pipeline::{SimClock, SimSettings, current_viewport};

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Orbit"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.85, 0.9, 1.0, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame
pub fn update_hud(
    sim: Res<Simulation>,
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let paused = if sim.is_paused() { " [PAUSED]" } else { "" };
    let kinetic = diagnostics::kinetic_energy(sim.masses());
    let potential =
        diagnostics::potential_energy(sim.masses(), sim.config.gravity_constant, sim.config.min_distance);
    let range = sim.frame().accel_range;
    let newest = match sim.masses().last() {
        Some(m) => format!("{} |a| {:.3e}", m.id(), m.acceleration().magnitude()),
        None => "-".to_string(),
    };

    **text = format!(
        "Scenario: {} | Masses: {}{}\n\
         Time: {:.2}s | Speed: {}x | Steps: {}\n\
         Color: {} | Trails: {}\n\
         Accel: {:.3e} .. {:.3e} | Newest: {}\n\
         Energy: K {:.3e}  U {:.3e}  E {:.3e}\n\
         \n\
         [Space] Pause  [C] Color mode  [H] Trails  [X] Clear trails\n\
         [P] Copy newest  [Backspace] Remove newest\n\
         [N] Next scenario  [R] Restart  [Up/Down] Speed",
        settings.scenario.name(),
        sim.len(),
        paused,
        clock.elapsed,
        sim.config.time_scale,
        sim.steps,
        settings.color_mode.name(),
        if settings.record_history { "on" } else { "off" },
        range.min,
        range.max,
        newest,
        kinetic,
        potential,
        kinetic + potential,
    );
}

/// Keyboard controls
pub fn control_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    mut settings: ResMut<SimSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        sim.toggle_pause();
    }

    if keys.just_pressed(KeyCode::KeyC) {
        settings.color_mode = settings.color_mode.next();
        info!("Color mode: {}", settings.color_mode.name());
    }

    if keys.just_pressed(KeyCode::KeyH) {
        settings.record_history = !settings.record_history;
        info!("Trail recording {}", if settings.record_history { "on" } else { "off" });
    }

    if keys.just_pressed(KeyCode::KeyX) {
        sim.clear_histories();
    }

    // Duplicate or delete the newest mass
    if keys.just_pressed(KeyCode::KeyP) {
        if let Some(preset) = sim.masses().last().cloned() {
            let id = sim.spawn_from_preset(&preset);
            info!("Spawned {} from preset {}", id, preset.id());
        }
    }
    if keys.just_pressed(KeyCode::Backspace) {
        if let Some(id) = sim.masses().last().map(|m| m.id()) {
            sim.remove(id);
        }
    }

    let restart = keys.just_pressed(KeyCode::KeyR);
    if keys.just_pressed(KeyCode::KeyN) {
        settings.scenario = settings.scenario.next();
    }
    if restart || keys.just_pressed(KeyCode::KeyN) {
        let viewport = current_viewport(&windows, &sim);
        sim.load_scenario(settings.scenario, viewport);
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        sim.config.time_scale = (sim.config.time_scale * 2.0).min(64.0);
        info!("Time scale: {}x", sim.config.time_scale);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        sim.config.time_scale = (sim.config.time_scale * 0.5).max(1.0 / 64.0);
        info!("Time scale: {}x", sim.config.time_scale);
    }
}

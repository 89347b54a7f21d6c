use bevy::prelude::*;

/// Marker for the single 2D camera
#[derive(Component)]
pub struct CanvasCamera;

/// World origin sits at the window center; the canvas maps onto it in `canvas`
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, CanvasCamera));
}

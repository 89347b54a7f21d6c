use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use orbit_core::{DrawCommand, Paint, Vector2, Viewport};
use orbit_sim::Simulation;
use orbit_sim::pipeline::current_viewport;

/// Spacing between the rings that fill a body disc
const FILL_RING_STEP: f64 = 1.0;

/// Canvas coordinates (origin top-left, y down) to world (origin center, y up)
pub fn canvas_to_world(p: Vector2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (p.x - viewport.width * 0.5) as f32,
        (viewport.height * 0.5 - p.y) as f32,
    )
}

/// `None` for paints the surface cannot show (non-finite hue), which draw as nothing.
/// Hues wrap around the wheel.
pub fn paint_to_color(paint: Paint) -> Option<Color> {
    if !paint.is_finite() {
        return None;
    }
    match paint {
        Paint::Hsl {
            hue,
            saturation,
            lightness,
        } => Some(Color::hsl(
            hue.rem_euclid(360.0) as f32,
            saturation as f32,
            lightness as f32,
        )),
        Paint::White => Some(Color::WHITE),
    }
}

/// Draw sink: replays the last frame's commands as gizmos
pub fn draw_frame(
    sim: Res<Simulation>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let viewport = current_viewport(&windows, &sim);
    for command in sim.frame().commands() {
        match *command {
            DrawCommand::FillCircle {
                paint,
                center,
                radius,
            } => {
                // Non-positive radii draw nothing, like a rejected arc
                if !(radius > 0.0) || !radius.is_finite() || !center.is_finite() {
                    continue;
                }
                let Some(color) = paint_to_color(paint) else {
                    continue;
                };
                let at = Isometry2d::from_translation(canvas_to_world(center, viewport));
                let mut r = radius;
                while r > 0.0 {
                    gizmos.circle_2d(at, r as f32, color);
                    r -= FILL_RING_STEP;
                }
            }
            DrawCommand::StrokePoint {
                paint,
                center,
                radius,
                ..
            } => {
                // Gizmo lines have one global width, so line_width is not applied per point
                let Some(color) = paint_to_color(paint) else {
                    continue;
                };
                if !center.is_finite() {
                    continue;
                }
                let at = Isometry2d::from_translation(canvas_to_world(center, viewport));
                gizmos.circle_2d(at, radius as f32, color.with_alpha(0.35));
            }
        }
    }
}

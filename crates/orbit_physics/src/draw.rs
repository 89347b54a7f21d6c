use orbit_core::constants::{HUE_MAX, SIZE_SCALE_MAX_RADIUS, TRAIL_LINE_WIDTH, TRAIL_POINT_RADIUS};
use orbit_core::{AccelRange, ColorMode, DrawCommand, Paint, Vector2};

use crate::mass::Mass;

/// Project a mass onto draw commands: one filled body, then one point per trail sample
/// (oldest first). Reads only.
pub fn emit_draw_commands(mass: &Mass, mode: ColorMode, range: AccelRange) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + mass.history().len());
    commands.push(DrawCommand::FillCircle {
        paint: body_paint(mass, mode, range),
        center: mass.position(),
        radius: mass.radius(),
    });
    commands.extend(mass.history().iter().map(|s| DrawCommand::StrokePoint {
        paint: Paint::White,
        center: Vector2::new(s.x, s.y),
        radius: TRAIL_POINT_RADIUS,
        line_width: TRAIL_LINE_WIDTH,
    }));
    commands
}

pub fn body_paint(mass: &Mass, mode: ColorMode, range: AccelRange) -> Paint {
    match mode {
        ColorMode::Size => Paint::hue(size_hue(mass.radius())),
        ColorMode::Acceleration => {
            if mass.is_fixed() {
                Paint::hue(0.0)
            } else {
                Paint::hue(acceleration_hue(mass.accel_magnitude(), range))
            }
        }
        ColorMode::Plain => Paint::White,
    }
}

/// Radius 1 maps to 0, radius 20 to 330, clamped to that band
pub fn size_hue(radius: f64) -> f64 {
    let mut hue = ((radius - 1.0) / (SIZE_SCALE_MAX_RADIUS - 1.0) * HUE_MAX).floor();
    if hue > HUE_MAX {
        hue = HUE_MAX;
    }
    if hue < 0.0 {
        hue = 0.0;
    }
    hue
}

/// Position of `accel` on the log2 scale between `range.min` and `range.max`.
/// Not clamped; zero or negative inputs give non-finite hues. A flat range is always 0.
pub fn acceleration_hue(accel: f64, range: AccelRange) -> f64 {
    if range.min == range.max {
        return 0.0;
    }
    let scaled_min = range.min.log2();
    let scaled_max = range.max.log2();
    let scaled_acc = accel.log2();
    let scaled_diff = scaled_max - scaled_min;
    if scaled_diff == 0.0 {
        return 0.0;
    }
    ((scaled_acc - scaled_min) / scaled_diff * HUE_MAX).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::{IntegrateParams, MassConfig, MassIdAllocator};
    use orbit_core::Viewport;

    fn hue_of(paint: Paint) -> f64 {
        match paint {
            Paint::Hsl { hue, .. } => hue,
            Paint::White => panic!("expected hsl paint"),
        }
    }

    #[test]
    fn test_size_hue_stays_in_band() {
        let mut r = 1.0;
        while r <= 20.0 {
            let hue = size_hue(r);
            assert!((0.0..=330.0).contains(&hue), "radius {r} gave hue {hue}");
            r += 0.25;
        }
        assert_eq!(size_hue(1.0), 0.0);
        assert_eq!(size_hue(20.0), 330.0);
        assert_eq!(size_hue(-3.0), 0.0);
        assert_eq!(size_hue(40.0), 330.0);
    }

    #[test]
    fn test_acceleration_hue_flat_range_is_zero() {
        let range = AccelRange { min: 8.0, max: 8.0 };
        assert_eq!(acceleration_hue(1.0, range), 0.0);
        assert_eq!(acceleration_hue(1e9, range), 0.0);
    }

    #[test]
    fn test_acceleration_hue_zero_range_is_zero() {
        let range = AccelRange { min: 0.0, max: 0.0 };
        assert_eq!(acceleration_hue(0.0, range), 0.0);
        assert_eq!(acceleration_hue(3.0, range), 0.0);
    }

    #[test]
    fn test_isolated_free_mass_acceleration_hue_is_zero() {
        let mut ids = MassIdAllocator::new();
        let mut m = Mass::new(MassConfig::free(10.0, Vector2::new(5.0, 5.0), Vector2::ZERO), 1.0, &mut ids);
        m.reset_deltas();
        assert_eq!(m.accel_magnitude(), 0.0);
        let paint = body_paint(&m, ColorMode::Acceleration, AccelRange::default());
        assert_eq!(paint, Paint::hue(0.0));
    }

    #[test]
    fn test_acceleration_hue_is_unclamped() {
        let range = AccelRange { min: 1.0, max: 4.0 };
        assert_eq!(acceleration_hue(1.0, range), 0.0);
        assert_eq!(acceleration_hue(2.0, range), 165.0);
        assert_eq!(acceleration_hue(4.0, range), 330.0);
        assert_eq!(acceleration_hue(16.0, range), 660.0);
        assert!(acceleration_hue(0.0, range).is_infinite());
    }

    #[test]
    fn test_fixed_mass_acceleration_hue_is_zero() {
        let mut ids = MassIdAllocator::new();
        let m = Mass::new(MassConfig::anchor(10.0, Vector2::ZERO), 1.0, &mut ids);
        let paint = body_paint(&m, ColorMode::Acceleration, AccelRange { min: 1.0, max: 2.0 });
        assert_eq!(hue_of(paint), 0.0);
    }

    #[test]
    fn test_plain_mode_is_white() {
        let mut ids = MassIdAllocator::new();
        let m = Mass::new(MassConfig::free(10.0, Vector2::ZERO, Vector2::ZERO), 1.0, &mut ids);
        assert_eq!(body_paint(&m, ColorMode::Plain, AccelRange::default()), Paint::White);
    }

    #[test]
    fn test_trail_points_follow_body() {
        let mut ids = MassIdAllocator::new();
        let mut m = Mass::new(
            MassConfig::free(2.0, Vector2::new(10.0, 10.0), Vector2::new(1.0, 0.0)),
            1.0,
            &mut ids,
        );
        let params = IntegrateParams {
            dt: 1.0,
            viewport: Viewport::new(100.0, 100.0),
            history_window: 100.0,
            record_history: true,
        };
        for t in 1..=3 {
            m.reset_deltas();
            m.stage_drift(1.0);
            m.integrate(t as f64, &params);
        }

        let commands = emit_draw_commands(&m, ColorMode::Size, AccelRange::default());
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::FillCircle {
                paint: Paint::hue(17.0),
                center: Vector2::new(13.0, 10.0),
                radius: 2.0,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::StrokePoint {
                paint: Paint::White,
                center: Vector2::new(11.0, 10.0),
                radius: 1.0,
                line_width: 0.1,
            }
        );

        m.clear_history();
        let commands = emit_draw_commands(&m, ColorMode::Size, AccelRange::default());
        assert!(
            commands
                .iter()
                .all(|c| !matches!(c, DrawCommand::StrokePoint { .. }))
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::vec2::Vector2;

/// Identity of a mass, unique within one allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MassId(pub u64);

impl fmt::Display for MassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visible rectangle in canvas units. Only decides trail eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Edges count as inside
    pub fn contains(&self, p: Vector2) -> bool {
        !(p.x < 0.0 || p.x > self.width || p.y < 0.0 || p.y > self.height)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// One trail sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// How bodies are colored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Hue from render radius
    #[default]
    Size,
    /// Hue from log-scaled acceleration
    Acceleration,
    /// Everything white
    Plain,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Acceleration => "acceleration",
            Self::Plain => "plain",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Size => Self::Acceleration,
            Self::Acceleration => Self::Plain,
            Self::Plain => Self::Size,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "size" => Ok(Self::Size),
            "acceleration" | "accel" => Ok(Self::Acceleration),
            "plain" | "none" | "white" => Ok(Self::Plain),
            other => Err(format!("unknown color mode {other:?}")),
        }
    }
}

/// Fill or stroke color handed to the draw sink.
/// Hue is passed through as computed, including non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
    White,
}

impl Paint {
    /// Fully saturated, half lightness
    pub fn hue(hue: f64) -> Self {
        Self::Hsl {
            hue,
            saturation: 1.0,
            lightness: 0.5,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => hue.is_finite() && saturation.is_finite() && lightness.is_finite(),
            Self::White => true,
        }
    }
}

/// Instruction for the draw sink, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillCircle {
        paint: Paint,
        center: Vector2,
        radius: f64,
    },
    StrokePoint {
        paint: Paint,
        center: Vector2,
        radius: f64,
        line_width: f64,
    },
}

/// Bounds of the acceleration color scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelRange {
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_edges_are_inside() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.contains(Vector2::new(0.0, 0.0)));
        assert!(vp.contains(Vector2::new(100.0, 50.0)));
        assert!(!vp.contains(Vector2::new(100.5, 10.0)));
        assert!(!vp.contains(Vector2::new(10.0, -0.1)));
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("Acceleration".parse::<ColorMode>(), Ok(ColorMode::Acceleration));
        assert_eq!("size".parse::<ColorMode>(), Ok(ColorMode::Size));
        assert!("rainbow".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_color_mode_cycles() {
        let mut mode = ColorMode::Size;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ColorMode::Size);
    }
}

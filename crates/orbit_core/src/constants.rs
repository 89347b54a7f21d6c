// Simulation units are canvas units:
// - Distance: 1 unit = 1 pixel at zoom 1
// - Mass: arbitrary, BASE_MASS is the reference body
// - Time: seconds of simulated time

/// Reference mass. A body of `BASE_MASS` has a render radius of 1.
pub const BASE_MASS: f64 = 1000.0;

/// Upper reference for the acceleration color scale
pub const MAX_ACCEL: f64 = 5000.0;

/// Gravitational constant in simulation units
pub const G: f64 = 1.0;

/// Pair distances are floored at this value before applying the inverse square law
pub const MIN_DISTANCE: f64 = 4.0;

/// Trail span in seconds of simulated time
pub const HISTORY_WINDOW: f64 = 6.0;

/// Hue assigned to the top of every color scale (degrees)
pub const HUE_MAX: f64 = 330.0;

/// Render radius at which the size scale saturates
pub const SIZE_SCALE_MAX_RADIUS: f64 = 20.0;

/// Trail point geometry
pub const TRAIL_POINT_RADIUS: f64 = 1.0;
pub const TRAIL_LINE_WIDTH: f64 = 0.1;

/// Number of random bodies in the cluster scenario
pub const DEFAULT_BODY_COUNT: u32 = 40;

pub const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Reference mass used to derive render radii
    pub base_mass: f64,
    /// Upper bound of the acceleration color scale
    pub max_accel: f64,
    /// Gravitational constant
    pub gravity_constant: f64,
    /// Floor applied to pair distances
    pub min_distance: f64,
    /// Trail span in seconds
    pub history_window: f64,
    /// Whether integrate appends trail samples
    pub record_history: bool,
    /// Time scale multiplier (1.0 = real time)
    pub time_scale: f64,
    /// Random seed for the cluster scenario
    pub seed: u64,
    /// Body count for the cluster scenario
    pub body_count: u32,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_mass: BASE_MASS,
            max_accel: MAX_ACCEL,
            gravity_constant: G,
            min_distance: MIN_DISTANCE,
            history_window: HISTORY_WINDOW,
            record_history: true,
            time_scale: 1.0,
            seed: 42,
            body_count: DEFAULT_BODY_COUNT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl SimConfig {
    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_mass > 0.0) {
            return Err(format!("base_mass must be positive, got {}", self.base_mass));
        }
        if !(self.max_accel > 0.0) {
            return Err(format!("max_accel must be positive, got {}", self.max_accel));
        }
        if !(self.history_window > 0.0) {
            return Err(format!(
                "history_window must be positive, got {}",
                self.history_window
            ));
        }
        if !(self.min_distance >= 0.0) {
            return Err(format!(
                "min_distance must not be negative, got {}",
                self.min_distance
            ));
        }
        if !(self.time_scale > 0.0) {
            return Err(format!("time_scale must be positive, got {}", self.time_scale));
        }
        Ok(())
    }

    /// Apply `ORBIT_SEED` from the environment, if set
    pub fn with_env_overrides(mut self) -> Result<Self, String> {
        if let Ok(raw) = std::env::var("ORBIT_SEED") {
            self.seed = raw
                .trim()
                .parse()
                .map_err(|e| format!("ORBIT_SEED={raw:?} is not a u64: {e}"))?;
        }
        Ok(self)
    }
}

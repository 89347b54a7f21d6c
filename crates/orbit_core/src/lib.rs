pub mod config;
pub mod constants;
pub mod types;
pub mod vec2;

pub use config::SimConfig;
pub use constants::*;
pub use types::*;
pub use vec2::Vector2;

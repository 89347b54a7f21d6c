pub mod diagnostics;
pub mod draw;
pub mod forces;
pub mod mass;
pub mod procgen;

pub use mass::{IntegrateParams, Mass, MassConfig, MassIdAllocator};

pub mod pipeline;
pub mod simulation;
pub mod state;

pub use simulation::{Frame, MassDraw, Simulation, TickOptions};
pub use state::RunState;

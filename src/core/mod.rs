pub mod config;
mod accumulator;
mod clock;
mod stats;
mod simulation_loop;

pub use self::config::SimulationConfig;
pub use self::accumulator::{FixedStepAccumulator, Interpolation};
pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::stats::FrameStats;
pub use self::simulation_loop::{FrameReport, Simulation, SimulationLoop};

pub mod math;
pub mod bodies;
pub mod collision;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{
    Clock, FixedStepAccumulator, Interpolation, Simulation, SimulationConfig, SimulationLoop,
};
pub use crate::bodies::{
    Aged, AgedBody, CircleBody, MovingBody, Outline, PolygonBody, RectangleBody, RotatingBody,
};
pub use crate::collision::Playfield;
pub use crate::math::{ContinuousVector, FixedVector, UnitConverter};

/// Error types for the physics core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Simulation error: {0}")]
        SimulationError(String),

        #[error("Simulation loop error: {0}")]
        LoopError(String),
    }
}

/// Result type for physics core operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

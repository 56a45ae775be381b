pub mod benchmark;
#[cfg(feature = "randomization")]
pub mod creator;
pub mod direct_summation;
pub mod gravity;
pub mod integrator;
pub mod particle;
pub mod simulation;

pub use benchmark::Benchmark;
#[cfg(feature = "randomization")]
pub use creator::OrbitalSystemCreator;
pub use direct_summation::{DirectSummation, Execution};
pub use particle::{Color, Particle};
pub use simulation::{Simulation, SimulationParams};

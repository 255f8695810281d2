pub mod config;
pub mod simulation;

pub use config::{CollisionPass, SimulationConfig};
pub use simulation::{resolve_collisions, tick, Simulation, StepStats};

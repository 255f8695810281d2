//! Rigid-body playground: circles and squares moving at constant velocity
//! inside a rectangle, bouncing off each other with elastic impulses.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_collision, Contact};
pub use error::{KernelError, KernelResult};
pub use integration::Bounds;
pub use math::vec2::Vec2;
pub use objects::Body;
pub use shapes::{Circle, LineSegment, SegmentIntersection, ShapeKind};
pub use world::{tick, CollisionPass, Simulation, SimulationConfig, StepStats};

pub mod boundary;
pub mod integrator;

pub use boundary::Bounds;
pub use integrator::{integrate, wrap_degrees};

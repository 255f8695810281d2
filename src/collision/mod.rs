pub mod aabb;
pub mod broad_phase;
pub mod detection;
pub mod manifold;
pub mod narrow_phase;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use broad_phase::is_closing;
pub use detection::*;
pub use manifold::{Contact, PolygonHit};
pub use narrow_phase::check_collision;
pub use response::{resolve_collision, RESTITUTION};

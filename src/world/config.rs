use serde::{Deserialize, Serialize};

use crate::integration::Bounds;

/// When the pairwise collision pass runs within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPass {
    /// Move every body, then test all pairs once.
    #[default]
    AfterIntegration,
    /// Test all pairs after each individual body moves. Bodies later in the
    /// list move with velocities already changed by earlier collisions.
    PerBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub bounds: Bounds,
    /// Reflect velocity at the borders instead of only clamping position.
    pub bounce_at_borders: bool,
    pub collision_pass: CollisionPass,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            bounce_at_borders: false,
            collision_pass: CollisionPass::AfterIntegration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "bounce_at_borders": true, "collision_pass": "per_body" }"#)
                .unwrap();
        assert!(config.bounce_at_borders);
        assert_eq!(config.collision_pass, CollisionPass::PerBody);
        assert_eq!(config.bounds, Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_bounds_from_json() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "bounds": { "width": 1024.0, "height": 768.0 } }"#).unwrap();
        assert_eq!(config.bounds, Bounds::new(1024.0, 768.0));
        assert!(!config.bounce_at_borders);
        assert_eq!(config.collision_pass, CollisionPass::AfterIntegration);
    }
}

//! Data-driven handling and sensing parameters
//!
//! Everything here is expressed in normalized track space ([0,1] unit square,
//! one tick of simulation time), so the physics never depend on the output
//! surface size. Defaults are the values the built-in circuit is balanced for.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handling and sensing parameters for a car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Acceleration gained per tick at full throttle
    pub jerk: f32,
    /// Velocity damping applied every tick (must stay below 1)
    pub friction: f32,
    /// Degrees of heading change per tick, per unit of speed
    pub turning_rate: f32,
    /// Below this absolute velocity the wheels cannot steer
    pub min_steer_speed: f32,
    /// Forward speed cap
    pub max_forward_speed: f32,
    /// Reverse speed cap (negative, smaller magnitude than forward)
    pub max_reverse_speed: f32,
    /// Sensor ray reach
    pub max_sensor_length: f32,
    /// A sensor hit closer than this to its ray origin counts as wall contact
    pub collision_radius: f32,
    /// Body width (fraction of the unit square)
    pub car_width: f32,
    /// Body height (fraction of the unit square)
    pub car_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jerk: 0.001,
            friction: 0.97,
            turning_rate: 500.0,
            min_steer_speed: 0.0005,
            max_forward_speed: 0.008,
            max_reverse_speed: -0.003,
            max_sensor_length: 0.1,
            collision_radius: 0.003,
            car_width: 0.01,
            car_height: 0.02,
        }
    }
}

/// Construction-time simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Where the car starts (and returns to on reset), normalized
    pub start_position: Vec2,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_position: Vec2::new(0.07, 0.6),
            tuning: Tuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let t = Tuning::default();
        assert!(t.friction < 1.0);
        assert!(t.max_reverse_speed < 0.0);
        assert!(t.max_reverse_speed.abs() < t.max_forward_speed);
        assert!(t.min_steer_speed < t.max_forward_speed);
    }

    #[test]
    fn test_partial_config_json() {
        // Unspecified fields fall back to defaults
        let config: SimConfig = serde_json::from_str(r#"{"tuning": {"jerk": 0.002}}"#).unwrap();
        assert_eq!(config.tuning.jerk, 0.002);
        assert_eq!(config.tuning.friction, Tuning::default().friction);
        assert_eq!(config.start_position, SimConfig::default().start_position);
    }
}

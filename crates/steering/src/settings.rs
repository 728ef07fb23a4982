use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::agent::SteeringTuning;

/// Demo settings, edited between runs and read once per simulation build
///
/// Changing a value never affects a running [`crate::Simulation`]; it takes
/// effect on the next restart. All fields are plain numbers so the settings
/// can live in a TOML file or behind a tweak panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial target velocity; each component roughly -100..100
    pub target_velocity: Vec3,
    /// Initial pursuer position
    pub pursuer_position: Vec3,
    /// Initial pursuer velocity
    pub pursuer_velocity: Vec3,
    /// Pursuer velocity cap, 1..100
    pub max_speed: f32,
    /// Per-tick steering force cap, 1..100
    pub max_steer_force: f32,
    /// Vision cone range, 1..100
    pub vision_distance: f32,
    /// Full vision cone angle in degrees, 1..90
    pub vision_angle: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_velocity: Vec3::new(10.0, 0.0, 5.0),
            pursuer_position: Vec3::new(-40.0, 0.0, -40.0),
            pursuer_velocity: Vec3::ZERO,
            max_speed: 30.0,
            max_steer_force: 10.0,
            vision_distance: 10.0,
            vision_angle: 30.0,
        }
    }
}

impl Settings {
    /// Build the agent tuning, converting the cone angle from degrees to a
    /// half-angle in radians
    pub fn tuning(&self) -> SteeringTuning {
        SteeringTuning {
            max_speed: self.max_speed,
            max_steer_force: self.max_steer_force,
            vision_distance: self.vision_distance,
            vision_half_angle: self.vision_angle.to_radians() / 2.0,
        }
    }
}

//! Pursuit-curve steering simulation core
//!
//! A pursuer craft seeks a coasting target with a bounded steering force and
//! stops the run when its forward vision cone detects the target within range
//! and field of view. The crate is presentation-free: a driver (renderer,
//! testbed, test harness) feeds [`Simulation::update`] a per-frame time delta
//! and reads positions, heading, elapsed time, and the finished flag back.

mod agent;
mod body;
mod settings;
mod simulation;

pub use agent::{SteeringAgent, SteeringTuning};
pub use body::MovingBody;
pub use settings::Settings;
pub use simulation::Simulation;

// Re-export for convenience
pub use glam;

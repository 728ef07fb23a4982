use glam::Vec3;
use tracing::debug;

use crate::agent::SteeringAgent;
use crate::body::MovingBody;
use crate::settings::Settings;

/// Two-body pursuit simulation
///
/// Owns the target and the pursuer and advances both once per tick. The run
/// ends when the pursuer's vision cone detects the target; after that every
/// `update` is a no-op. There is no in-place reset: a restart builds a fresh
/// `Simulation` from the current settings.
pub struct Simulation {
    /// The craft being chased; starts at the world origin
    pub target: MovingBody,
    /// The chasing craft
    pub pursuer: SteeringAgent,
    /// Elapsed simulated time in seconds
    pub time: f32,
    /// Set when the target is caught; the driver may also flip it to pause
    pub finished: bool,
}

impl Simulation {
    /// Build a simulation from a settings snapshot
    ///
    /// # Arguments
    /// * `settings` - Initial conditions and pursuer tuning; read once here,
    ///   later edits do not reach this instance
    pub fn new(settings: &Settings) -> Self {
        Self {
            target: MovingBody::new(Vec3::ZERO, settings.target_velocity),
            pursuer: SteeringAgent::new(
                settings.pursuer_position,
                settings.pursuer_velocity,
                settings.tuning(),
            ),
            time: 0.0,
            finished: false,
        }
    }

    /// Advance the simulation by dt seconds
    ///
    /// Applies the seek force, integrates both bodies, then evaluates the
    /// catch predicate. Does nothing when the run is finished.
    pub fn update(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.time += dt;
        self.pursuer.pursue(&self.target);
        self.target.update(dt);
        self.pursuer.update(dt);
        self.finished = self.pursuer.is_target_detected(&self.target);

        if self.finished {
            debug!(time = self.time, "pursuer caught the target");
        }
    }
}

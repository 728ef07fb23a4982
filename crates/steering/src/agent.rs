use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::body::MovingBody;

/// Tuning parameters for a steering agent
#[derive(Debug, Clone, Copy)]
pub struct SteeringTuning {
    /// Hard cap on velocity magnitude (units per second)
    pub max_speed: f32,
    /// Hard cap on the magnitude of a single steering force
    pub max_steer_force: f32,
    /// Maximum range of the vision cone
    pub vision_distance: f32,
    /// Half-angle of the vision cone in radians
    pub vision_half_angle: f32,
}

impl Default for SteeringTuning {
    fn default() -> Self {
        Self {
            max_speed: 30.0,
            max_steer_force: 10.0,
            vision_distance: 10.0,
            vision_half_angle: 30.0f32.to_radians() / 2.0,
        }
    }
}

/// Steering agent: a kinematic body plus a bounded seek force and a
/// forward-facing vision cone
///
/// The agent accumulates steering forces into an acceleration vector over the
/// course of a tick and integrates them in [`SteeringAgent::update`]. The
/// accumulator is cleared after every integration step.
#[derive(Debug, Clone, Copy)]
pub struct SteeringAgent {
    /// Underlying kinematic state
    pub body: MovingBody,
    /// Steering forces accumulated for the current tick
    pub acceleration: Vec3,
    /// Unit heading, recomputed from velocity each tick; zero while at rest
    pub direction: Vec3,
    /// Tuning parameters, fixed for the agent's lifetime
    pub tuning: SteeringTuning,
}

impl SteeringAgent {
    /// Create an agent at the given position with the given velocity
    pub fn new(position: Vec3, velocity: Vec3, tuning: SteeringTuning) -> Self {
        Self {
            body: MovingBody::new(position, velocity),
            acceleration: Vec3::ZERO,
            direction: velocity.normalize_or_zero(),
            tuning,
        }
    }

    /// Current world-space position
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Current world-space velocity
    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Accumulate a steering force for the current tick
    ///
    /// No clamping happens here; the producing steering law is responsible
    /// for bounding its own contribution.
    pub fn apply_steering_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    /// Integrate accumulated forces and advance the agent by dt seconds
    ///
    /// Velocity is capped at `max_speed` after the force is applied, then the
    /// position integrates the capped velocity. The accumulator is cleared
    /// and the heading recomputed at the end of the step.
    pub fn update(&mut self, dt: f32) {
        self.body.velocity += self.acceleration * dt;
        self.body.velocity = self.body.velocity.clamp_length_max(self.tuning.max_speed);
        self.body.update(dt);
        self.acceleration = Vec3::ZERO;
        self.direction = self.body.velocity.normalize_or_zero();
    }

    /// Seek the target: steer toward it at full speed
    ///
    /// The desired velocity points straight at the target at `max_speed`,
    /// and the steering force is the difference from the current velocity,
    /// clamped to `max_steer_force`. When the target is coincident with the
    /// agent the desired velocity falls back to zero.
    pub fn pursue(&mut self, target: &MovingBody) {
        let desired =
            (target.position - self.body.position).normalize_or_zero() * self.tuning.max_speed;
        let steer = (desired - self.body.velocity).clamp_length_max(self.tuning.max_steer_force);
        self.apply_steering_force(steer);
    }

    /// Vision-cone test: is the target within range and field of view?
    ///
    /// The distance gate runs first. The angular test measures the heading
    /// against the target's position vector from the world origin, not the
    /// offset from the agent, and a zero denominator is replaced by PI/2.
    pub fn is_target_detected(&self, target: &MovingBody) -> bool {
        let distance = self.body.position.distance(target.position);
        if distance > self.tuning.vision_distance {
            return false;
        }

        let mut denominator = self.direction.length() * target.position.length();
        if denominator == 0.0 {
            denominator = FRAC_PI_2;
        }

        let cos_angle = (self.direction.dot(target.position) / denominator).clamp(-1.0, 1.0);
        cos_angle.acos() <= self.tuning.vision_half_angle
    }
}

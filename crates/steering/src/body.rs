use glam::Vec3;

/// Minimal kinematic body: a position advanced by a linear velocity
///
/// This is the target half of the pursuit demo. It has no steering and no
/// speed cap; it just coasts along whatever velocity it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingBody {
    /// World-space location
    pub position: Vec3,
    /// World-space linear velocity (units per second)
    pub velocity: Vec3,
}

impl MovingBody {
    /// Create a body at the given position with the given velocity
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Advance the body by dt seconds
    ///
    /// Negative dt integrates backward; the caller owns the sign of time.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

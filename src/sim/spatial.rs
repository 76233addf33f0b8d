//! Kinematic state shared by every entity
//!
//! Three rows (position, velocity, acceleration) over three axes:
//! - x: horizontal screen axis
//! - y: vertical screen axis (lane depth)
//! - z: height above ground, only used for the jump illusion and sprite scale

use glam::Vec3;

use crate::consts::DEPTH_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpatialState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Constant per entity (gravity on z for ground-affected entities)
    pub acceleration: Vec3,
}

impl SpatialState {
    pub fn new(position: Vec3, velocity: Vec3, acceleration: Vec3) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Stationary state at a ground-level screen position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Height above ground
    #[inline]
    pub fn height(&self) -> f32 {
        self.position.z
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.position.z > 0.0
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        !self.is_airborne()
    }

    /// Visual scale from height: 1 on the ground, growing linearly with z
    #[inline]
    pub fn depth_scale(&self) -> f32 {
        1.0 + self.position.z / DEPTH_SCALE
    }

    /// Speed in the ground plane (x, y only)
    pub fn planar_speed(&self) -> f32 {
        self.velocity.truncate().length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_scale() {
        let mut s = SpatialState::at(0.0, 0.0);
        assert_eq!(s.depth_scale(), 1.0);
        s.position.z = 500.0;
        assert!((s.depth_scale() - 1.5).abs() < 1e-6);
        s.position.z = -250.0;
        assert!((s.depth_scale() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_grounded_boundary() {
        let mut s = SpatialState::at(10.0, 20.0);
        assert!(s.is_grounded());
        s.position.z = 0.001;
        assert!(s.is_airborne());
        s.position.z = -3.0;
        assert!(s.is_grounded());
    }

    #[test]
    fn test_planar_speed_ignores_height() {
        let s = SpatialState::at(0.0, 0.0).with_velocity(Vec3::new(3.0, 4.0, 100.0));
        assert!((s.planar_speed() - 5.0).abs() < 1e-6);
    }
}

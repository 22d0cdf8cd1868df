//! Transformation data for scene objects.
//!
//! An `Instance` places a flower, or one of its volumes, in the world:
//! position, rotation and scale. Children store a local instance and derive
//! their world instance by multiplying with the parent's.

use std::ops::Mul;

use cgmath::{InnerSpace, One, Rotation, Vector3};

/// Position, rotation (as quaternion), and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn with_rotation(mut self, rotation: cgmath::Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: cgmath::Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Local +Y rotated into the world. Scale never affects the direction.
    pub fn up(&self) -> Vector3<f32> {
        self.rotation.rotate_vector(Vector3::unit_y()).normalize()
    }

    /// Local +Z rotated into the world.
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation.rotate_vector(Vector3::unit_z()).normalize()
    }

    /// Largest absolute scale component, used to grow radii under non-uniform scale.
    pub fn max_scale(&self) -> f32 {
        self.scale.x.abs().max(self.scale.y.abs()).max(self.scale.z.abs())
    }

    /**
     * Maps a world-space point into this instance's local frame.
     *
     * Zero scale components collapse the axis: only points lying on that
     * plane map to zero, everything off it maps to infinity.
     */
    pub fn inverse_transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        let unrotated = self.rotation.invert().rotate_vector(point - self.position);
        let unscale = |v: f32, s: f32| match (s == 0.0, v == 0.0) {
            (false, _) => v / s,
            (true, true) => 0.0,
            (true, false) => f32::INFINITY,
        };
        Vector3::new(
            unscale(unrotated.x, self.scale.x),
            unscale(unrotated.y, self.scale.y),
            unscale(unrotated.z, self.scale.z),
        )
    }
}

impl<'a, 'b> Mul<&'b Instance> for &'a Instance {
    type Output = Instance;

    fn mul(self, rhs: &'b Instance) -> Self::Output {
        let new_rotation = self.rotation * rhs.rotation;

        let new_scale = cgmath::Vector3::new(
            self.scale.x * rhs.scale.x,
            self.scale.y * rhs.scale.y,
            self.scale.z * rhs.scale.z,
        );
        let scaled_rhs_pos = cgmath::Vector3::new(
            self.scale.x * rhs.position.x,
            self.scale.y * rhs.position.y,
            self.scale.z * rhs.position.z,
        );
        let new_position = self.position + (self.rotation * scaled_rhs_pos);

        Instance {
            position: new_position,
            rotation: new_rotation,
            scale: new_scale,
        }
    }
}

impl Mul<Instance> for Instance {
    type Output = Self;

    fn mul(self, rhs: Instance) -> Self::Output {
        &self * &rhs
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

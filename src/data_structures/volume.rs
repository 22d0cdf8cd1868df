//! Collision volumes owned by scene objects.
//!
//! A `Volume` is a named collidable region. The host physics decides what a
//! collision means; this type only tracks where the region is, what shape it
//! has and whether it currently participates in collisions.

use cgmath::{InnerSpace, Vector3};

use crate::data_structures::instance::Instance;

/// Local-space shape of a volume. Sizes are multiplied by the world scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { half_extents: Vector3<f32> },
}

/// Whether a volume blocks bodies or only reports overlaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeKind {
    Solid,
    Sensor,
}

#[derive(Clone, Debug)]
pub struct Volume {
    name: String,
    kind: VolumeKind,
    shape: Shape,
    local: Instance,
    world: Instance,
    enabled: bool,
}

impl Volume {
    pub fn new(name: impl Into<String>, kind: VolumeKind, shape: Shape, local: Instance) -> Self {
        Self {
            name: name.into(),
            kind,
            shape,
            world: local.clone(),
            local,
            enabled: true,
        }
    }

    pub fn solid(name: impl Into<String>, shape: Shape, local: Instance) -> Self {
        Self::new(name, VolumeKind::Solid, shape, local)
    }

    pub fn sensor(name: impl Into<String>, shape: Shape, local: Instance) -> Self {
        Self::new(name, VolumeKind::Sensor, shape, local)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VolumeKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::trace!("volume {} enabled: {}", self.name, enabled);
        }
        self.enabled = enabled;
    }

    pub fn local_transform(&self) -> &Instance {
        &self.local
    }

    pub fn world_transform(&self) -> &Instance {
        &self.world
    }

    pub fn set_local_transform(&mut self, local: Instance, parent: &Instance) {
        self.local = local;
        self.update_world_transform(parent);
    }

    /// Recomputes the world transform as `parent * local`.
    pub fn update_world_transform(&mut self, parent: &Instance) {
        self.world = parent * &self.local;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.world.position
    }

    pub fn up(&self) -> Vector3<f32> {
        self.world.up()
    }

    /**
     * Whether `point` (world space) lies inside the volume.
     *
     * Disabled volumes contain nothing, the same way a disabled collider
     * never reports an overlap.
     */
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        if !self.enabled {
            return false;
        }
        match self.shape {
            Shape::Sphere { radius } => {
                let radius = radius * self.world.max_scale();
                (point - self.world.position).magnitude2() <= radius * radius
            }
            Shape::Box { half_extents } => {
                let local = self.world.inverse_transform_point(point);
                local.x.abs() <= half_extents.x
                    && local.y.abs() <= half_extents.y
                    && local.z.abs() <= half_extents.z
            }
        }
    }
}

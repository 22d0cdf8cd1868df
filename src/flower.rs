//! A single flower holding nectar.
//!
//! The flower owns two collision volumes: a solid one for the petals and a
//! sensor in the middle that marks where agents feed. Both volumes and the
//! material colour follow the flower's state:
//!
//! - `Full`: nectar left, volumes enabled, full colour
//! - `Empty`: no nectar, volumes disabled, empty colour
//!
//! `feed` is the only way to empty a flower and `reset` the only way to fill it.

use anyhow::Context;
use cgmath::Vector3;

use crate::data_structures::{
    instance::Instance,
    material::{Color, Material},
    scene_graph::SceneNode,
    volume::Volume,
};

/// Nectar of a freshly reset flower.
pub const FULL_NECTAR: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct FlowerConfig {
    /// The colour when the flower is full.
    pub full_color: Color,
    /// The colour when the flower is empty.
    pub empty_color: Color,
    /// Child holding the solid petal collider when binding from a prefab.
    pub solid_name: String,
    /// Child holding the nectar sensor when binding from a prefab.
    pub sensor_name: String,
}

impl FlowerConfig {
    pub fn with_colors(mut self, full_color: Color, empty_color: Color) -> Self {
        self.full_color = full_color;
        self.empty_color = empty_color;
        self
    }

    pub fn with_child_names(
        mut self,
        solid_name: impl Into<String>,
        sensor_name: impl Into<String>,
    ) -> Self {
        self.solid_name = solid_name.into();
        self.sensor_name = sensor_name.into();
        self
    }
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            full_color: Color::rgb(1.0, 0.0, 0.3),
            empty_color: Color::rgb(0.5, 0.0, 1.0),
            solid_name: "FlowerCollider".to_string(),
            sensor_name: "FlowerNectarCollider".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowerState {
    Full,
    Empty,
}

#[derive(Clone, Debug)]
pub struct Flower {
    config: FlowerConfig,
    transform: Instance,
    solid: Volume,
    sensor: Volume,
    material: Material,
    nectar_amount: f32,
}

impl Flower {
    /// Creates a full flower from its volumes and material.
    pub fn new(solid: Volume, sensor: Volume, material: Material, config: FlowerConfig) -> Self {
        let mut flower = Self {
            config,
            transform: Instance::new(),
            solid,
            sensor,
            material,
            nectar_amount: 0.0,
        };
        flower.set_transform(Instance::new());
        flower.reset();
        flower
    }

    /**
     * Binds a flower from a prefab hierarchy.
     *
     * The root's local transform places the flower, the root must carry the
     * material, and the children named in `config` must carry colliders.
     */
    pub fn from_scene(mut node: SceneNode, config: FlowerConfig) -> anyhow::Result<Self> {
        let transform = node.local.clone();
        let material = node
            .take_material()
            .with_context(|| format!("Flower {} has no material", node.name))?;
        let solid = Self::bind_volume(&mut node, &config.solid_name, &transform)?;
        let sensor = Self::bind_volume(&mut node, &config.sensor_name, &transform)?;

        let mut flower = Self::new(solid, sensor, material, config);
        flower.set_transform(transform);
        log::debug!("bound flower {} at {:?}", node.name, flower.center_position());
        Ok(flower)
    }

    fn bind_volume(node: &mut SceneNode, name: &str, parent: &Instance) -> anyhow::Result<Volume> {
        let child = node
            .take_child(name)
            .with_context(|| format!("Flower {} has no child named {}", node.name, name))?;
        child
            .into_volume(parent)
            .with_context(|| format!("Child {} of flower {} has no collider", name, node.name))
    }

    /**
     * Attempts to remove nectar from the flower.
     *
     * Returns the amount actually taken, which never exceeds what was left.
     * Negative or NaN amounts take nothing.
     */
    pub fn feed(&mut self, amount: f32) -> f32 {
        if !(amount >= 0.0) {
            log::warn!("You tried to feed {} nectar, which takes nothing.", amount);
        }
        // `max` maps NaN to zero as well
        let taken = amount.max(0.0).min(self.nectar_amount);
        self.nectar_amount -= taken;

        if self.nectar_amount <= 0.0 {
            self.nectar_amount = 0.0;
            // only the full -> empty transition toggles anything
            if self.sensor.is_enabled() || self.solid.is_enabled() {
                self.solid.set_enabled(false);
                self.sensor.set_enabled(false);
                self.material.set_base_color(self.config.empty_color);
                log::debug!("flower at {:?} is empty", self.center_position());
            }
        }

        taken
    }

    /// Refills the nectar and re-enables both volumes.
    pub fn reset(&mut self) {
        self.nectar_amount = FULL_NECTAR;
        self.solid.set_enabled(true);
        self.sensor.set_enabled(true);
        self.material.set_base_color(self.config.full_color);
    }

    pub fn nectar_amount(&self) -> f32 {
        self.nectar_amount
    }

    pub fn has_nectar(&self) -> bool {
        self.nectar_amount > 0.0
    }

    pub fn state(&self) -> FlowerState {
        if self.has_nectar() {
            FlowerState::Full
        } else {
            FlowerState::Empty
        }
    }

    /// A vector pointing straight out of the flower.
    pub fn up_vector(&self) -> Vector3<f32> {
        self.sensor.up()
    }

    /// The center position of the nectar sensor.
    pub fn center_position(&self) -> Vector3<f32> {
        self.sensor.position()
    }

    /// Whether a point (e.g. an agent's beak tip) touches the nectar.
    pub fn can_feed_at(&self, point: Vector3<f32>) -> bool {
        self.sensor.contains(point)
    }

    pub fn transform(&self) -> &Instance {
        &self.transform
    }

    /// Moves the flower; both volumes follow.
    pub fn set_transform(&mut self, transform: Instance) {
        self.solid.update_world_transform(&transform);
        self.sensor.update_world_transform(&transform);
        self.transform = transform;
    }

    pub fn solid(&self) -> &Volume {
        &self.solid
    }

    pub fn sensor(&self) -> &Volume {
        &self.sensor
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Mutable access for the host renderer to collect uploads.
    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn config(&self) -> &FlowerConfig {
        &self.config
    }
}

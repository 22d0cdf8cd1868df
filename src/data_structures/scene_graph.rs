//! Scene prefabs and hierarchical scene organization.
//!
//! A `SceneNode` describes how an object is assembled before it becomes a
//! runtime component: a named hierarchy of local transforms where nodes can
//! carry a collider description and the root can carry a material. Runtime
//! types take the pieces they need out of the hierarchy exactly once.

use crate::data_structures::{
    instance::Instance,
    material::Material,
    volume::{Shape, Volume, VolumeKind},
};

/// A collider attached to a prefab node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColliderDesc {
    pub kind: VolumeKind,
    pub shape: Shape,
}

#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    pub name: String,
    pub local: Instance,
    collider: Option<ColliderDesc>,
    material: Option<Material>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_local_transform(mut self, local: Instance) -> Self {
        self.local = local;
        self
    }

    pub fn with_collider(mut self, kind: VolumeKind, shape: Shape) -> Self {
        self.collider = Some(ColliderDesc { kind, shape });
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn get_children(&self) -> &Vec<SceneNode> {
        &self.children
    }

    /// Direct child with the given name. Only the first match counts.
    pub fn find_child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /**
     * Removes and returns the direct child with the given name.
     *
     * When several children share the name, the first one is taken and the
     * duplicates stay in place.
     */
    pub fn take_child(&mut self, name: &str) -> Option<SceneNode> {
        let idx = self.children.iter().position(|child| child.name == name)?;
        if self.children[idx + 1..].iter().any(|c| c.name == name) {
            log::warn!(
                "Node {} has more than one child named {}, using the first one.",
                self.name,
                name
            );
        }
        Some(self.children.remove(idx))
    }

    pub fn take_material(&mut self) -> Option<Material> {
        self.material.take()
    }

    /**
     * Turns this node's collider into a runtime volume placed under `parent`.
     *
     * The node's local transform becomes the volume's local transform.
     */
    pub fn into_volume(self, parent: &Instance) -> Option<Volume> {
        let ColliderDesc { kind, shape } = self.collider?;
        let mut volume = Volume::new(self.name, kind, shape, self.local);
        volume.update_world_transform(parent);
        Some(volume)
    }

    /// World transforms of this node and all descendants, depth first.
    pub fn world_transforms(&self, parent: &Instance) -> Vec<(String, Instance)> {
        let world = parent * &self.local;
        let mut out = vec![(self.name.clone(), world.clone())];
        for child in &self.children {
            out.extend(child.world_transforms(&world));
        }
        out
    }
}

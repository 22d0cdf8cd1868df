//! Engine data structures: transforms, volumes, materials and scene prefabs.
//!
//! - `instance` holds position, rotation and scale of scene objects
//! - `volume` contains collidable regions that can be toggled on and off
//! - `material` contains display colours and their raw upload form
//! - `scene_graph` describes objects as named hierarchies before they are bound

pub mod instance;
pub mod material;
pub mod scene_graph;
pub mod volume;

//! nectar
//!
//! A small resource-node library for agent simulations. A [`Flower`] holds a
//! depletable amount of nectar, exposes where and from which direction an
//! agent should approach it, and switches its collision volumes and colour
//! as it is emptied and refilled. Rendering and physics stay with the host;
//! this crate only owns the state the host reads back each frame.
//!
//! High-level modules
//! - `data_structures`: transforms, collision volumes, materials and scene prefabs
//! - `flower`: the flower resource node and its configuration
//! - `patch`: a set of flowers sharing one area
//!

pub mod data_structures;
pub mod flower;
pub mod patch;

pub use flower::{Flower, FlowerConfig, FlowerState};
pub use patch::FlowerPatch;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

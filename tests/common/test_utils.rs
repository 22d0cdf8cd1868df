#![allow(dead_code)]

use nectar::{
    Flower, FlowerConfig, Vector3,
    data_structures::{
        instance::Instance,
        material::{Color, Material},
        scene_graph::SceneNode,
        volume::{Shape, VolumeKind},
    },
};

pub(crate) const EPSILON: f32 = 1e-5;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub(crate) fn assert_vec_close(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
    assert_close(actual.z, expected.z);
}

/// Root `Flower` with petals around the origin and a small nectar sensor 0.2 above.
pub(crate) fn flower_prefab(position: Vector3<f32>) -> SceneNode {
    SceneNode::new("Flower")
        .with_local_transform(Instance::from(position))
        .with_material(Material::new("FlowerMaterial", Color::WHITE))
        .with_child(
            SceneNode::new("FlowerCollider")
                .with_collider(VolumeKind::Solid, Shape::Sphere { radius: 0.5 }),
        )
        .with_child(
            SceneNode::new("FlowerNectarCollider")
                .with_local_transform(Instance::from(Vector3::new(0.0, 0.2, 0.0)))
                .with_collider(VolumeKind::Sensor, Shape::Sphere { radius: 0.1 }),
        )
}

pub(crate) fn mk_flower(position: Vector3<f32>) -> Flower {
    Flower::from_scene(flower_prefab(position), FlowerConfig::default())
        .expect("the test prefab binds")
}

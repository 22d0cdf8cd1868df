use nectar::{
    Deg, Quaternion, Rotation3, Vector3,
    data_structures::{
        instance::Instance,
        volume::{Shape, Volume},
    },
};

use crate::common::test_utils::{assert_vec_close, init_logger};

mod common;

#[test]
fn should_grow_sphere_with_parent_scale() {
    init_logger();
    let mut sensor = Volume::sensor("nectar", Shape::Sphere { radius: 0.1 }, Instance::new());
    assert!(!sensor.contains(Vector3::new(0.0, 0.15, 0.0)));

    sensor.update_world_transform(&Instance::new().with_scale(Vector3::new(1.0, 2.0, 1.0)));

    assert!(sensor.contains(Vector3::new(0.0, 0.15, 0.0)));
}

#[test]
fn should_test_box_in_its_own_frame() {
    let local = Instance::from(Vector3::new(0.0, 1.0, 0.0))
        .with_rotation(Quaternion::from_angle_z(Deg(90.0)));
    let petals = Volume::solid(
        "petals",
        Shape::Box {
            half_extents: Vector3::new(1.0, 0.1, 0.1),
        },
        local,
    );

    // the long local x axis now points along world y
    assert!(petals.contains(Vector3::new(0.0, 1.9, 0.0)));
    assert!(!petals.contains(Vector3::new(0.9, 1.0, 0.0)));
}

#[test]
fn should_contain_nothing_when_disabled() {
    let mut sensor = Volume::sensor("nectar", Shape::Sphere { radius: 1.0 }, Instance::new());
    sensor.set_enabled(false);

    assert!(!sensor.contains(Vector3::new(0.0, 0.0, 0.0)));
}

#[test]
fn should_follow_parent_when_local_changes() {
    let parent = Instance::from(Vector3::new(3.0, 0.0, 0.0));
    let mut sensor = Volume::sensor("nectar", Shape::Sphere { radius: 1.0 }, Instance::new());

    sensor.set_local_transform(Instance::from(Vector3::new(0.0, 1.0, 0.0)), &parent);

    assert_vec_close(sensor.position(), Vector3::new(3.0, 1.0, 0.0));
    assert_vec_close(sensor.local_transform().position, Vector3::new(0.0, 1.0, 0.0));
    assert_vec_close(sensor.world_transform().position, Vector3::new(3.0, 1.0, 0.0));
}

#[test]
fn should_map_points_back_into_local_frame() {
    let instance = Instance::from(Vector3::new(1.0, 0.0, 0.0))
        .with_rotation(Quaternion::from_angle_y(Deg(90.0)))
        .with_scale(Vector3::new(2.0, 2.0, 2.0));

    let local = instance.inverse_transform_point(Vector3::new(1.0, 0.0, -2.0));

    assert_vec_close(local, Vector3::new(1.0, 0.0, 0.0));
    assert_vec_close(instance.forward(), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn should_not_stretch_flattened_box_along_collapsed_axis() {
    init_logger();
    let mut petals = Volume::solid(
        "petals",
        Shape::Box {
            half_extents: Vector3::new(0.5, 0.5, 0.5),
        },
        Instance::new(),
    );
    petals.update_world_transform(&Instance::new().with_scale(Vector3::new(1.0, 0.0, 1.0)));

    assert!(!petals.contains(Vector3::new(0.0, 100.0, 0.0)));
    assert!(!petals.contains(Vector3::new(0.2, 0.01, 0.0)));
    // points on the flattened plane are still inside
    assert!(petals.contains(Vector3::new(0.2, 0.0, -0.3)));
}

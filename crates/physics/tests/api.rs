use physics::{Motion, PhysicsWorld, Vec3};

#[test]
fn spawn_updates_len() {
    let mut world = PhysicsWorld::new();
    assert!(world.is_empty());
    let a = world.add_dynamic_sphere(Vec3::new(0.0, 0.0, 0.0), 0.0, 0.5);
    let b = world.add_static_sphere(Vec3::new(5.0, 0.0, 0.0), 180.0, 0.5);
    assert_eq!(world.len(), 2);
    assert_eq!(world.handles().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(world.body(b).unwrap().motion, Motion::Static);
}

#[test]
fn velocity_moves_dynamic_body() {
    let mut world = PhysicsWorld::new();
    let a = world.add_dynamic_sphere(Vec3::new(0.0, 0.0, 0.0), 0.0, 0.5);
    world.body_mut(a).unwrap().vel = Vec3::new(1.0, 0.0, 0.0);
    world.step(0.1).unwrap();
    assert!(world.position(a).unwrap().x > 0.0);
}

#[test]
fn set_pose_clears_motion() {
    let mut world = PhysicsWorld::new();
    let a = world.add_dynamic_sphere(Vec3::ZERO, 0.0, 0.5);
    {
        let body = world.body_mut(a).unwrap();
        body.vel = Vec3::new(3.0, 0.0, 0.0);
        body.angular_vel = 45.0;
    }
    world.set_pose(a, Vec3::new(1.0, 0.5, 2.0), 450.0).unwrap();
    let body = world.body(a).unwrap();
    assert_eq!(body.vel, Vec3::ZERO);
    assert_eq!(body.angular_vel, 0.0);
    assert!((body.yaw - 90.0).abs() < 1e-4);
    assert_eq!(body.pos, Vec3::new(1.0, 0.5, 2.0));
}

#[test]
fn rotate_yaw_turns_forward() {
    let mut world = PhysicsWorld::new();
    let a = world.add_kinematic_sphere(Vec3::ZERO, 0.0, 0.5);
    world.rotate_yaw(a, 90.0).unwrap();
    let fwd = world.forward(a).unwrap();
    assert!((fwd.x - 1.0).abs() < 1e-5 && fwd.z.abs() < 1e-5, "{fwd:?}");
}

#[test]
fn stale_handle_is_an_error() {
    let mut world = PhysicsWorld::new();
    let a = world.add_dynamic_sphere(Vec3::ZERO, 0.0, 0.5);
    world.despawn(a);
    assert!(world.move_position(a, Vec3::UP).is_err());
    assert!(world.rotate_yaw(a, 10.0).is_err());
}

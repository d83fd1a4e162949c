use physics::{PhysicsWorld, Vec3};

#[test]
fn contact_fires_once_while_touching() {
    let mut world = PhysicsWorld::new();
    let a = world.add_kinematic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
    let b = world.add_static_sphere(Vec3::new(0.9, 0.5, 0.0), 0.0, 0.5);

    let first = world.step(0.02).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].a, a);
    assert_eq!(first[0].b, b);

    // Neither body can be pushed, so they stay overlapped.
    for _ in 0..5 {
        assert!(world.step(0.02).unwrap().is_empty());
    }
}

#[test]
fn contact_fires_again_after_separation() {
    let mut world = PhysicsWorld::new();
    let a = world.add_kinematic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
    world.add_static_sphere(Vec3::new(0.9, 0.5, 0.0), 0.0, 0.5);

    assert_eq!(world.step(0.02).unwrap().len(), 1);
    world.move_position(a, Vec3::new(-5.0, 0.5, 0.0)).unwrap();
    assert!(world.step(0.02).unwrap().is_empty());
    world.move_position(a, Vec3::new(0.0, 0.5, 0.0)).unwrap();
    assert_eq!(world.step(0.02).unwrap().len(), 1);
}

#[test]
fn dynamic_body_is_pushed_out_of_static_body() {
    let mut world = PhysicsWorld::new();
    let a = world.add_dynamic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
    let b = world.add_static_sphere(Vec3::new(0.6, 0.5, 0.0), 0.0, 0.5);

    let events = world.step(0.02).unwrap();
    assert_eq!(events[0].other(b), Some(a));

    let pa = world.position(a).unwrap();
    let pb = world.position(b).unwrap();
    assert!(pa.x < 0.0, "dynamic body should be pushed back, got {pa:?}");
    assert_eq!(pb, Vec3::new(0.6, 0.5, 0.0));
}

#[test]
fn despawn_forgets_contacts() {
    let mut world = PhysicsWorld::new();
    let a = world.add_kinematic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
    let b = world.add_kinematic_sphere(Vec3::new(0.5, 0.5, 0.0), 0.0, 0.5);
    assert_eq!(world.step(0.02).unwrap().len(), 1);

    world.despawn(b);
    let c = world.add_kinematic_sphere(Vec3::new(0.5, 0.5, 0.0), 0.0, 0.5);
    let events = world.step(0.02).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].other(a), Some(c));
}

#[test]
fn forget_contacts_refires_existing_overlaps() {
    let mut world = PhysicsWorld::new();
    world.add_kinematic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
    world.add_static_sphere(Vec3::new(0.9, 0.5, 0.0), 0.0, 0.5);

    assert_eq!(world.step(0.02).unwrap().len(), 1);
    assert!(world.step(0.02).unwrap().is_empty());
    world.forget_contacts();
    assert_eq!(world.step(0.02).unwrap().len(), 1);
}

use foraging::{Area, AreaConfig, BodyConfig, Params};
use physics::{PhysicsWorld, Vec3};

fn arena(food_count: usize) -> (PhysicsWorld, Area, fastrand::Rng) {
    let mut world = PhysicsWorld::new();
    let config = AreaConfig {
        food_count,
        ..AreaConfig::default()
    };
    let mut area = Area::new(&mut world, &config, &BodyConfig::default());
    let mut rng = fastrand::Rng::with_seed(21);
    area.reset(&mut world, &mut rng, &Params::default(), 0.0).unwrap();
    (world, area, rng)
}

#[test]
fn remove_food_counts_down_by_one() {
    let (mut world, mut area, _) = arena(3);
    let food: Vec<_> = area.food_bodies().collect();

    assert!(area.remove_food(&mut world, food[1]));
    assert_eq!(area.remaining_food(), 2);
    assert!(!world.contains(food[1]));

    // Second removal of the same entity is absorbed.
    assert!(!area.remove_food(&mut world, food[1]));
    assert_eq!(area.remaining_food(), 2);

    // Bodies the arena does not track are left alone.
    assert!(!area.remove_food(&mut world, area.dependent()));
    assert!(world.contains(area.dependent()));
    assert_eq!(area.remaining_food(), 2);
}

#[test]
fn repeated_resets_leave_one_live_batch() {
    let (mut world, mut area, mut rng) = arena(4);
    let mut retired = Vec::new();
    for _ in 0..3 {
        retired.extend(area.food_bodies());
        area.reset(&mut world, &mut rng, &Params::default(), 0.0).unwrap();
        assert_eq!(area.remaining_food(), 4);
        assert!(area.food_bodies().all(|h| world.contains(h)));
    }
    assert!(retired.iter().all(|&h| !world.contains(h)));
    assert_eq!(world.len(), area.agent_count() + 1 + 4);
}

#[test]
fn reset_survives_food_removed_mid_episode() {
    let (mut world, mut area, mut rng) = arena(2);
    let eaten = area.food_bodies().next().unwrap();
    area.remove_food(&mut world, eaten);

    area.reset(&mut world, &mut rng, &Params::default(), 5.0).unwrap();
    assert_eq!(area.remaining_food(), 2);
    assert!(!world.contains(eaten));
}

#[test]
fn reset_places_bodies_at_rest_in_their_sectors() {
    let (mut world, mut area, mut rng) = arena(4);
    world.body_mut(area.agent()).unwrap().vel = Vec3::new(3.0, 0.0, 0.0);
    area.reset(&mut world, &mut rng, &Params::default(), 0.0).unwrap();

    let spawn_center = area.center() + Vec3::UP * 0.5;
    let agent = world.body(area.agent()).unwrap();
    assert_eq!(agent.vel, Vec3::ZERO);
    assert!(agent.pos.distance(spawn_center) <= 9.0 + 1e-4);

    let dependent = world.body(area.dependent()).unwrap();
    let d = dependent.pos.distance(spawn_center);
    assert!((4.0 - 1e-4..=9.0 + 1e-4).contains(&d), "dependent at {d}");
    assert!((dependent.yaw - 180.0).abs() < 1e-4);

    for food in area.food_bodies() {
        let r = world.position(food).unwrap().distance(spawn_center);
        assert!((2.0 - 1e-4..=13.0 + 1e-4).contains(&r), "food at {r}");
    }
}

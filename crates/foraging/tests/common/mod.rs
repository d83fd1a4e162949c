#![allow(dead_code)]

use foraging::{EnvConfig, ForagingEnv, Params};
use physics::{BodyHandle, Vec3};

/// Inside the arena bound but clear of the dependent sector and of
/// [`FOOD_SPOTS`].
pub const PARKING: Vec3 = Vec3::new(-12.0, 0.5, 6.0);

/// Fixed, well separated spots for food, all on the far side of the arena.
pub const FOOD_SPOTS: [Vec3; 3] = [
    Vec3::new(-5.0, 0.5, -5.0),
    Vec3::new(0.0, 0.5, -8.0),
    Vec3::new(5.0, 0.5, -5.0),
];

/// An environment with motionless food at [`FOOD_SPOTS`] and the agent parked
/// out of reach.
pub fn still_env(
    food_count: usize,
    max_episode_steps: u32,
    feed_radius: Option<f32>,
    tweak: impl FnOnce(&mut EnvConfig),
) -> ForagingEnv {
    let mut config = EnvConfig::default();
    config.seed = 7;
    config.area.food_count = food_count;
    config.agent.max_episode_steps = max_episode_steps;
    tweak(&mut config);

    let params = Params {
        food_speed: Some(0.0),
        feed_radius,
    };
    let mut env = ForagingEnv::new(config, params).unwrap();
    arrange(&mut env);
    env
}

/// Park the agent and move food onto [`FOOD_SPOTS`].
pub fn arrange(env: &mut ForagingEnv) {
    let agent = env.area().agent();
    let foods = food(env);
    let world = env.world_mut();
    world.set_pose(agent, PARKING, 0.0).unwrap();
    for (body, spot) in foods.into_iter().zip(FOOD_SPOTS) {
        world.set_pose(body, spot, 0.0).unwrap();
    }
}

pub fn food(env: &ForagingEnv) -> Vec<BodyHandle> {
    env.area().food_bodies().collect()
}

/// Put the agent `offset` away from `target`, at rest.
pub fn place_agent_near(env: &mut ForagingEnv, target: BodyHandle, offset: f32) {
    let agent = env.area().agent();
    let pos = env.world().position(target).unwrap();
    env.world_mut()
        .set_pose(agent, pos + Vec3::new(offset, 0.0, 0.0), 0.0)
        .unwrap();
}

pub fn park(env: &mut ForagingEnv) {
    let agent = env.area().agent();
    env.world_mut().set_pose(agent, PARKING, 0.0).unwrap();
}

pub mod components;
pub mod config;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one fixed tick of the live simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    spawner: &mut PowerUpSpawner,
    reverts: &mut RevertQueue,
) {
    // 1. Move ball by its per-tick velocity
    move_ball(world);

    // 2. Resolve ball vs paddles and walls
    check_collisions(world, config, events);

    // 3. Score if the ball left the field (re-serve or freeze on a win)
    check_scoring(world, config, score, events);

    // 4. Power-up spawn countdown
    powerup_spawn(world, spawner, time, config, rng);

    // 5. Ball vs power-up token
    powerup_check_hit(world, spawner, reverts, time, config, rng, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32, height: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y, height),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

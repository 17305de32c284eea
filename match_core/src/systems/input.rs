use hecs::World;

use crate::components::{Paddle, Side};
use crate::config::Config;
use crate::resources::{Key, PressedKeys};

/// Apply held keys to the paddles. Runs at render cadence with the frame's
/// dt, independent of the physics tick. Keys are read independently, so
/// both paddles (and opposing keys) can move in the same frame.
pub fn apply_paddle_input(world: &mut World, keys: &PressedKeys, config: &Config, dt: f32) {
    let step = config.paddle_speed * dt;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = match paddle.side {
            Side::Left => (Key::LeftUp, Key::LeftDown),
            Side::Right => (Key::RightUp, Key::RightDown),
        };
        if keys.is_held(up) {
            paddle.move_by(step);
        }
        if keys.is_held(down) {
            paddle.move_by(-step);
        }
    }
}

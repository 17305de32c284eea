use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, Score};

/// Reposition the ball at field center with the given velocity and recenter
/// both paddles vertically.
pub fn serve(world: &mut World, config: &Config, vel: Vec2) {
    let center = config.field_center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = center;
        ball.vel = vel;
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.field_height / 2.0;
    }
}

/// Score once the ball's trailing edge has fully crossed a side boundary.
/// The same rule applies to both sides. A non-winning score re-serves
/// immediately; a winning score parks the ball dead at center and leaves
/// the phase change to the match driver.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let ball_half = config.ball_size / 2.0;
    let exited = {
        let mut query = world.query::<&Ball>();
        query.iter().next().and_then(|(_e, ball)| {
            if ball.pos.x + ball_half < 0.0 {
                Some(Side::Right)
            } else if ball.pos.x - ball_half > config.field_width {
                Some(Side::Left)
            } else {
                None
            }
        })
    };
    let scorer = match exited {
        Some(side) => side,
        None => return,
    };

    match scorer {
        Side::Left => {
            score.increment_left();
            events.left_scored = true;
        }
        Side::Right => {
            score.increment_right();
            events.right_scored = true;
        }
    }
    log::debug!(
        "point to {:?}, score {}-{}",
        scorer,
        score.left,
        score.right
    );

    if score.has_winner(config.win_score).is_some() {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = config.field_center();
            ball.vel = Vec2::ZERO;
        }
    } else {
        serve(world, config, Vec2::new(config.serve_speed, 0.0));
    }
}

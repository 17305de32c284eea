use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Resolve one paddle/ball contact. Returns whether a hit fired this call.
///
/// The test is rect-vs-rect overlap on half extents. A hit only fires while
/// the ball is moving toward that paddle's side, and resolution pushes the
/// ball out to the struck face, so a pair left overlapping cannot re-negate
/// on the next tick.
pub fn resolve_paddle_hit(paddle: &Paddle, ball: &mut Ball, config: &Config) -> bool {
    let paddle_x = config.paddle_x(paddle.side);
    let half_w = config.paddle_width / 2.0;
    let half_h = paddle.height / 2.0;
    let ball_half = config.ball_size / 2.0;

    let dx = (ball.pos.x - paddle_x).abs();
    let dy = (ball.pos.y - paddle.y).abs();
    if dx >= half_w + ball_half || dy >= half_h + ball_half {
        return false;
    }

    let toward = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !toward {
        return false;
    }

    ball.vel.x = -ball.vel.x * config.ball_speed_up;
    // Deflection offset: contact above the paddle center sends the ball up,
    // below sends it down, scaled by how far off-center it struck.
    ball.vel.y += (ball.pos.y - paddle.y) / half_h;

    ball.pos.x = match paddle.side {
        Side::Left => paddle_x + half_w + ball_half,
        Side::Right => paddle_x - half_w - ball_half,
    };
    true
}

/// Ball vs paddles, then top/bottom walls.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };
    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return,
    };

    let paddles: Vec<Paddle> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, paddle)| *paddle).collect()
    };
    for paddle in &paddles {
        if resolve_paddle_hit(paddle, &mut ball, config) {
            events.ball_hit_paddle = true;
        }
    }

    // Wall reflection only flips while the ball moves into the wall, so two
    // consecutive frames touching the same wall cannot double-flip.
    let ball_half = config.ball_size / 2.0;
    if ball.pos.y + ball_half >= config.field_height && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = config.field_height - ball_half;
        events.ball_hit_wall = true;
    } else if ball.pos.y - ball_half <= 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball_half;
        events.ball_hit_wall = true;
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

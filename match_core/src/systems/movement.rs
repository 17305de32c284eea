use hecs::World;

use crate::components::Ball;

/// Advance the ball by its per-tick velocity. Pure translation; walls,
/// paddles and scoring are resolved by the systems that run after this.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_move_is_pure_translation() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(450.0, 300.0), Vec2::new(8.0, -2.5));

        move_ball(&mut world);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(458.0, 297.5));
            assert_eq!(ball.vel, Vec2::new(8.0, -2.5), "velocity untouched");
        }
    }

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut world = World::new();
        let start = Vec2::new(100.0, 100.0);
        let vel = Vec2::new(3.0, 4.0);
        create_ball(&mut world, start, vel);

        for _ in 0..10 {
            move_ball(&mut world);
        }

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, start + vel * 10.0);
        }
    }
}

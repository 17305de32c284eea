use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PowerUp, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, PowerUpSpawner, RevertQueue, Time};

/// Count down to the next token spawn and place it inside the inner 4/6
/// band of the field. The countdown only runs while no token is on the
/// field; consumption re-arms it.
pub fn powerup_spawn(
    world: &mut World,
    spawner: &mut PowerUpSpawner,
    time: &Time,
    config: &Config,
    rng: &mut GameRng,
) {
    let token_on_field = {
        let mut query = world.query::<&PowerUp>();
        query.iter().next().is_some()
    };
    if token_on_field {
        return;
    }

    spawner.t_until -= time.dt;
    if spawner.t_until > 0.0 {
        return;
    }

    let pos = Vec2::new(
        rng.gen_range(config.field_width / 6.0, config.field_width * 5.0 / 6.0),
        rng.gen_range(config.field_height / 6.0, config.field_height * 5.0 / 6.0),
    );
    world.spawn((PowerUp { pos },));
    log::debug!("power-up spawned at {:?}", pos);
}

/// Ball contact with the token lengthens one paddle for a fixed window.
/// The beneficiary is inferred from the ball's horizontal direction: a
/// leftward ball was last returned by the right paddle, so the right
/// paddle gets the buff; otherwise the left one does.
pub fn powerup_check_hit(
    world: &mut World,
    spawner: &mut PowerUpSpawner,
    reverts: &mut RevertQueue,
    time: &Time,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let contact = {
        let mut balls = world.query::<&Ball>();
        let ball = match balls.iter().next() {
            Some((_e, ball)) => *ball,
            None => return,
        };
        // A parked ball (after a game over) cannot take the token
        if ball.vel == Vec2::ZERO {
            return;
        }

        let half = (config.powerup_size + config.ball_size) / 2.0;
        let mut tokens = world.query::<&PowerUp>();
        tokens.iter().next().and_then(|(entity, token)| {
            let hit = (ball.pos.x - token.pos.x).abs() < half
                && (ball.pos.y - token.pos.y).abs() < half;
            hit.then_some((entity, ball.vel.x))
        })
    };
    let (token_entity, ball_vx) = match contact {
        Some(c) => c,
        None => return,
    };

    let beneficiary = if ball_vx < 0.0 { Side::Right } else { Side::Left };

    // One active lengthening per side: a repeat hit only pushes the revert
    // deadline out, it never compounds the height.
    if !reverts.is_pending(beneficiary) {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == beneficiary {
                paddle.height *= config.length_factor;
            }
        }
    }
    reverts.schedule(
        beneficiary,
        time.now + config.effect_duration,
        config.length_factor,
    );

    let _ = world.despawn(token_entity);
    spawner.rearm(rng, config.spawn_delay_min, config.spawn_delay_max);
    events.powerup_taken = Some(beneficiary);
    log::debug!(
        "power-up taken, {:?} paddle lengthened x{}",
        beneficiary,
        config.length_factor
    );
}

/// Fire due height reverts. Runs every tick in every phase; neither a game
/// over nor a restart cancels a pending revert.
pub fn powerup_revert(world: &mut World, reverts: &mut RevertQueue, time: &Time) {
    for task in reverts.take_due(time.now) {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == task.side {
                paddle.height /= task.factor;
                log::debug!("{:?} paddle height reverted", task.side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, GameRng, PowerUpSpawner, RevertQueue, Events) {
        let config = Config::new();
        let mut rng = GameRng::new(42);
        let spawner =
            PowerUpSpawner::armed(&mut rng, config.spawn_delay_min, config.spawn_delay_max);
        (
            World::new(),
            config,
            rng,
            spawner,
            RevertQueue::new(),
            Events::new(),
        )
    }

    fn token_pos(world: &World) -> Option<Vec2> {
        let mut query = world.query::<&PowerUp>();
        query.iter().next().map(|(_e, token)| token.pos)
    }

    fn paddle_height(world: &World, side: Side) -> f32 {
        let mut query = world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.height)
            .unwrap()
    }

    fn spawn_token(world: &mut World, pos: Vec2) -> hecs::Entity {
        world.spawn((PowerUp { pos },))
    }

    #[test]
    fn test_spawner_places_token_inside_inner_band() {
        let (mut world, config, mut rng, mut spawner, _reverts, _events) = setup();
        let time = Time::default();

        // Drain the countdown; with no token on the field it must spawn
        let ticks = (config.spawn_delay_max / time.dt).ceil() as usize + 1;
        for _ in 0..ticks {
            powerup_spawn(&mut world, &mut spawner, &time, &config, &mut rng);
        }

        let pos = token_pos(&world).expect("token spawned after the delay window");
        assert!(pos.x >= config.field_width / 6.0 && pos.x <= config.field_width * 5.0 / 6.0);
        assert!(pos.y >= config.field_height / 6.0 && pos.y <= config.field_height * 5.0 / 6.0);
    }

    #[test]
    fn test_spawner_idles_while_token_on_field() {
        let (mut world, config, mut rng, mut spawner, _reverts, _events) = setup();
        let time = Time::default();
        spawn_token(&mut world, Vec2::new(450.0, 300.0));

        let before = spawner.t_until;
        for _ in 0..1000 {
            powerup_spawn(&mut world, &mut spawner, &time, &config, &mut rng);
        }

        assert_eq!(spawner.t_until, before, "countdown paused");
        let mut query = world.query::<&PowerUp>();
        assert_eq!(query.iter().count(), 1, "no second token");
    }

    #[test]
    fn test_leftward_ball_lengthens_right_paddle() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let time = Time::default();
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);
        create_paddle(&mut world, Side::Right, 300.0, config.paddle_height);
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(452.0, 301.0), Vec2::new(-8.0, 0.0));

        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        let expected = Params::PADDLE_HEIGHT * config.length_factor;
        assert!((paddle_height(&world, Side::Right) - expected).abs() < 1e-4);
        assert_eq!(paddle_height(&world, Side::Left), Params::PADDLE_HEIGHT);
        assert_eq!(events.powerup_taken, Some(Side::Right));
        assert!(token_pos(&world).is_none(), "token consumed");
        assert!(reverts.is_pending(Side::Right));
    }

    #[test]
    fn test_rightward_ball_lengthens_left_paddle() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let time = Time::default();
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);
        create_paddle(&mut world, Side::Right, 300.0, config.paddle_height);
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(448.0, 300.0), Vec2::new(8.0, 1.0));

        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        assert_eq!(events.powerup_taken, Some(Side::Left));
        assert!(paddle_height(&world, Side::Left) > Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_missed_token_is_untouched() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let time = Time::default();
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(450.0, 400.0), Vec2::new(8.0, 0.0));

        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        assert!(token_pos(&world).is_some());
        assert_eq!(events.powerup_taken, None);
    }

    #[test]
    fn test_revert_restores_original_height() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let mut time = Time::default();
        create_paddle(&mut world, Side::Right, 300.0, config.paddle_height);
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(450.0, 300.0), Vec2::new(-8.0, 0.0));

        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        time.now += config.effect_duration;
        powerup_revert(&mut world, &mut reverts, &time);

        let height = paddle_height(&world, Side::Right);
        assert!(
            (height - Params::PADDLE_HEIGHT).abs() < 1e-3,
            "height back to base, got {height}"
        );
        assert!(!reverts.is_pending(Side::Right));
    }

    #[test]
    fn test_repeat_hit_extends_instead_of_stacking() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let mut time = Time::default();
        create_paddle(&mut world, Side::Right, 300.0, config.paddle_height);
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);

        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(450.0, 300.0), Vec2::new(-8.0, 0.0));
        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        // Second token taken 5 seconds later by the same side
        time.now += 5.0;
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        let once = Params::PADDLE_HEIGHT * config.length_factor;
        assert!(
            (paddle_height(&world, Side::Right) - once).abs() < 1e-4,
            "height multiplied once, not twice"
        );

        // The original deadline passes without firing
        time.now += config.effect_duration - 5.0 + 0.01;
        powerup_revert(&mut world, &mut reverts, &time);
        assert!(
            reverts.is_pending(Side::Right),
            "deadline was pushed out by the second hit"
        );

        // The extended deadline fires and restores the base height
        time.now += 5.0;
        powerup_revert(&mut world, &mut reverts, &time);
        assert!((paddle_height(&world, Side::Right) - Params::PADDLE_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn test_parked_ball_cannot_take_token() {
        let (mut world, config, mut rng, mut spawner, mut reverts, mut events) = setup();
        let time = Time::default();
        create_paddle(&mut world, Side::Left, 300.0, config.paddle_height);
        spawn_token(&mut world, Vec2::new(450.0, 300.0));
        create_ball(&mut world, Vec2::new(450.0, 300.0), Vec2::ZERO);

        powerup_check_hit(
            &mut world,
            &mut spawner,
            &mut reverts,
            &time,
            &config,
            &mut rng,
            &mut events,
        );

        assert!(token_pos(&world).is_some());
        assert_eq!(events.powerup_taken, None);
    }
}

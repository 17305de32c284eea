use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PowerUp, Side};
use crate::config::{Config, ConfigError};
use crate::resources::{
    Events, GameRng, Key, PowerUpSpawner, PressedKeys, RevertQueue, Score, Time,
};
use crate::systems;

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Rounds being played
    Playing,
    /// A side reached the win score; waiting for a restart
    GameOver,
}

/// Read-only view of the match for a polling renderer.
#[derive(Debug, Clone, Copy)]
pub struct MatchSnapshot {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub left_paddle_y: f32,
    pub left_paddle_height: f32,
    pub right_paddle_y: f32,
    pub right_paddle_height: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub powerup_pos: Option<Vec2>,
    pub over: bool,
}

/// The match orchestrator. Owns the world and every resource, and is driven
/// by the host at two cadences: `apply_input` every rendered frame and
/// `step` at the fixed physics rate. Single-threaded, never re-entered.
pub struct MatchState {
    world: World,
    time: Time,
    config: Config,
    score: Score,
    events: Events,
    keys: PressedKeys,
    rng: GameRng,
    spawner: PowerUpSpawner,
    reverts: RevertQueue,
    phase: MatchPhase,
}

impl MatchState {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let center_y = config.field_height / 2.0;
        crate::create_paddle(&mut world, Side::Left, center_y, config.paddle_height);
        crate::create_paddle(&mut world, Side::Right, center_y, config.paddle_height);
        crate::create_ball(
            &mut world,
            config.field_center(),
            Vec2::new(config.serve_speed, 0.0),
        );

        let mut rng = GameRng::new(seed);
        let spawner =
            PowerUpSpawner::armed(&mut rng, config.spawn_delay_min, config.spawn_delay_max);

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            keys: PressedKeys::new(),
            rng,
            spawner,
            reverts: RevertQueue::new(),
            phase: MatchPhase::Playing,
        })
    }

    /// Key-down from the host. Unrecognized symbols are ignored.
    pub fn on_key_down(&mut self, symbol: &str) {
        if let Some(key) = Key::from_symbol(symbol) {
            self.keys.press(key);
        }
    }

    /// Key-up from the host. Releasing a key that is not held is a no-op.
    pub fn on_key_up(&mut self, symbol: &str) {
        if let Some(key) = Key::from_symbol(symbol) {
            self.keys.release(key);
        }
    }

    /// Render-cadence update: held keys move the paddles. After a game over
    /// the restart key starts the next match first, then input applies as
    /// usual.
    pub fn apply_input(&mut self, dt: f32) {
        if self.phase == MatchPhase::GameOver && self.keys.is_held(Key::Restart) {
            self.restart();
        }
        systems::apply_paddle_input(&mut self.world, &self.keys, &self.config, dt);
    }

    /// Fixed-rate physics tick. While playing: ball movement, collisions,
    /// scoring and the power-up. In every phase: pending height reverts,
    /// which fire on simulated time whenever due.
    pub fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        self.events.clear();

        if self.phase == MatchPhase::Playing {
            crate::step(
                &mut self.world,
                &self.time,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
                &mut self.spawner,
                &mut self.reverts,
            );

            if let Some(winner) = self.score.has_winner(self.config.win_score) {
                self.phase = MatchPhase::GameOver;
                self.events.game_over = Some(winner);
                log::info!(
                    "game over, {:?} wins {}-{}",
                    winner,
                    self.score.left,
                    self.score.right
                );
            }
        }

        systems::powerup_revert(&mut self.world, &mut self.reverts, &self.time);

        self.time.now += dt;
    }

    /// Reposition the ball at center with the given velocity and recenter
    /// both paddles.
    pub fn serve(&mut self, vel: Vec2) {
        systems::serve(&mut self.world, &self.config, vel);
    }

    /// Start the next match: scores to zero, round cues cleared, re-serve.
    /// Pending height reverts survive a restart and still fire when due.
    pub fn restart(&mut self) {
        self.score.reset();
        self.events.clear();
        self.phase = MatchPhase::Playing;
        self.serve(Vec2::new(self.config.serve_speed, 0.0));
        log::info!("match restarted");
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    pub fn scores(&self) -> (u8, u8) {
        (self.score.left, self.score.right)
    }

    /// Events raised by the most recent tick.
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Total simulated time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.time.now
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball().pos
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.ball().vel
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.paddle(side).y
    }

    pub fn paddle_height(&self, side: Side) -> f32 {
        self.paddle(side).height
    }

    pub fn powerup_position(&self) -> Option<Vec2> {
        let mut query = self.world.query::<&PowerUp>();
        query.iter().next().map(|(_e, token)| token.pos)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let ball = self.ball();
        let left = self.paddle(Side::Left);
        let right = self.paddle(Side::Right);
        MatchSnapshot {
            ball_pos: ball.pos,
            ball_vel: ball.vel,
            left_paddle_y: left.y,
            left_paddle_height: left.height,
            right_paddle_y: right.y,
            right_paddle_height: right.height,
            score_left: self.score.left,
            score_right: self.score.right,
            powerup_pos: self.powerup_position(),
            over: self.is_over(),
        }
    }

    fn ball(&self) -> Ball {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.field_center(), Vec2::ZERO))
    }

    fn paddle(&self, side: Side) -> Paddle {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
            .unwrap_or_else(|| {
                Paddle::new(side, self.config.field_height / 2.0, self.config.paddle_height)
            })
    }
}

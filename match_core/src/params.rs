/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // units per second, input cadence
    pub const PADDLE_INSET_X: f32 = 57.5; // paddle center; 50 unit gutter + half width

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const SERVE_SPEED: f32 = 8.0; // units per physics tick, serves go rightward
    pub const BALL_SPEED_UP: f32 = 1.0; // horizontal multiplier per paddle hit, 1.0 = off

    // Score
    pub const WIN_SCORE: u8 = 5; // first to 5 wins

    // Power-up
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const LENGTH_FACTOR: f32 = 1.3;
    pub const EFFECT_DURATION: f32 = 10.0; // seconds until the paddle height reverts
    pub const SPAWN_DELAY_MIN: f32 = 6.0;
    pub const SPAWN_DELAY_MAX: f32 = 12.0;

    // Physics
    pub const TICK_DT: f32 = 1.0 / 60.0;
}

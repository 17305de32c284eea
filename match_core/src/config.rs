use glam::Vec2;
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Configuration problems surfaced at match construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    NonPositiveField { width: f32, height: f32 },
    #[error("paddle dimensions must be positive, got {width}x{height}")]
    NonPositivePaddle { width: f32, height: f32 },
    #[error("ball size must be positive, got {0}")]
    NonPositiveBall(f32),
    #[error("serve speed must be nonzero")]
    ZeroServeSpeed,
    #[error("ball speed multiplier must be positive, got {0}")]
    NonPositiveSpeedUp(f32),
    #[error("length factor must be positive, got {0}")]
    NonPositiveLengthFactor(f32),
    #[error("power-up spawn window is inverted: [{min}, {max}]")]
    InvertedSpawnWindow { min: f32, max: f32 },
}

/// Match configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Input speed in units per second, scaled by the frame dt.
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Serve speed in units per physics tick.
    pub serve_speed: f32,
    /// Horizontal multiplier applied when a paddle returns the ball.
    pub ball_speed_up: f32,
    pub win_score: u8,
    pub powerup_size: f32,
    /// Multiplicative paddle-height boost while a power-up is active.
    pub length_factor: f32,
    /// Seconds until a lengthened paddle reverts.
    pub effect_duration: f32,
    pub spawn_delay_min: f32,
    pub spawn_delay_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            serve_speed: Params::SERVE_SPEED,
            ball_speed_up: Params::BALL_SPEED_UP,
            win_score: Params::WIN_SCORE,
            powerup_size: Params::POWERUP_SIZE,
            length_factor: Params::LENGTH_FACTOR,
            effect_duration: Params::EFFECT_DURATION,
            spawn_delay_min: Params::SPAWN_DELAY_MIN,
            spawn_delay_max: Params::SPAWN_DELAY_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get center X position for a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_INSET_X,
            Side::Right => self.field_width - Params::PADDLE_INSET_X,
        }
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Reject values the simulation cannot run with. The paddle-height and
    /// length-factor checks keep the deflection and revert divisions away
    /// from zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::NonPositiveField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::NonPositivePaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::NonPositiveBall(self.ball_size));
        }
        if self.serve_speed == 0.0 {
            return Err(ConfigError::ZeroServeSpeed);
        }
        if self.ball_speed_up <= 0.0 {
            return Err(ConfigError::NonPositiveSpeedUp(self.ball_speed_up));
        }
        if self.length_factor <= 0.0 {
            return Err(ConfigError::NonPositiveLengthFactor(self.length_factor));
        }
        if self.spawn_delay_min > self.spawn_delay_max {
            return Err(ConfigError::InvertedSpawnWindow {
                min: self.spawn_delay_min,
                max: self.spawn_delay_max,
            });
        }
        Ok(())
    }
}

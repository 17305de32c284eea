use crate::components::Side;
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::TICK_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Seeded random number generator, so a match replays deterministically.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, lo: f32, hi: f32) -> f32 {
        use rand::Rng;
        self.0.gen_range(lo..=hi)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick, for renderer cues
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub powerup_taken: Option<Side>,
    pub game_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Input symbols the match reacts to. Anything else from the host keyboard
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Restart,
}

impl Key {
    /// Map a host key symbol to a match key.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "i" | "I" => Some(Key::RightUp),
            "k" | "K" => Some(Key::RightDown),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::LeftUp => 0,
            Key::LeftDown => 1,
            Key::RightUp => 2,
            Key::RightDown => 3,
            Key::Restart => 4,
        }
    }
}

/// Currently-held keys. Mutated only from the host's key-down/key-up
/// callbacks; read by the input system every rendered frame, so several
/// held keys compose naturally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressedKeys {
    held: [bool; 5],
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    /// Releasing a key that is not held is a no-op.
    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn clear(&mut self) {
        self.held = [false; 5];
    }
}

/// Countdown to the next power-up spawn. The token itself lives in the
/// world; this timer only runs while no token is on the field.
#[derive(Debug, Clone, Copy)]
pub struct PowerUpSpawner {
    pub t_until: f32,
}

impl PowerUpSpawner {
    pub fn armed(rng: &mut GameRng, min: f32, max: f32) -> Self {
        Self {
            t_until: rng.gen_range(min, max),
        }
    }

    pub fn rearm(&mut self, rng: &mut GameRng, min: f32, max: f32) {
        self.t_until = rng.gen_range(min, max);
    }
}

/// A deferred paddle-height revert: divides the side's height by `factor`
/// once `fire_at` passes.
#[derive(Debug, Clone, Copy)]
pub struct HeightRevert {
    pub side: Side,
    pub fire_at: f32,
    pub factor: f32,
}

/// Pending one-shot revert tasks, checked once per fixed tick. At most one
/// task per side: scheduling again replaces the deadline instead of
/// stacking a second revert.
#[derive(Debug, Default)]
pub struct RevertQueue {
    pending: Vec<HeightRevert>,
}

impl RevertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self, side: Side) -> bool {
        self.pending.iter().any(|task| task.side == side)
    }

    pub fn schedule(&mut self, side: Side, fire_at: f32, factor: f32) {
        self.pending.retain(|task| task.side != side);
        self.pending.push(HeightRevert {
            side,
            fire_at,
            factor,
        });
    }

    /// Remove and return every task whose deadline has passed.
    pub fn take_due(&mut self, now: f32) -> Vec<HeightRevert> {
        let mut due = Vec::new();
        self.pending.retain(|task| {
            if task.fire_at <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due
    }
}

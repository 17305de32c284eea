use glam::Vec2;

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component. Width is fixed in config; height is mutable because
/// power-ups scale it.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // center Y
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32, height: f32) -> Self {
        Self { side, y, height }
    }

    /// Vertical move without clamping; paddles can leave the visible field.
    pub fn move_by(&mut self, dy: f32) {
        self.y += dy;
    }
}

/// Ball component - velocity is in units per physics tick
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Power-up token. It is on the field iff the entity exists; consumption
/// despawns it until the spawner places the next one.
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub pos: Vec2,
}

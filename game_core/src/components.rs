use glam::Vec2;

use crate::map::Rect;
use crate::params::Config;

/// Which side of the table a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Left, keyboard controlled
    Opponent, // Right, tracks the ball
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self { side, pos }
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::from_origin_size(self.pos, config.paddle_size())
    }
}

/// Ball component - position is the top-left corner of its bounding box
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at the serve position with the initial velocity
    pub fn reset(&mut self, config: &Config, serve_offset: f32) {
        self.pos = config.ball_start() + Vec2::new(0.0, serve_offset);
        self.vel = config.ball_velocity;
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::from_origin_size(self.pos, config.ball_size())
    }

    pub fn center(&self, config: &Config) -> Vec2 {
        self.pos + Vec2::splat(config.ball_radius)
    }
}

/// Held movement keys for a keyboard-driven paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for a paddle driven by the tracking rule
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracker;

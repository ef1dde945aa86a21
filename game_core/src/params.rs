use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;
    pub const MARGIN: f32 = 50.0; // Score strip at the top

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // px per tick
    pub const TRACKING_SPEED: f32 = 3.0; // Same step up and down

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_X: f32 = -4.0;
    pub const BALL_SPEED_Y: f32 = 4.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.5; // Added to |vx| on every paddle hit
    pub const BALL_PERTURBATION: f32 = 1.0; // vy += uniform(-1.00..=1.00)

    // Serve offset (applied to the ball's start y on every reset)
    pub const SERVE_OFFSET_START: f32 = -50.0;
    pub const SERVE_OFFSET_STEP: f32 = 35.0;
    pub const SERVE_OFFSET_LIMIT: f32 = 150.0;

    // Score
    pub const WIN_SCORE: u8 = 7;

    // Text
    pub const FONT_SIZE: f32 = 30.0;

    // Pacing
    pub const FPS: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub tracking_speed: f32,
    pub ball_radius: f32,
    pub ball_velocity: Vec2,
    pub ball_speed_increment: f32,
    pub ball_perturbation: f32,
    pub serve_offset_start: f32,
    pub serve_offset_step: f32,
    pub serve_offset_limit: f32,
    pub win_score: u8,
    pub font_size: f32,
    /// Bounce off the bottom when the ball's bottom edge reaches the screen
    /// height instead of its top edge.
    pub symmetric_walls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            margin: Params::MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            tracking_speed: Params::TRACKING_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_perturbation: Params::BALL_PERTURBATION,
            serve_offset_start: Params::SERVE_OFFSET_START,
            serve_offset_step: Params::SERVE_OFFSET_STEP,
            serve_offset_limit: Params::SERVE_OFFSET_LIMIT,
            win_score: Params::WIN_SCORE,
            font_size: Params::FONT_SIZE,
            symmetric_walls: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner of a paddle at the start of the game
    pub fn paddle_start(&self, side: crate::Side) -> Vec2 {
        let y = (self.screen_height / 2.0).floor();
        match side {
            crate::Side::Player => Vec2::new(20.0, y),
            crate::Side::Opponent => Vec2::new(self.screen_width - 40.0, y),
        }
    }

    /// Top-left corner of the ball before the serve offset is applied
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_width - 60.0,
            (self.screen_height / 2.0).floor() + 50.0,
        )
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_size(&self) -> Vec2 {
        Vec2::splat(self.ball_radius * 2.0)
    }

    /// Next serve offset: grows by one step and wraps once past the limit
    pub fn next_serve_offset(&self, offset: f32) -> f32 {
        let next = offset + self.serve_offset_step;
        if next > self.serve_offset_limit {
            -self.serve_offset_limit
        } else {
            next
        }
    }
}

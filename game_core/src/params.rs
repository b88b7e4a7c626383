use crate::components::Side;
use glam::Vec2;

/// Fixed match rules
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Frame
    pub const FRAME_WIDTH: f32 = 600.0;
    pub const FRAME_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PAD_SECTIONS: u8 = 6;
    pub const PAD_INIT_SECTION: u8 = 2;
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Paddle centre distance from its screen edge
    pub const PADDLE_X_OFFSET: f32 = Self::PADDLE_WIDTH / 2.0 + 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 14.0; // px per tick
    /// Serve distance from the conceding edge after a miss
    pub const BALL_RESET_X: f32 =
        20.0 + Self::PADDLE_WIDTH + Self::PADDLE_X_OFFSET + Self::BALL_RADIUS;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Loop
    pub const TICK_INTERVAL: f32 = 0.025;
    pub const ROUND_END_PAUSE: f32 = 1.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub frame_width: f32,
    pub frame_height: f32,
    pub pad_sections: u8,
    pub pad_init_section: u8,
    pub paddle_width: f32,
    pub paddle_x_offset: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_reset_x: f32,
    pub win_score: u8,
    pub tick_interval: f32,
    pub round_end_pause: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_width: Params::FRAME_WIDTH,
            frame_height: Params::FRAME_HEIGHT,
            pad_sections: Params::PAD_SECTIONS,
            pad_init_section: Params::PAD_INIT_SECTION,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_x_offset: Params::PADDLE_X_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_reset_x: Params::BALL_RESET_X,
            win_score: Params::WIN_SCORE,
            tick_interval: Params::TICK_INTERVAL,
            round_end_pause: Params::ROUND_END_PAUSE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of one paddle lane
    pub fn lane_height(&self) -> f32 {
        self.frame_height / self.pad_sections as f32
    }

    /// Fixed X position of a paddle's centre line
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_x_offset,
            Side::Right => self.frame_width - self.paddle_x_offset,
        }
    }

    /// Serve X position after the given side conceded a point
    pub fn serve_x(&self, conceded: Side) -> f32 {
        match conceded {
            Side::Left => self.ball_reset_x,
            Side::Right => self.frame_width - self.ball_reset_x,
        }
    }

    /// Centre of the frame, where the first ball is served
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.frame_width * 0.5, self.frame_height * 0.5)
    }
}

use crate::components::Side;

/// Match score, one count per side
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
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

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: bool,
    /// Side that was just awarded a point
    pub scored: Option<Side>,
    /// Winner, the tick the match ended
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Countdown between a miss and the next serve
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundPause {
    timer: f32,
}

impl RoundPause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn ready(&self) -> bool {
        self.timer <= 0.0
    }
}

use glam::{IVec2, Vec2};

use crate::geom::Aabb;
use crate::params::Config;

/// Which player a paddle or a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Pad index: 0 = left, 1 = right
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - occupies one of a fixed number of vertical lanes
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub lane: u8,
}

impl Paddle {
    pub fn new(side: Side, lane: u8) -> Self {
        Self { side, lane }
    }

    /// Shift by whole lanes; a request past either end is a silent no-op.
    /// Returns whether the move committed.
    pub fn try_shift(&mut self, offset: i8, sections: u8) -> bool {
        let target = self.lane as i16 + offset as i16;
        if target >= 0 && target <= sections as i16 - 1 {
            self.lane = target as u8;
            true
        } else {
            false
        }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        let lane_height = config.lane_height();
        let center_x = config.paddle_x(self.side);
        let top = self.lane as f32 * lane_height;
        Aabb::new(
            Vec2::new(center_x - config.paddle_width * 0.5, top),
            Vec2::new(center_x + config.paddle_width * 0.5, top + lane_height),
        )
    }
}

/// Ball component - diagonal unit direction, fixed per-tick speed
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Both components are -1 or +1
    pub dir: IVec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: IVec2, speed: f32) -> Self {
        Self { pos, dir, speed }
    }

    /// 2×radius square around the centre, like a canvas oval's box
    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(config.ball_radius * 2.0))
    }
}

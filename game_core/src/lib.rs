//! Deterministic two-player Pong simulation.
//!
//! Everything here is pure state and fixed-tick arithmetic; windowing,
//! drawing and key binding live in the client crate.

pub mod components;
pub mod fsm;
pub mod game;
pub mod geom;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use fsm::*;
pub use game::*;
pub use geom::*;
pub use params::*;
pub use resources::*;

use glam::{IVec2, Vec2};
use hecs::World;

/// Helper to create a paddle entity on the given lane
pub fn create_paddle(world: &mut World, side: Side, lane: u8) -> hecs::Entity {
    world.spawn((Paddle::new(side, lane),))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, pos: Vec2, dir: IVec2, speed: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, dir, speed),))
}

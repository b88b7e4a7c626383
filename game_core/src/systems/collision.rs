use hecs::World;

use crate::components::{Ball, Paddle};
use crate::geom::Aabb;
use crate::params::Config;
use crate::resources::Events;

/// Reflect the ball horizontally when it overlaps a paddle this tick.
///
/// The flip happens at most once per tick no matter how many paddles
/// overlap, and ignores where on the paddle contact occurred or how the
/// paddle is moving.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddle_bounds: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounds(config))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_bounds = ball.bounds(config);
        if paddle_bounds.iter().any(|b| b.overlaps(&ball_bounds)) {
            ball.dir.x = -ball.dir.x;
            events.paddle_hit = true;
        }
    }
}

use hecs::World;

use crate::components::{Ball, Side};
use crate::params::Config;
use crate::resources::{Events, Score};

/// Side whose edge the ball has reached this tick, if any
pub fn check_miss(world: &World, config: &Config) -> Option<Side> {
    let bounds = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.bounds(config))?;

    if bounds.min.x <= 0.0 {
        Some(Side::Left)
    } else if bounds.max.x >= config.frame_width {
        Some(Side::Right)
    } else {
        None
    }
}

/// Award a point if the ball crossed an edge. Returns the conceding side.
pub fn check_scoring(
    world: &World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let conceded = check_miss(world, config)?;
    score.increment(conceded.opponent());
    events.scored = Some(conceded.opponent());
    Some(conceded)
}

use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::params::Config;
use crate::resources::Events;

/// Apply a lane move to one side's paddle.
///
/// Moves commit immediately; a request past either end of the frame is
/// dropped without error. Returns whether the paddle actually moved.
pub fn move_paddle(world: &mut World, side: Side, offset: i8, config: &Config) -> bool {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            return paddle.try_shift(offset, config.pad_sections);
        }
    }
    false
}

/// Advance the ball one tick.
///
/// The wall bounce is evaluated on the current position before the
/// translation, so the ball can bounce and move in the same tick.
pub fn advance_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds(config);
        if bounds.min.y <= 0.0 || bounds.max.y >= config.frame_height {
            ball.dir.y = -ball.dir.y;
            events.wall_bounce = true;
        }
        ball.pos += ball.dir.as_vec2() * ball.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::{IVec2, Vec2};

    fn paddle_lane(world: &World, side: Side) -> u8 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.lane)
            .unwrap()
    }

    fn ball_state(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_paddle_moves_one_lane() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 2);

        assert!(move_paddle(&mut world, Side::Left, 1, &config));
        assert_eq!(paddle_lane(&world, Side::Left), 3);
        assert!(move_paddle(&mut world, Side::Left, -1, &config));
        assert_eq!(paddle_lane(&world, Side::Left), 2);
    }

    #[test]
    fn test_paddle_clamps_at_bottom_lane() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 2);

        for _ in 0..5 {
            move_paddle(&mut world, Side::Left, 1, &config);
        }
        assert_eq!(paddle_lane(&world, Side::Left), 5, "Lanes end at 5");

        // The extra request is a silent no-op
        assert!(!move_paddle(&mut world, Side::Left, 1, &config));
        assert_eq!(paddle_lane(&world, Side::Left), 5);
    }

    #[test]
    fn test_paddle_clamps_at_top_lane() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Right, 0);

        assert!(!move_paddle(&mut world, Side::Right, -1, &config));
        assert_eq!(paddle_lane(&world, Side::Right), 0);
    }

    #[test]
    fn test_paddles_move_independently() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 2);
        create_paddle(&mut world, Side::Right, 2);

        move_paddle(&mut world, Side::Left, 1, &config);
        assert_eq!(paddle_lane(&world, Side::Left), 3);
        assert_eq!(paddle_lane(&world, Side::Right), 2);
    }

    #[test]
    fn test_ball_translates_by_direction_and_speed() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(300.0, 200.0), IVec2::new(1, -1), 14.0);

        advance_ball(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.pos, Vec2::new(314.0, 186.0));
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_ball_bounces_and_moves_in_the_same_tick() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        // Top edge of the ball already at the ceiling
        create_ball(&mut world, Vec2::new(300.0, 4.0), IVec2::new(1, -1), 14.0);

        advance_ball(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.dir.y, 1, "Vertical direction flips on wall contact");
        assert_eq!(ball.pos, Vec2::new(314.0, 18.0), "Translation uses the flipped direction");
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(300.0, 396.0), IVec2::new(-1, 1), 14.0);

        advance_ball(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.dir.y, -1);
        assert_eq!(ball.pos, Vec2::new(286.0, 382.0));
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_direction_stays_flipped_until_next_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(300.0, 4.0), IVec2::new(1, -1), 14.0);

        advance_ball(&mut world, &config, &mut events);
        events.clear();
        advance_ball(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.dir.y, 1, "No second flip away from the walls");
        assert!(!events.wall_bounce);
    }
}

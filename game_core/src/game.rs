//! Match orchestration: owns the world, score, phase, and the fixed tick.

use glam::{IVec2, Vec2};
use hecs::{Entity, World};

use crate::components::{Ball, Paddle, Side};
use crate::fsm::{MatchAction, MatchFsm, MatchPhase};
use crate::geom::Aabb;
use crate::params::Config;
use crate::resources::{Events, RoundPause, Score};
use crate::systems::{advance_ball, check_collisions, check_scoring, move_paddle};
use crate::{create_ball, create_paddle};

/// The whole match: both paddles, the current ball, score and phase.
///
/// Single-threaded by construction; the host event loop feeds key presses
/// and wall-clock time in, and reads positions back out for drawing.
pub struct Game {
    world: World,
    config: Config,
    fsm: MatchFsm,
    score: Score,
    events: Events,
    pause: RoundPause,
    /// Side receiving the next serve; None until the first point concedes
    serve_to: Option<Side>,
    ball: Entity,
    accumulator: f32,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, config.pad_init_section);
        create_paddle(&mut world, Side::Right, config.pad_init_section);
        // The very first serve: centred, up and to the right
        let ball = create_ball(&mut world, config.center(), IVec2::new(1, -1), config.ball_speed);

        Self {
            world,
            config,
            fsm: MatchFsm::new(),
            score: Score::new(),
            events: Events::new(),
            pause: RoundPause::new(),
            serve_to: None,
            ball,
            accumulator: 0.0,
        }
    }

    /// Immediate lane move for one side's paddle, accepted in every phase
    pub fn move_paddle(&mut self, side: Side, offset: i8) -> bool {
        move_paddle(&mut self.world, side, offset, &self.config)
    }

    /// Start control. Honoured only while awaiting a serve, so a repeated
    /// trigger cannot schedule a second loop.
    pub fn start(&mut self) -> bool {
        let result = self.fsm.transition(MatchAction::Start);
        if result.success {
            self.accumulator = 0.0;
            log::debug!("rally started at {}-{}", self.score.left, self.score.right);
        }
        result.success
    }

    /// Advance wall-clock time: runs whole fixed ticks while rallying, or
    /// counts down the serve delay after a point.
    pub fn update(&mut self, dt: f32) {
        match self.fsm.phase() {
            MatchPhase::Rallying => {
                self.accumulator += dt;
                while self.accumulator >= self.config.tick_interval {
                    self.accumulator -= self.config.tick_interval;
                    self.tick();
                    if !self.fsm.is_rallying() {
                        self.accumulator = 0.0;
                        break;
                    }
                }
            }
            MatchPhase::RoundEndPause => {
                self.pause.update(dt);
                if self.pause.ready() {
                    self.serve();
                }
            }
            MatchPhase::AwaitingStart | MatchPhase::MatchOver => {}
        }
    }

    /// One discrete simulation step: collision first, then the miss check
    /// on the same position snapshot, otherwise advance the ball.
    pub fn tick(&mut self) {
        if !self.fsm.is_rallying() {
            return;
        }
        self.events.clear();

        check_collisions(&mut self.world, &self.config, &mut self.events);

        // A paddle save beats a simultaneous boundary read
        if !self.events.paddle_hit {
            if let Some(conceded) =
                check_scoring(&self.world, &self.config, &mut self.score, &mut self.events)
            {
                self.on_miss(conceded);
                return;
            }
        }
        advance_ball(&mut self.world, &self.config, &mut self.events);
    }

    fn on_miss(&mut self, conceded: Side) {
        log::info!(
            "point to the {} side ({}-{})",
            conceded.opponent().label(),
            self.score.left,
            self.score.right
        );
        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.events.match_over = Some(winner);
            self.fsm.transition(MatchAction::MatchWon);
            log::info!("match over, {} player wins", winner.label());
        } else {
            self.serve_to = Some(conceded);
            self.pause.start_delay(self.config.round_end_pause);
            self.fsm.transition(MatchAction::PointScored);
        }
    }

    /// Replace the ball for the next round and return to AwaitingStart.
    ///
    /// The ball spawns a fixed distance from the conceding edge and moves
    /// away from it; its vertical direction carries over from the last
    /// rally.
    fn serve(&mut self) {
        let conceded = match self.serve_to.take() {
            Some(side) => side,
            None => return,
        };
        let mut dir = self
            .ball_state()
            .map(|ball| ball.dir)
            .unwrap_or(IVec2::new(1, -1));
        dir.x = match conceded {
            Side::Left => 1,
            Side::Right => -1,
        };

        self.world.despawn(self.ball).ok();
        let pos = Vec2::new(self.config.serve_x(conceded), self.config.frame_height * 0.5);
        self.ball = create_ball(&mut self.world, pos, dir, self.config.ball_speed);
        self.fsm.transition(MatchAction::PauseElapsed);
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball_state(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn ball_bounds(&self) -> Option<Aabb> {
        self.ball_state().map(|ball| ball.bounds(&self.config))
    }

    pub fn paddle_lane(&self, side: Side) -> u8 {
        let mut lane = self.config.pad_init_section;
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.side == side {
                lane = paddle.lane;
            }
        }
        lane
    }

    pub fn paddle_bounds(&self, side: Side) -> Aabb {
        Paddle::new(side, self.paddle_lane(side)).bounds(&self.config)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_awaits_start_with_centred_ball() {
        let game = Game::new(Config::new());
        assert_eq!(game.phase(), MatchPhase::AwaitingStart);
        assert_eq!(game.paddle_lane(Side::Left), 2);
        assert_eq!(game.paddle_lane(Side::Right), 2);

        let ball = game.ball_state().unwrap();
        assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(ball.dir, IVec2::new(1, -1));
        assert_eq!(ball.speed, 14.0);
    }

    #[test]
    fn test_start_guard_rejects_double_trigger() {
        let mut game = Game::new(Config::new());
        assert!(game.start());
        assert!(!game.start(), "Second start while rallying is a no-op");
    }

    #[test]
    fn test_update_is_inert_before_start() {
        let mut game = Game::new(Config::new());
        game.update(1.0);
        let ball = game.ball_state().unwrap();
        assert_eq!(ball.pos, Vec2::new(300.0, 200.0), "No ticks before start");
    }

    #[test]
    fn test_tick_outside_rally_is_a_no_op() {
        let mut game = Game::new(Config::new());
        game.tick();
        assert_eq!(game.ball_state().unwrap().pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_paddle_moves_accepted_while_awaiting_start() {
        let mut game = Game::new(Config::new());
        assert!(game.move_paddle(Side::Left, 1));
        assert_eq!(game.paddle_lane(Side::Left), 3);
    }

    #[test]
    fn test_update_runs_one_tick_per_interval() {
        let mut game = Game::new(Config::new());
        game.start();
        game.update(0.025);
        let ball = game.ball_state().unwrap();
        assert_eq!(ball.pos, Vec2::new(314.0, 186.0));
    }

    #[test]
    fn test_save_beats_simultaneous_boundary_read() {
        let mut game = Game::new(Config::new());
        game.start();
        // Ball box [-1, 15] x [158, 174]: past the left edge and touching
        // the lane-2 paddle box [10, 20] x [133.3, 200] at once
        for (_entity, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(7.0, 166.0);
            ball.dir = IVec2::new(-1, 1);
        }

        game.tick();

        assert_eq!(game.score.left + game.score.right, 0, "No point on a save");
        assert!(game.fsm.is_rallying());
        let ball = game.ball_state().unwrap();
        assert_eq!(ball.dir.x, 1, "The save reflected the ball");
        assert_eq!(ball.pos, Vec2::new(21.0, 180.0));
    }
}

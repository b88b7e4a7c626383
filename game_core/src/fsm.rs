//! Match lifecycle state machine
//!
//! Serve → rally → score → win, with the pause between rounds held as an
//! explicit phase instead of a nulled ball speed.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball placed for the serve, HUD hints shown, start control armed
    AwaitingStart,
    /// Fixed-tick loop active
    Rallying,
    /// A point was just scored; waiting out the delay before the re-serve
    RoundEndPause,
    /// One side reached the winning score; terminal
    MatchOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    PointScored,
    MatchWon,
    PauseElapsed,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
}

/// Match lifecycle FSM
#[derive(Debug)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::AwaitingStart,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;
        if let Some(next) = self.next_phase(action) {
            self.phase = next;
            TransitionResult {
                success: true,
                from,
                to: next,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::AwaitingStart, MatchAction::Start) => Some(MatchPhase::Rallying),
            (MatchPhase::Rallying, MatchAction::PointScored) => Some(MatchPhase::RoundEndPause),
            (MatchPhase::Rallying, MatchAction::MatchWon) => Some(MatchPhase::MatchOver),
            (MatchPhase::RoundEndPause, MatchAction::PauseElapsed) => {
                Some(MatchPhase::AwaitingStart)
            }
            // MatchOver is terminal; everything else is rejected
            _ => None,
        }
    }

    pub fn is_rallying(&self) -> bool {
        self.phase == MatchPhase::Rallying
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::MatchOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

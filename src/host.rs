//! Host game controller capabilities
//!
//! The surrounding framework owns the clock, the score and the game phase.
//! A level only reaches them through [`GameHost`].

/// Overall phase of the host game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for players, before the session starts
    #[default]
    Idle,
    /// Active play; the only phase in which targets are generated
    Playing,
    /// Session over
    Ended,
}

/// Capabilities a level needs from the host game
pub trait GameHost {
    /// Host clock in milliseconds
    fn current_time_ms(&self) -> u64;
    /// Current cumulative score
    fn score(&self) -> i64;
    /// Change the score by `value` (`relative`) or set it to `value`
    fn adjust_score(&mut self, value: i64, relative: bool);
    /// End the session with a reason
    fn end_game(&mut self, reason: &str);
    fn has_game_ended(&self) -> bool;
    fn phase(&self) -> GamePhase;
}

/// In-memory host with a manually advanced clock.
///
/// Drives the demo binary and the tests.
#[derive(Debug, Clone, Default)]
pub struct SimHost {
    pub now_ms: u64,
    pub score: i64,
    pub phase: GamePhase,
    /// Reasons passed to `end_game`, in call order
    pub end_reasons: Vec<String>,
}

impl SimHost {
    /// A host already in the playing phase
    pub fn playing() -> Self {
        Self {
            phase: GamePhase::Playing,
            ..Self::default()
        }
    }

    /// Advance the clock
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl GameHost for SimHost {
    fn current_time_ms(&self) -> u64 {
        self.now_ms
    }

    fn score(&self) -> i64 {
        self.score
    }

    fn adjust_score(&mut self, value: i64, relative: bool) {
        if relative {
            self.score += value;
        } else {
            self.score = value;
        }
    }

    fn end_game(&mut self, reason: &str) {
        log::info!("Game ended: {reason}");
        self.end_reasons.push(reason.to_string());
        self.phase = GamePhase::Ended;
    }

    fn has_game_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }
}

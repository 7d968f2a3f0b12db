//! Session bookkeeping
//!
//! Tracks difficulty, level, lives, and round position for one
//! play-through. The runner asks the session what comes next after
//! every round instead of counting on its own.

use rand::Rng;

use super::difficulty::Difficulty;
use super::round::{RoundOutcome, RoundSpec};
use crate::config::GameConfig;
use crate::motion::Gesture;

/// What follows a recorded round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundProgress {
    /// More rounds remain in this level
    NextRound,
    /// Level finished with lives left; another level follows
    LevelComplete,
    /// Last level finished with lives left
    FinalLevelComplete,
    /// The round used up the last life
    OutOfLives,
}

/// Final state of a session, reported at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionSummary {
    pub difficulty: Difficulty,
    /// Level being played when the session ended
    pub level: u8,
    pub lives: u8,
    /// Rounds answered correctly
    pub correct: u16,
    /// Rounds played in total
    pub rounds_played: u16,
    /// Every level was completed
    pub cleared: bool,
}

/// One play-through
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    difficulty: Difficulty,
    level: u8,
    lives: u8,
    round_index: u8,
    correct: u16,
    rounds_played: u16,
    cleared: bool,
}

impl GameSession {
    /// Start a session at level 1 with the difficulty's lives
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            level: 1,
            lives: difficulty.lives(),
            round_index: 0,
            correct: 0,
            rounds_played: 0,
            cleared: false,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current level (1-based)
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Index of the next round within the current level (0-based)
    pub fn round_index(&self) -> u8 {
        self.round_index
    }

    /// Check if the session has ended
    pub fn is_over(&self) -> bool {
        self.lives == 0 || self.cleared
    }

    /// Draw the next round's challenge
    pub fn next_round<R: Rng + ?Sized>(&self, rng: &mut R, config: &GameConfig) -> RoundSpec {
        RoundSpec {
            target: Gesture::random(rng),
            time_budget_ms: config.time_budget_ms(self.level),
        }
    }

    /// Apply a round outcome
    ///
    /// A miss costs one life. Running out of lives takes priority over
    /// finishing the level.
    pub fn record(&mut self, outcome: RoundOutcome, config: &GameConfig) -> RoundProgress {
        self.rounds_played = self.rounds_played.saturating_add(1);
        if outcome.is_miss() {
            self.lives = self.lives.saturating_sub(1);
        } else {
            self.correct = self.correct.saturating_add(1);
        }

        if self.lives == 0 {
            return RoundProgress::OutOfLives;
        }

        self.round_index += 1;
        if self.round_index < config.rounds_per_level {
            return RoundProgress::NextRound;
        }

        self.round_index = 0;
        if self.level >= config.max_level {
            self.cleared = true;
            RoundProgress::FinalLevelComplete
        } else {
            RoundProgress::LevelComplete
        }
    }

    /// Move to the next level
    ///
    /// Returns false (and changes nothing) at the last level or once the
    /// session is over.
    pub fn advance_level(&mut self, config: &GameConfig) -> bool {
        if self.is_over() || self.level >= config.max_level {
            return false;
        }
        self.level += 1;
        self.round_index = 0;
        true
    }

    /// Summary for the game-over report
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            difficulty: self.difficulty,
            level: self.level,
            lives: self.lives,
            correct: self.correct,
            rounds_played: self.rounds_played,
            cleared: self.cleared,
        }
    }
}

//! Game logic
//!
//! Defines the authoritative gameplay: difficulty selection, countdown,
//! ten timed rounds per level, lives, and game over. The phase machine is
//! explicit, finite, and deterministic; everything random or timed goes
//! through injected collaborators.

pub mod difficulty;
pub mod events;
pub mod machine;
pub mod round;
pub mod runner;
pub mod screen;
pub mod session;

pub use difficulty::{Difficulty, DifficultySelector, Selection};
pub use events::GameEvent;
pub use machine::Phase;
pub use round::{RoundController, RoundOutcome, RoundReport, RoundSpec};
pub use runner::{Board, Game};
pub use screen::Screen;
pub use session::{GameSession, RoundProgress, SessionSummary};

use crate::config::GameConfig;

/// Round time budget for a level with the standard constants, in seconds
pub fn time_budget_secs(level: u8) -> f32 {
    GameConfig::default().time_budget_secs(level)
}

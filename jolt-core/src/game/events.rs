//! Events that trigger game phase transitions

use super::session::RoundProgress;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    // Player events
    /// Player confirmed a difficulty with the button
    DifficultyConfirmed,
    /// Player pressed the button on the game-over screen
    Acknowledged,

    // Pacing events
    /// The 3-2-1 countdown finished
    CountdownFinished,
    /// The "Next Level!" pause finished
    NextLevelStarted,

    // Session events
    /// Ten rounds done with lives left, more levels to go
    LevelCleared,
    /// Ten rounds of the last level done with lives left
    FinalLevelCleared,
    /// A round used up the last life
    LivesExhausted,
}

impl GameEvent {
    /// Event produced by a recorded round, if it ends the level or session
    pub fn from_progress(progress: RoundProgress) -> Option<Self> {
        match progress {
            RoundProgress::NextRound => None,
            RoundProgress::LevelComplete => Some(GameEvent::LevelCleared),
            RoundProgress::FinalLevelComplete => Some(GameEvent::FinalLevelCleared),
            RoundProgress::OutOfLives => Some(GameEvent::LivesExhausted),
        }
    }
}

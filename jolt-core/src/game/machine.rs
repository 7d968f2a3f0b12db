//! Game phase machine
//!
//! Presentation and timing are driven by the current phase; the
//! transition table below is the only place phases change.

use super::events::GameEvent;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Encoder picks the difficulty, button confirms
    #[default]
    SelectDifficulty,
    /// 3-2-1 countdown with the indicator
    Countdown,
    /// Rounds of the current level are being played
    Playing,
    /// Between levels
    LevelAdvance,
    /// Session ended; waiting for the button
    GameOver,
}

impl Phase {
    /// Process an event and return the next phase
    pub fn transition(self, event: GameEvent) -> Self {
        use GameEvent::*;
        use Phase::*;

        match (self, event) {
            (SelectDifficulty, DifficultyConfirmed) => Countdown,

            (Countdown, CountdownFinished) => Playing,

            (Playing, LevelCleared) => LevelAdvance,
            (Playing, FinalLevelCleared) => GameOver,
            (Playing, LivesExhausted) => GameOver,

            (LevelAdvance, NextLevelStarted) => Playing,

            (GameOver, Acknowledged) => SelectDifficulty,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_flow() {
        let phase = Phase::SelectDifficulty;
        let phase = phase.transition(GameEvent::DifficultyConfirmed);
        assert_eq!(phase, Phase::Countdown);

        let phase = phase.transition(GameEvent::CountdownFinished);
        assert_eq!(phase, Phase::Playing);

        let phase = phase.transition(GameEvent::LevelCleared);
        assert_eq!(phase, Phase::LevelAdvance);

        let phase = phase.transition(GameEvent::NextLevelStarted);
        assert_eq!(phase, Phase::Playing);

        let phase = phase.transition(GameEvent::FinalLevelCleared);
        assert_eq!(phase, Phase::GameOver);

        let phase = phase.transition(GameEvent::Acknowledged);
        assert_eq!(phase, Phase::SelectDifficulty);
    }

    #[test]
    fn test_lives_exhausted_ends_play() {
        assert_eq!(
            Phase::Playing.transition(GameEvent::LivesExhausted),
            Phase::GameOver
        );
    }

    #[test]
    fn test_session_ends_only_from_play() {
        // Both session-ending events come out of a round
        assert_eq!(
            Phase::LevelAdvance.transition(GameEvent::LivesExhausted),
            Phase::LevelAdvance
        );
        assert_eq!(
            Phase::LevelAdvance.transition(GameEvent::FinalLevelCleared),
            Phase::LevelAdvance
        );
    }

    #[test]
    fn test_unexpected_events_ignored() {
        assert_eq!(
            Phase::SelectDifficulty.transition(GameEvent::Acknowledged),
            Phase::SelectDifficulty
        );
        assert_eq!(
            Phase::GameOver.transition(GameEvent::DifficultyConfirmed),
            Phase::GameOver
        );
        assert_eq!(
            Phase::Countdown.transition(GameEvent::LevelCleared),
            Phase::Countdown
        );
        assert_eq!(
            Phase::Playing.transition(GameEvent::CountdownFinished),
            Phase::Playing
        );
    }
}

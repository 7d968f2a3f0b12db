//! Configuration type definitions
//!
//! The game has no user-facing configuration: these types carry the fixed
//! gameplay constants so the classifier and game loop read them from one
//! place, and so tests can shorten delays without touching the rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::STANDARD_GRAVITY;

/// Smoothing factor of the per-axis exponential moving average
pub const EMA_ALPHA: f32 = 0.2;

/// Detection threshold at level 1 (m/s²)
pub const BASE_THRESHOLD: f32 = 1.5;

/// Threshold increase per level (m/s²)
pub const THRESHOLD_STEP: f32 = 0.3;

/// Consecutive over-threshold ticks needed to confirm a gesture
pub const PERSISTENCE: u8 = 4;

/// Highest level; clearing it ends the session
pub const MAX_LEVEL: u8 = 10;

/// Rounds played per level
pub const ROUNDS_PER_LEVEL: u8 = 10;

/// Round time budget at level 1 (ms)
pub const FIRST_LEVEL_BUDGET_MS: u32 = 6000;

/// Round time budget at [`MAX_LEVEL`] (ms)
pub const FINAL_LEVEL_BUDGET_MS: u32 = 2000;

/// Accelerometer polling interval inside a round (ms)
pub const SAMPLE_POLL_MS: u32 = 20;

/// How long round feedback stays on screen (ms)
pub const FEEDBACK_MS: u32 = 500;

/// Length of each countdown step (ms)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Pause on the "Next Level!" screen (ms)
pub const NEXT_LEVEL_PAUSE_MS: u32 = 1000;

/// Encoder/button polling interval during difficulty selection (ms)
pub const INPUT_POLL_MS: u32 = 10;

/// Debounce after the difficulty is confirmed (ms)
pub const CONFIRM_DEBOUNCE_MS: u32 = 300;

/// Button polling interval on the game-over screen (ms)
pub const ACK_POLL_MS: u32 = 100;

/// Raw encoder pulses per difficulty step (one detent)
pub const PULSES_PER_STEP: u8 = 3;

/// What the classifier does while a confirmed gesture is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmitPolicy {
    /// Emit once when the counter reaches persistence; re-arm when the
    /// motion drops below threshold or another direction becomes dominant
    #[default]
    SingleShot,
    /// Emit on every tick the counter is at or above persistence
    Repeat,
}

/// Motion classifier configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifierConfig {
    /// EMA smoothing factor (0 < alpha <= 1)
    pub alpha: f32,
    /// Gravity subtracted from the filtered z axis (m/s²)
    pub gravity: f32,
    /// Threshold at level 1 (m/s²)
    pub base_threshold: f32,
    /// Threshold increase per level (m/s²)
    pub threshold_step: f32,
    /// Consecutive ticks needed to confirm a gesture
    pub persistence: u8,
    /// Behaviour while a gesture is held past confirmation
    pub emit_policy: EmitPolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            alpha: EMA_ALPHA,
            gravity: STANDARD_GRAVITY,
            base_threshold: BASE_THRESHOLD,
            threshold_step: THRESHOLD_STEP,
            persistence: PERSISTENCE,
            emit_policy: EmitPolicy::SingleShot,
        }
    }
}

impl ClassifierConfig {
    /// Detection threshold for a level (m/s²)
    ///
    /// Level 0 is treated as level 1.
    pub fn threshold(&self, level: u8) -> f32 {
        let steps = level.max(1) - 1;
        self.base_threshold + self.threshold_step * steps as f32
    }
}

/// Game loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Highest level
    pub max_level: u8,
    /// Rounds per level
    pub rounds_per_level: u8,
    /// Round budget at level 1 (ms)
    pub first_level_budget_ms: u32,
    /// Round budget at the last level (ms)
    pub final_level_budget_ms: u32,
    /// Accelerometer poll interval (ms)
    pub sample_poll_ms: u32,
    /// Feedback display time (ms)
    pub feedback_ms: u32,
    /// Countdown step length (ms)
    pub countdown_step_ms: u32,
    /// "Next Level!" pause (ms)
    pub next_level_pause_ms: u32,
    /// Input poll interval during selection (ms)
    pub input_poll_ms: u32,
    /// Debounce after confirming difficulty (ms)
    pub confirm_debounce_ms: u32,
    /// Button poll interval on game over (ms)
    pub ack_poll_ms: u32,
    /// Encoder pulses per difficulty step
    pub pulses_per_step: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            rounds_per_level: ROUNDS_PER_LEVEL,
            first_level_budget_ms: FIRST_LEVEL_BUDGET_MS,
            final_level_budget_ms: FINAL_LEVEL_BUDGET_MS,
            sample_poll_ms: SAMPLE_POLL_MS,
            feedback_ms: FEEDBACK_MS,
            countdown_step_ms: COUNTDOWN_STEP_MS,
            next_level_pause_ms: NEXT_LEVEL_PAUSE_MS,
            input_poll_ms: INPUT_POLL_MS,
            confirm_debounce_ms: CONFIRM_DEBOUNCE_MS,
            ack_poll_ms: ACK_POLL_MS,
            pulses_per_step: PULSES_PER_STEP,
        }
    }
}

impl GameConfig {
    /// Round time budget for a level, in seconds
    ///
    /// Linear from the first-level budget down to the final-level budget.
    /// Levels outside `1..=max_level` are clamped.
    pub fn time_budget_secs(&self, level: u8) -> f32 {
        let first = self.first_level_budget_ms as f32 / 1000.0;
        let last = self.final_level_budget_ms as f32 / 1000.0;
        if self.max_level <= 1 {
            return first;
        }

        let level = level.clamp(1, self.max_level);
        let span = (self.max_level - 1) as f32;
        first - (first - last) * (level - 1) as f32 / span
    }

    /// Round time budget for a level, rounded to whole milliseconds
    pub fn time_budget_ms(&self, level: u8) -> u32 {
        (self.time_budget_secs(level) * 1000.0 + 0.5) as u32
    }
}

//! Timed rounds
//!
//! A round polls the accelerometer at a fixed interval, feeding every
//! sample through the classifier, until a gesture is confirmed or the
//! time budget runs out. The first confirmed gesture decides the round.

use crate::config::SAMPLE_POLL_MS;
use crate::motion::{Gesture, MotionClassifier};
use crate::traits::{Clock, Rgb, SampleSource};

/// One round's challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundSpec {
    /// Gesture the player must perform
    pub target: Gesture,
    /// Time allowed (ms)
    pub time_budget_ms: u32,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// Target gesture performed in time
    Correct,
    /// A different gesture was performed first
    Incorrect,
    /// No gesture before the budget ran out
    TooSlow,
}

impl RoundOutcome {
    /// Check if this outcome costs a life
    pub fn is_miss(&self) -> bool {
        !matches!(self, RoundOutcome::Correct)
    }

    /// Feedback text
    pub const fn message(self) -> &'static str {
        match self {
            RoundOutcome::Correct => "Correct!",
            RoundOutcome::Incorrect => "Wrong!",
            RoundOutcome::TooSlow => "Too Slow!",
        }
    }

    /// Feedback indicator color
    pub const fn color(self) -> Rgb {
        match self {
            RoundOutcome::Correct => Rgb::GREEN,
            RoundOutcome::Incorrect => Rgb::RED,
            RoundOutcome::TooSlow => Rgb::YELLOW,
        }
    }
}

/// Details of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    /// Gesture that ended the round, if any
    pub detected: Option<Gesture>,
    /// Time from round start to resolution (ms)
    pub elapsed_ms: u64,
    /// Polls that produced no usable sample
    pub skipped_ticks: u16,
}

/// Runs rounds against the accelerometer
#[derive(Debug, Clone, Copy)]
pub struct RoundController {
    poll_interval_ms: u32,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(SAMPLE_POLL_MS)
    }
}

impl RoundController {
    /// Create a controller with the given poll interval
    pub fn new(poll_interval_ms: u32) -> Self {
        Self { poll_interval_ms }
    }

    /// Poll interval (ms)
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    /// Run one round to completion
    ///
    /// Bus errors and non-finite samples skip the poll without touching
    /// the classifier's filter.
    pub fn run_round<S, C>(
        &self,
        spec: RoundSpec,
        level: u8,
        classifier: &mut MotionClassifier,
        samples: &mut S,
        clock: &mut C,
    ) -> RoundReport
    where
        S: SampleSource,
        C: Clock,
    {
        let start_ms = clock.now_ms();
        let budget_ms = spec.time_budget_ms as u64;
        let mut skipped_ticks: u16 = 0;

        loop {
            let elapsed_ms = clock.elapsed_since(start_ms);
            if elapsed_ms >= budget_ms {
                return RoundReport {
                    outcome: RoundOutcome::TooSlow,
                    detected: None,
                    elapsed_ms,
                    skipped_ticks,
                };
            }

            let classified = samples
                .next_sample()
                .and_then(|sample| classifier.classify(sample, level));

            match classified {
                Ok(Some(gesture)) => {
                    let outcome = if gesture == spec.target {
                        RoundOutcome::Correct
                    } else {
                        RoundOutcome::Incorrect
                    };
                    return RoundReport {
                        outcome,
                        detected: Some(gesture),
                        elapsed_ms,
                        skipped_ticks,
                    };
                }
                Ok(None) => {}
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Skipping sample: {:?}", _e);
                    skipped_ticks = skipped_ticks.saturating_add(1);
                }
            }

            clock.delay_ms(self.poll_interval_ms);
        }
    }
}

//! Motion-to-gesture classifier
//!
//! Each call folds one raw sample into the per-axis moving averages,
//! removes gravity from z, and picks the axis with the largest filtered
//! magnitude. A gesture is confirmed only after that axis has stayed over
//! the level's threshold with the same sign for `persistence` ticks.

use super::filter::FilterState;
use super::gesture::{Axis, Gesture, Polarity};
use crate::config::{ClassifierConfig, EmitPolicy};
use crate::traits::{AccelSample, SampleError};

/// Dominant axis at one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    pub axis: Axis,
    /// Filtered value (z already gravity-compensated)
    pub value: f32,
}

impl AxisReading {
    /// Absolute filtered value
    pub fn magnitude(&self) -> f32 {
        self.value.abs()
    }

    /// Sign of the filtered value
    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.value)
    }
}

/// Stateful gesture detector
///
/// One instance lives for the whole process and is fed every sample the
/// game reads, across rounds and sessions.
#[derive(Debug, Clone)]
pub struct MotionClassifier {
    config: ClassifierConfig,
    state: FilterState,
    seeded: bool,
    /// Last single-shot gesture, held until the motion settles or another
    /// direction takes over
    latched: Option<Gesture>,
}

impl Default for MotionClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl MotionClassifier {
    /// Create an unseeded classifier
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            state: FilterState::default(),
            seeded: false,
            latched: None,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Snapshot of the filter and counters
    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    /// Check if the filter has been seeded by a first sample
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Forget the filter history; the next sample seeds it again
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.seeded = false;
        self.latched = None;
    }

    /// Detection threshold for a level (m/s²)
    pub fn threshold(&self, level: u8) -> f32 {
        self.config.threshold(level)
    }

    /// Classify one sample
    ///
    /// Returns `Ok(Some(gesture))` on the tick a gesture is confirmed and
    /// `Ok(None)` otherwise. A sample with NaN or infinity on any axis is
    /// rejected with [`SampleError::NonFinite`] and leaves the filter
    /// untouched.
    pub fn classify(
        &mut self,
        sample: AccelSample,
        level: u8,
    ) -> Result<Option<Gesture>, SampleError> {
        let sample = sample.validate()?;

        if self.seeded {
            self.state.smooth(sample, self.config.alpha);
        } else {
            self.state = FilterState::seeded(sample);
            self.seeded = true;
        }

        let reading = self.dominant();
        if reading.magnitude() < self.threshold(level) {
            self.state.clear_counters();
            self.latched = None;
            return Ok(None);
        }

        let polarity = reading.polarity();
        let gesture = Gesture::from_motion(reading.axis, polarity);
        let count = self.state.bump(reading.axis, polarity);
        if self.latched.is_some_and(|latched| latched != gesture) {
            self.latched = None;
        }

        if count < self.config.persistence.max(1) {
            return Ok(None);
        }

        match self.config.emit_policy {
            EmitPolicy::SingleShot if self.latched == Some(gesture) => Ok(None),
            EmitPolicy::SingleShot => {
                self.latched = Some(gesture);
                Ok(Some(gesture))
            }
            EmitPolicy::Repeat => Ok(Some(gesture)),
        }
    }

    /// Axis with the largest filtered magnitude
    ///
    /// Ties go to x, then y, then z.
    pub fn dominant(&self) -> AxisReading {
        let x = AxisReading {
            axis: Axis::X,
            value: self.state.ema_x,
        };
        let y = AxisReading {
            axis: Axis::Y,
            value: self.state.ema_y,
        };
        let z = AxisReading {
            axis: Axis::Z,
            value: self.state.ema_z - self.config.gravity,
        };

        let mut best = x;
        for candidate in [y, z] {
            if candidate.magnitude() > best.magnitude() {
                best = candidate;
            }
        }
        best
    }
}

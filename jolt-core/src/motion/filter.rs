//! Per-axis exponential smoothing and persistence counters

use super::gesture::{counter_slot, Axis, Polarity, COUNTER_SLOTS};
use crate::traits::AccelSample;

/// Filtered acceleration plus the six persistence counters
///
/// Counters are indexed by [`counter_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterState {
    pub ema_x: f32,
    pub ema_y: f32,
    pub ema_z: f32,
    counters: [u8; COUNTER_SLOTS],
}

impl FilterState {
    /// Start the filter at a raw sample
    pub fn seeded(sample: AccelSample) -> Self {
        Self {
            ema_x: sample.x,
            ema_y: sample.y,
            ema_z: sample.z,
            counters: [0; COUNTER_SLOTS],
        }
    }

    /// Fold one sample into the moving averages
    pub fn smooth(&mut self, sample: AccelSample, alpha: f32) {
        self.ema_x = alpha * sample.x + (1.0 - alpha) * self.ema_x;
        self.ema_y = alpha * sample.y + (1.0 - alpha) * self.ema_y;
        self.ema_z = alpha * sample.z + (1.0 - alpha) * self.ema_z;
    }

    /// Current counter value for an axis and polarity
    pub fn counter(&self, axis: Axis, polarity: Polarity) -> u8 {
        self.counters[counter_slot(axis, polarity)]
    }

    /// All six counters (x+, x-, y+, y-, z+, z-)
    pub fn counters(&self) -> &[u8; COUNTER_SLOTS] {
        &self.counters
    }

    /// Check if every counter is zero
    pub fn is_idle(&self) -> bool {
        self.counters.iter().all(|c| *c == 0)
    }

    /// Increment one counter and zero its opposite; returns the new count
    ///
    /// Counters on the other two axes are left alone.
    pub fn bump(&mut self, axis: Axis, polarity: Polarity) -> u8 {
        self.counters[counter_slot(axis, polarity.opposite())] = 0;
        let slot = &mut self.counters[counter_slot(axis, polarity)];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Zero all six counters
    pub fn clear_counters(&mut self) {
        self.counters = [0; COUNTER_SLOTS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_takes_raw_values() {
        let state = FilterState::seeded(AccelSample::new(1.0, 2.0, 3.0));
        assert_eq!(state.ema_x, 1.0);
        assert_eq!(state.ema_y, 2.0);
        assert_eq!(state.ema_z, 3.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_smooth_moves_toward_sample() {
        let mut state = FilterState::seeded(AccelSample::new(0.0, 0.0, 0.0));
        state.smooth(AccelSample::new(10.0, -10.0, 5.0), 0.2);
        assert_eq!(state.ema_x, 2.0);
        assert_eq!(state.ema_y, -2.0);
        assert_eq!(state.ema_z, 1.0);
    }

    #[test]
    fn test_bump_zeroes_opposite_only() {
        let mut state = FilterState::default();
        state.bump(Axis::Y, Polarity::Positive);
        state.bump(Axis::X, Polarity::Negative);
        state.bump(Axis::X, Polarity::Negative);
        assert_eq!(state.counter(Axis::X, Polarity::Negative), 2);

        assert_eq!(state.bump(Axis::X, Polarity::Positive), 1);
        assert_eq!(state.counter(Axis::X, Polarity::Negative), 0);
        assert_eq!(state.counter(Axis::Y, Polarity::Positive), 1);
    }

    #[test]
    fn test_bump_saturates() {
        let mut state = FilterState::default();
        for _ in 0..300 {
            state.bump(Axis::Z, Polarity::Negative);
        }
        assert_eq!(state.counter(Axis::Z, Polarity::Negative), u8::MAX);
    }

    #[test]
    fn test_clear_counters() {
        let mut state = FilterState::default();
        state.bump(Axis::Z, Polarity::Positive);
        state.bump(Axis::Y, Polarity::Negative);
        state.clear_counters();
        assert!(state.is_idle());
    }
}

//! Difficulty levels and the encoder-driven selector

use super::screen::Screen;
use crate::config::{CONFIRM_DEBOUNCE_MS, INPUT_POLL_MS, PULSES_PER_STEP};
use crate::traits::{Clock, InputEvent, InputSource, Presenter};

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Normal = 2,
    Hard = 3,
}

impl Difficulty {
    /// All difficulties in selector order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Starting lives for a session
    pub const fn lives(self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 1,
        }
    }

    /// Numeric difficulty (1-3)
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Difficulty at a selector position; wraps in both directions
    pub fn from_position(position: i32) -> Self {
        Self::ALL[position.rem_euclid(Self::ALL.len() as i32) as usize]
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Result of feeding one input event to the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Nothing visible changed
    Unchanged,
    /// The highlighted difficulty changed
    Changed(Difficulty),
    /// The button confirmed the highlighted difficulty
    Confirmed(Difficulty),
}

/// Rotary selector for the session difficulty
///
/// Raw encoder pulses accumulate until a full step's worth has arrived;
/// each step moves the selector one position. The position persists
/// between sessions, so the last choice stays highlighted.
#[derive(Debug, Clone)]
pub struct DifficultySelector {
    pulses_per_step: u8,
    pending_pulses: i16,
    position: i32,
    poll_ms: u32,
    debounce_ms: u32,
}

impl Default for DifficultySelector {
    fn default() -> Self {
        Self::new(PULSES_PER_STEP)
    }
}

impl DifficultySelector {
    /// Create a selector starting at [`Difficulty::Easy`]
    pub fn new(pulses_per_step: u8) -> Self {
        Self {
            pulses_per_step: pulses_per_step.max(1),
            pending_pulses: 0,
            position: 0,
            poll_ms: INPUT_POLL_MS,
            debounce_ms: CONFIRM_DEBOUNCE_MS,
        }
    }

    /// Override the input poll interval and post-confirm debounce
    pub fn with_timing(mut self, poll_ms: u32, debounce_ms: u32) -> Self {
        self.poll_ms = poll_ms;
        self.debounce_ms = debounce_ms;
        self
    }

    /// Currently highlighted difficulty
    pub fn current(&self) -> Difficulty {
        Difficulty::from_position(self.position)
    }

    /// Selector position in whole steps (unbounded)
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Feed one input event
    pub fn apply(&mut self, event: InputEvent) -> Selection {
        match event {
            InputEvent::Rotate(pulses) => {
                let before = self.current();
                let step = self.pulses_per_step as i16;

                self.pending_pulses += pulses as i16;
                let steps = self.pending_pulses / step;
                self.pending_pulses -= steps * step;
                self.position = self.position.wrapping_add(steps as i32);

                let after = self.current();
                if after != before {
                    Selection::Changed(after)
                } else {
                    Selection::Unchanged
                }
            }
            InputEvent::ButtonPressed => Selection::Confirmed(self.current()),
            InputEvent::ButtonReleased => Selection::Unchanged,
        }
    }

    /// Block until the player confirms a difficulty
    ///
    /// Shows the selection prompt, redraws on every change, and waits out
    /// the button bounce before returning. Input read failures skip the
    /// poll.
    pub fn select_difficulty<I, P, C>(
        &mut self,
        input: &mut I,
        presenter: &mut P,
        clock: &mut C,
    ) -> Difficulty
    where
        I: InputSource,
        P: Presenter,
        C: Clock,
    {
        presenter.show(&Screen::select_prompt().lines());

        loop {
            match input.poll_input() {
                Ok(Some(event)) => match self.apply(event) {
                    Selection::Changed(difficulty) => {
                        presenter.show(&Screen::difficulty(difficulty).lines());
                    }
                    Selection::Confirmed(difficulty) => {
                        #[cfg(feature = "defmt")]
                        defmt::info!("Difficulty confirmed: {}", difficulty);
                        clock.delay_ms(self.debounce_ms);
                        return difficulty;
                    }
                    Selection::Unchanged => {}
                },
                Ok(None) => {}
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Input read failed: {:?}", _e);
                }
            }

            clock.delay_ms(self.poll_ms);
        }
    }
}

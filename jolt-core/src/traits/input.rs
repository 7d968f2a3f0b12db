//! Rotary encoder and button input trait

/// Errors that can occur when polling the input hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Input hardware could not be read this tick
    ReadFailed,
}

/// Input events from the encoder and button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Encoder moved by a number of raw quadrature pulses
    ///
    /// Positive is clockwise. Several pulses make up one detent.
    Rotate(i8),
    /// Button went down (press edge)
    ButtonPressed,
    /// Button came back up (release edge)
    ButtonReleased,
}

/// Trait for the encoder/button pair
///
/// Implementations debounce the raw pins and report edges, so a held
/// button yields one `ButtonPressed` followed later by one `ButtonReleased`.
///
/// Only edges since the previous poll are reported. The game polls input
/// solely while it waits on the player, so an implementation must not
/// hold on to presses made during play and replay them later.
pub trait InputSource {
    /// Poll for an input edge since the previous poll
    ///
    /// Returns `Ok(Some(event))` if an input event is available,
    /// `Ok(None)` if nothing happened.
    fn poll_input(&mut self) -> Result<Option<InputEvent>, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_input(&mut self) -> Result<Option<InputEvent>, InputError> {
        (**self).poll_input()
    }
}


//! Axes, polarities, and the six directional gestures

use rand::Rng;

/// Accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in tie-break priority order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Sign of a filtered axis value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Polarity of a value (zero counts as positive)
    pub fn of(value: f32) -> Self {
        if value < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }

    /// The opposite polarity
    pub const fn opposite(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Number of (axis, polarity) persistence counters
pub const COUNTER_SLOTS: usize = 6;

/// Index of the persistence counter for an axis and polarity
///
/// Layout: x+, x-, y+, y-, z+, z-
pub const fn counter_slot(axis: Axis, polarity: Polarity) -> usize {
    let base = axis.index() * 2;
    match polarity {
        Polarity::Positive => base,
        Polarity::Negative => base + 1,
    }
}

/// Directional gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

impl Gesture {
    /// Every gesture, in prompt-table order
    pub const ALL: [Gesture; 6] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::Forward,
        Gesture::Back,
    ];

    /// Gesture produced by sustained motion along an axis
    ///
    /// x+ right, x- left, y+ forward, y- back, z+ up, z- down.
    pub const fn from_motion(axis: Axis, polarity: Polarity) -> Self {
        match (axis, polarity) {
            (Axis::X, Polarity::Positive) => Gesture::Right,
            (Axis::X, Polarity::Negative) => Gesture::Left,
            (Axis::Y, Polarity::Positive) => Gesture::Forward,
            (Axis::Y, Polarity::Negative) => Gesture::Back,
            (Axis::Z, Polarity::Positive) => Gesture::Up,
            (Axis::Z, Polarity::Negative) => Gesture::Down,
        }
    }

    /// Axis and polarity that produce this gesture
    pub const fn motion(self) -> (Axis, Polarity) {
        match self {
            Gesture::Right => (Axis::X, Polarity::Positive),
            Gesture::Left => (Axis::X, Polarity::Negative),
            Gesture::Forward => (Axis::Y, Polarity::Positive),
            Gesture::Back => (Axis::Y, Polarity::Negative),
            Gesture::Up => (Axis::Z, Polarity::Positive),
            Gesture::Down => (Axis::Z, Polarity::Negative),
        }
    }

    /// Prompt text shown to the player
    pub const fn label(self) -> &'static str {
        match self {
            Gesture::Up => "UP",
            Gesture::Down => "DOWN",
            Gesture::Left => "LEFT",
            Gesture::Right => "RIGHT",
            Gesture::Forward => "FORWARD",
            Gesture::Back => "BACK",
        }
    }

    /// Pick a gesture uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

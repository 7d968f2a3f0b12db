//! Motion classification
//!
//! Turns raw accelerometer samples into directional gestures:
//! - `filter`: per-axis EMA and persistence counters
//! - `classifier`: dominant-axis selection and gesture confirmation
//! - `gesture`: axes, polarities, and the six gestures

pub mod classifier;
pub mod filter;
pub mod gesture;

pub use classifier::{AxisReading, MotionClassifier};
pub use filter::FilterState;
pub use gesture::{counter_slot, Axis, Gesture, Polarity, COUNTER_SLOTS};

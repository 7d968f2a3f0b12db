//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and the
//! board-specific implementations (sensor bus, OLED, NeoPixel, encoder).

pub mod clock;
pub mod display;
pub mod input;
pub mod sensor;

pub use clock::Clock;
pub use display::{Indicator, Presenter, Rgb, SCREEN_COLS, SCREEN_LINES};
pub use input::{InputError, InputEvent, InputSource};
pub use sensor::{AccelSample, SampleError, SampleSource, STANDARD_GRAVITY};

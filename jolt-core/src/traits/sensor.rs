//! Accelerometer sample source trait

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Errors that can occur when reading the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Bus transaction failed (NAK, arbitration loss, timeout)
    ///
    /// Transient: the tick is skipped and the next read is attempted.
    Bus,
    /// Sample contained NaN or infinity on at least one axis
    NonFinite,
}

/// One accelerometer reading in m/s²
///
/// With the device lying flat and at rest, `z` reads roughly
/// [`STANDARD_GRAVITY`] and `x`/`y` read roughly zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    /// Create a sample from raw axis values
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A device at rest, lying flat
    pub const fn at_rest() -> Self {
        Self::new(0.0, 0.0, STANDARD_GRAVITY)
    }

    /// Check that every axis holds a finite value
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Return the sample if every axis is finite
    pub fn validate(self) -> Result<Self, SampleError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(SampleError::NonFinite)
        }
    }
}

/// Trait for accelerometers
///
/// Implementations wrap the specific part (ADXL345, LSM6DS3, MPU-6050, ...)
/// and convert raw register values to m/s².
///
/// Takes `&mut self` because bus reads require mutable access.
pub trait SampleSource {
    /// Read the next sample
    fn next_sample(&mut self) -> Result<AccelSample, SampleError>;
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn next_sample(&mut self) -> Result<AccelSample, SampleError> {
        (**self).next_sample()
    }
}

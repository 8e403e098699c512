//! Lighting subsystem trait and state

use core::fmt;

/// Brightness applied at power-on
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Brightness change per increase/decrease request
pub const DEFAULT_STEP: u8 = 10;

/// Highest brightness percentage
pub const MAX_BRIGHTNESS: u8 = 100;

/// Errors reported by a lighting implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightsError {
    /// Subsystem not initialized
    NotReady,
    /// Output driver failed
    Hardware,
}

impl fmt::Display for LightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightsError::NotReady => f.write_str("lights not ready"),
            LightsError::Hardware => f.write_str("lights hardware failure"),
        }
    }
}

/// Snapshot of the lighting subsystem
///
/// Brightness is a percentage and always stays within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightState {
    /// Lights are switched on
    pub on: bool,
    /// Brightness percentage
    pub brightness: u8,
}

impl Default for LightState {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl LightState {
    /// Lights off at the given brightness (clamped to 100)
    pub const fn new(brightness: u8) -> Self {
        Self {
            on: false,
            brightness: if brightness > MAX_BRIGHTNESS {
                MAX_BRIGHTNESS
            } else {
                brightness
            },
        }
    }

    /// Raise brightness by `step`, saturating at 100
    pub fn increase(&mut self, step: u8) {
        self.brightness = self.brightness.saturating_add(step).min(MAX_BRIGHTNESS);
    }

    /// Lower brightness by `step`, saturating at 0
    pub fn decrease(&mut self, step: u8) {
        self.brightness = self.brightness.saturating_sub(step);
    }
}

/// Trait for the lighting subsystem
///
/// Implementations own their [`LightState`]; the only way to change it is
/// through the four operations below.
pub trait LightsControl {
    /// Switch the lights on
    fn turn_on(&mut self) -> Result<(), LightsError>;

    /// Switch the lights off
    fn turn_off(&mut self) -> Result<(), LightsError>;

    /// Raise brightness by one step
    fn increase_brightness(&mut self) -> Result<(), LightsError>;

    /// Lower brightness by one step
    fn decrease_brightness(&mut self) -> Result<(), LightsError>;

    /// Current state
    fn state(&self) -> LightState;
}

impl<L: LightsControl + ?Sized> LightsControl for &mut L {
    fn turn_on(&mut self) -> Result<(), LightsError> {
        (**self).turn_on()
    }

    fn turn_off(&mut self) -> Result<(), LightsError> {
        (**self).turn_off()
    }

    fn increase_brightness(&mut self) -> Result<(), LightsError> {
        (**self).increase_brightness()
    }

    fn decrease_brightness(&mut self) -> Result<(), LightsError> {
        (**self).decrease_brightness()
    }

    fn state(&self) -> LightState {
        (**self).state()
    }
}

//! Configuration type definitions

use core::ops::RangeInclusive;

use crate::traits::lights::{DEFAULT_BRIGHTNESS, DEFAULT_STEP};

/// Accepted UART baud rates
pub const BAUDRATE_RANGE: RangeInclusive<u32> = 1200..=1_000_000;

/// Accepted menu yield, milliseconds
pub const YIELD_MS_RANGE: RangeInclusive<u32> = 0..=1000;

/// Accepted initial brightness, percent
pub const BRIGHTNESS_RANGE: RangeInclusive<u8> = 0..=100;

/// Accepted brightness step, percent
pub const STEP_RANGE: RangeInclusive<u8> = 1..=100;

/// Serial link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartSettings {
    /// Baud rate (8N1 framing is fixed)
    pub baudrate: u32,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}

/// Menu loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuSettings {
    /// Pause after each handled line, 0 disables it
    pub yield_ms: u32,
    /// Print the welcome and shutdown lines around the menu
    pub banner: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            yield_ms: 10,
            banner: true,
        }
    }
}

/// Lighting subsystem settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightsSettings {
    /// Brightness at power-on, percent
    pub initial_brightness: u8,
    /// Change per increase/decrease, percent
    pub step: u8,
}

impl Default for LightsSettings {
    fn default() -> Self {
        Self {
            initial_brightness: DEFAULT_BRIGHTNESS,
            step: DEFAULT_STEP,
        }
    }
}

/// Complete console configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    pub uart: UartSettings,
    pub menu: MenuSettings,
    pub lights: LightsSettings,
}

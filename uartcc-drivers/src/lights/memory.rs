//! Lights without hardware
//!
//! Keeps the state in memory only. Boards without a lamp use this so the
//! menu still has something to drive.

use uartcc_core::config::LightsSettings;
use uartcc_core::traits::{LightState, LightsControl, LightsError};

/// Placeholder lighting subsystem
///
/// Every operation fails with [`LightsError::NotReady`] until [`MemoryLights::init`]
/// has been called.
pub struct MemoryLights {
    state: LightState,
    step: u8,
    ready: bool,
}

impl MemoryLights {
    pub fn new(settings: &LightsSettings) -> Self {
        Self {
            state: LightState::new(settings.initial_brightness),
            step: settings.step,
            ready: false,
        }
    }

    /// Bring the subsystem up
    pub fn init(&mut self) {
        self.ready = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Lights control initialized with default brightness: {}%",
            self.state.brightness
        );
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn ensure_ready(&self) -> Result<(), LightsError> {
        if self.ready {
            Ok(())
        } else {
            Err(LightsError::NotReady)
        }
    }
}

impl LightsControl for MemoryLights {
    fn turn_on(&mut self) -> Result<(), LightsError> {
        self.ensure_ready()?;
        self.state.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), LightsError> {
        self.ensure_ready()?;
        self.state.on = false;
        Ok(())
    }

    fn increase_brightness(&mut self) -> Result<(), LightsError> {
        self.ensure_ready()?;
        self.state.increase(self.step);
        Ok(())
    }

    fn decrease_brightness(&mut self) -> Result<(), LightsError> {
        self.ensure_ready()?;
        self.state.decrease(self.step);
        Ok(())
    }

    fn state(&self) -> LightState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_before_init() {
        let mut lights = MemoryLights::new(&LightsSettings::default());
        assert_eq!(lights.turn_on(), Err(LightsError::NotReady));
        assert_eq!(lights.increase_brightness(), Err(LightsError::NotReady));
        assert_eq!(lights.state(), LightState::default());
    }

    #[test]
    fn test_operations_after_init() {
        let mut lights = MemoryLights::new(&LightsSettings::default());
        lights.init();
        assert!(lights.is_ready());

        lights.turn_on().unwrap();
        lights.increase_brightness().unwrap();
        assert_eq!(
            lights.state(),
            LightState {
                on: true,
                brightness: 60
            }
        );

        lights.turn_off().unwrap();
        assert!(!lights.state().on);
    }
}

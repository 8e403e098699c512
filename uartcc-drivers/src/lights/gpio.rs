//! GPIO lights
//!
//! Switches a lamp (or the board LED) through an enable pin. Brightness is
//! tracked as a PWM duty percentage for boards that route the enable line
//! through a dimmer; the pin itself is only on or off.

use uartcc_core::config::LightsSettings;
use uartcc_core::traits::{LightState, LightsControl, LightsError};
use uartcc_hal::OutputPin;

/// Lights driven by a GPIO pin
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioLights<P> {
    pin: P,
    /// If true, lights ON = pin LOW
    inverted: bool,
    state: LightState,
    step: u8,
}

impl<P: OutputPin> GpioLights<P> {
    /// Create lights on `pin`, switched off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, lights are ON when the pin is LOW
    /// - `settings`: Initial brightness and step size
    pub fn new(pin: P, inverted: bool, settings: &LightsSettings) -> Self {
        let mut lights = Self {
            pin,
            inverted,
            state: LightState::new(settings.initial_brightness),
            step: settings.step,
        };
        // Pin level is unknown until written once
        lights.drive(false);
        lights
    }

    /// Create lights with active-high output
    pub fn new_active_high(pin: P, settings: &LightsSettings) -> Self {
        Self::new(pin, false, settings)
    }

    /// Create lights with active-low output
    pub fn new_active_low(pin: P, settings: &LightsSettings) -> Self {
        Self::new(pin, true, settings)
    }

    /// PWM duty for a dimmer stage, 0 while off
    pub fn duty_percent(&self) -> u8 {
        if self.state.on {
            self.state.brightness
        } else {
            0
        }
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, on: bool) -> bool {
        let high = on != self.inverted;
        self.pin.set_state(high);
        self.pin.is_set_high() == high
    }

    fn switch(&mut self, on: bool) -> Result<(), LightsError> {
        if !self.drive(on) {
            #[cfg(feature = "defmt")]
            defmt::error!("lights pin did not latch (on={})", on);
            return Err(LightsError::Hardware);
        }
        self.state.on = on;

        #[cfg(feature = "defmt")]
        defmt::info!("lights {}, duty {}%", if on { "on" } else { "off" }, self.duty_percent());
        Ok(())
    }
}

impl<P: OutputPin> LightsControl for GpioLights<P> {
    fn turn_on(&mut self) -> Result<(), LightsError> {
        self.switch(true)
    }

    fn turn_off(&mut self) -> Result<(), LightsError> {
        self.switch(false)
    }

    fn increase_brightness(&mut self) -> Result<(), LightsError> {
        self.state.increase(self.step);
        Ok(())
    }

    fn decrease_brightness(&mut self) -> Result<(), LightsError> {
        self.state.decrease(self.step);
        Ok(())
    }

    fn state(&self) -> LightState {
        self.state
    }
}

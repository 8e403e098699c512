//! Board pin adapter for the lighting driver

use embassy_rp::gpio::Output;
use uartcc_hal::OutputPin;

/// RP2040 push-pull output as a HAL pin
pub struct LedPin {
    pin: Output<'static>,
}

impl LedPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for LedPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

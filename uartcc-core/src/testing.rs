//! Host test doubles

use std::string::String;

use uartcc_hal::RxFifo;
use uartcc_protocol::Line;

use crate::traits::{LightState, LightsControl, LightsError, TextOutput, WriteError, DEFAULT_STEP};

/// Build a line from text, panicking on invalid input
pub fn line(text: &str) -> Line {
    text.parse().unwrap()
}

/// Text output that records everything written
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

impl TextOutput for Transcript {
    fn write_text(&mut self, text: &str) -> Result<(), WriteError> {
        if text.contains('\0') {
            return Err(WriteError::InvalidArgument);
        }
        self.text.push_str(text);
        Ok(())
    }
}

/// In-memory lighting subsystem with an optional forced failure
#[derive(Debug, Default)]
pub struct FakeLights {
    state: LightState,
    fail: Option<LightsError>,
    calls: usize,
}

impl FakeLights {
    pub fn failing(err: LightsError) -> Self {
        Self {
            fail: Some(err),
            ..Self::default()
        }
    }

    /// Number of lighting operations invoked
    pub fn calls(&self) -> usize {
        self.calls
    }

    fn apply(&mut self, op: impl FnOnce(&mut LightState)) -> Result<(), LightsError> {
        self.calls += 1;
        if let Some(err) = self.fail {
            return Err(err);
        }
        op(&mut self.state);
        Ok(())
    }
}

impl LightsControl for FakeLights {
    fn turn_on(&mut self) -> Result<(), LightsError> {
        self.apply(|s| s.on = true)
    }

    fn turn_off(&mut self) -> Result<(), LightsError> {
        self.apply(|s| s.on = false)
    }

    fn increase_brightness(&mut self) -> Result<(), LightsError> {
        self.apply(|s| s.increase(DEFAULT_STEP))
    }

    fn decrease_brightness(&mut self) -> Result<(), LightsError> {
        self.apply(|s| s.decrease(DEFAULT_STEP))
    }

    fn state(&self) -> LightState {
        self.state
    }
}

/// Receive FIFO that yields a fixed byte sequence
pub struct ScriptedFifo<'a> {
    bytes: &'a [u8],
}

impl<'a> ScriptedFifo<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn is_drained(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl RxFifo for ScriptedFifo<'_> {
    fn try_read(&mut self) -> Option<u8> {
        let (&first, rest) = self.bytes.split_first()?;
        self.bytes = rest;
        Some(first)
    }
}

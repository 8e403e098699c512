//! Byte-stream to line framing
//!
//! Runs in the UART receive interrupt. Every call is O(1), never blocks and
//! never allocates; the accumulation buffer is a fixed array owned by the
//! framer.
//!
//! Framing rules:
//! - `\n` or `\r` with a non-empty buffer emits the buffered bytes as a [`Line`]
//!   and resets the buffer
//! - `\n` or `\r` with an empty buffer is ignored (no blank lines from `\r\n`)
//! - any other byte is appended while fewer than [`MAX_LINE_LEN`] bytes are held
//! - once full, further bytes are discarded until the next terminator, which
//!   then flushes the truncated line

use heapless::Vec;

use crate::line::{is_terminator, Line, MAX_LINE_LEN};

/// Errors reported while feeding bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramerError {
    /// Buffer full; the byte was discarded
    Overflow,
}

/// Accumulates bytes into lines
#[derive(Debug, Clone, Default)]
pub struct LineFramer {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl LineFramer {
    /// Create a framer with an empty buffer
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Drop any partially accumulated line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Bytes accumulated for the line in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the framer
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a line,
    /// `Ok(None)` when more bytes are needed (or a redundant terminator was
    /// skipped), or `Err(FramerError::Overflow)` when the byte did not fit.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, FramerError> {
        if is_terminator(byte) {
            if self.buffer.is_empty() {
                return Ok(None);
            }
            let content = core::mem::take(&mut self.buffer);
            return Ok(Some(Line::from_accumulated(content)));
        }

        self.buffer
            .push(byte)
            .map_err(|_| FramerError::Overflow)?;
        Ok(None)
    }

    /// Feed multiple bytes, handing every completed line to `sink`
    ///
    /// Returns the number of bytes discarded by the overflow policy.
    pub fn feed_bytes(&mut self, bytes: &[u8], mut sink: impl FnMut(Line)) -> usize {
        let mut discarded = 0;
        for &byte in bytes {
            match self.feed(byte) {
                Ok(Some(line)) => sink(line),
                Ok(None) => {}
                Err(FramerError::Overflow) => discarded += 1,
            }
        }
        discarded
    }
}

//! Text egress

use core::fmt;

use uartcc_protocol::CRLF;

/// Errors from writing text to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError {
    /// Text cannot be carried on the wire (embedded NUL)
    InvalidArgument,
    /// Transmitter reported a failure
    Bus,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::InvalidArgument => f.write_str("invalid argument"),
            WriteError::Bus => f.write_str("transmitter failure"),
        }
    }
}

/// Synchronous text sink
///
/// Every call blocks until the text has been handed to the transmitter.
pub trait TextOutput {
    /// Write raw text, no line ending appended
    fn write_text(&mut self, text: &str) -> Result<(), WriteError>;

    /// Write one line of text followed by `\r\n`
    fn message(&mut self, text: &str) -> Result<(), WriteError> {
        self.write_text(text)?;
        self.write_text(CRLF)
    }

    /// Write an error notice as `Error: <text>\r\n`
    fn error(&mut self, text: &str) -> Result<(), WriteError> {
        self.write_text("Error: ")?;
        self.message(text)
    }
}

/// Write a line, logging instead of propagating a failure
///
/// A broken transmitter cannot be reported on itself.
pub(crate) fn say<O: TextOutput + ?Sized>(out: &mut O, text: &str) {
    if let Err(_err) = out.message(text) {
        #[cfg(feature = "defmt")]
        defmt::warn!("console write failed: {}", _err);
    }
}

/// Write an error notice, logging instead of propagating a failure
pub(crate) fn say_error<O: TextOutput + ?Sized>(out: &mut O, text: &str) {
    if let Err(_err) = out.error(text) {
        #[cfg(feature = "defmt")]
        defmt::warn!("console write failed: {}", _err);
    }
}

impl<T: TextOutput + ?Sized> TextOutput for &mut T {
    fn write_text(&mut self, text: &str) -> Result<(), WriteError> {
        (**self).write_text(text)
    }
}

//! Bounded input lines

use heapless::Vec;

/// Size of the receive accumulation buffer, terminator slot included
pub const LINE_CAPACITY: usize = 64;

/// Longest line the framer can deliver
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

/// Line ending used on every egress string
pub const CRLF: &str = "\r\n";

/// Check whether a byte ends the current line
#[inline]
pub fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Errors from building a [`Line`] out of arbitrary bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Lines carry at least one byte
    Empty,
    /// More than [`MAX_LINE_LEN`] bytes
    TooLong,
    /// `\r` or `\n` inside the content
    ContainsTerminator,
}

/// One complete user input, terminator stripped
///
/// Immutable once built. The framer is the normal producer; tests and
/// loopback tooling use [`Line::from_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// Build a line from raw content
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LineError> {
        if bytes.is_empty() {
            return Err(LineError::Empty);
        }
        if bytes.iter().copied().any(is_terminator) {
            return Err(LineError::ContainsTerminator);
        }

        let mut content = Vec::new();
        content
            .extend_from_slice(bytes)
            .map_err(|_| LineError::TooLong)?;

        Ok(Self { bytes: content })
    }

    /// Wrap bytes already validated by the framer
    pub(crate) fn from_accumulated(bytes: Vec<u8, MAX_LINE_LEN>) -> Self {
        Self { bytes }
    }

    /// Raw content
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Number of content bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for lines produced by the framer
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl core::str::FromStr for Line {
    type Err = LineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(text.as_bytes())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Line({=[u8]:a})", self.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let line: Line = "Hello, UART Queue!".parse().unwrap();
        assert_eq!(line.as_str(), Some("Hello, UART Queue!"));
        assert_eq!(line.len(), 18);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Line::from_bytes(b""), Err(LineError::Empty));
    }

    #[test]
    fn test_rejects_terminators() {
        assert_eq!(Line::from_bytes(b"1\r"), Err(LineError::ContainsTerminator));
        assert_eq!(Line::from_bytes(b"a\nb"), Err(LineError::ContainsTerminator));
    }

    #[test]
    fn test_length_bound() {
        let longest = [b'x'; MAX_LINE_LEN];
        assert_eq!(Line::from_bytes(&longest).unwrap().len(), MAX_LINE_LEN);

        let too_long = [b'x'; MAX_LINE_LEN + 1];
        assert_eq!(Line::from_bytes(&too_long), Err(LineError::TooLong));
    }

    #[test]
    fn test_non_utf8_content() {
        let line = Line::from_bytes(&[0xFF, 0xFE]).unwrap();
        assert_eq!(line.as_str(), None);
        assert_eq!(line.as_bytes(), &[0xFF, 0xFE]);
    }
}

//! Text console over a blocking UART transmitter

use uartcc_hal::UartTx;

use crate::traits::{TextOutput, WriteError};

/// Writes user-facing text to a UART
///
/// Each call hands the whole string to the transmitter and returns once it
/// has been accepted. Text containing NUL is rejected before any byte is sent.
pub struct Console<T: UartTx> {
    tx: T,
}

impl<T: UartTx> Console<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Wait for every queued byte to leave the transmitter
    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.tx.flush().map_err(|_| WriteError::Bus)
    }

    /// Borrow the transmitter
    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> TextOutput for Console<T> {
    fn write_text(&mut self, text: &str) -> Result<(), WriteError> {
        if text.bytes().any(|b| b == 0) {
            return Err(WriteError::InvalidArgument);
        }
        self.tx
            .write_blocking(text.as_bytes())
            .map_err(|_| WriteError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Wire {
        sent: std::vec::Vec<u8>,
        broken: bool,
    }

    impl UartTx for Wire {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.broken {
                return Err(());
            }
            self.sent.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_message_appends_crlf() {
        let mut console = Console::new(Wire::default());
        console.message("Lights turned ON.").unwrap();
        assert_eq!(console.into_inner().sent, b"Lights turned ON.\r\n");
    }

    #[test]
    fn test_error_prefix() {
        let mut console = Console::new(Wire::default());
        console.error("Invalid choice. Please try again.").unwrap();
        assert_eq!(
            console.into_inner().sent,
            b"Error: Invalid choice. Please try again.\r\n"
        );
    }

    #[test]
    fn test_nul_is_invalid_argument() {
        let mut console = Console::new(Wire::default());
        assert_eq!(console.write_text("a\0b"), Err(WriteError::InvalidArgument));
        assert!(console.into_inner().sent.is_empty());
    }

    #[test]
    fn test_transmitter_failure() {
        let mut console = Console::new(Wire {
            broken: true,
            ..Wire::default()
        });
        assert_eq!(console.message("x"), Err(WriteError::Bus));
        assert_eq!(console.flush(), Ok(()));
    }
}

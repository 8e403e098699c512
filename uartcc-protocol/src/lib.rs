//! UART Command Center wire protocol
//!
//! The console speaks plain text in both directions:
//! ```text
//!  ingress:  <printable bytes ...> ( '\n' | '\r' )     at most 63 bytes per line
//!  egress:   <text> "\r\n"                             one blocking write per string
//! ```
//!
//! There is no escaping and no binary payload. Repeated terminators (such as
//! the `\r\n` pair most terminals send) never produce blank lines.
//!
//! This crate owns the byte-level half: [`Line`] is one bounded user input and
//! [`LineFramer`] assembles lines from a byte stream without allocating or
//! blocking, so it can run inside the receive interrupt.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod framer;
pub mod line;

pub use framer::{FramerError, LineFramer};
pub use line::{is_terminator, Line, LineError, CRLF, LINE_CAPACITY, MAX_LINE_LEN};

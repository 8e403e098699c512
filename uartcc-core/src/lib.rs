//! Board-agnostic logic for the UART command center console
//!
//! This crate contains everything between the receive interrupt and the
//! subsystem drivers that does not depend on a specific chip:
//!
//! - Line queue decoupling interrupt context from the menu task
//! - Receive-interrupt service routine (framer + zero-wait enqueue)
//! - Command model and router (category/action → subsystem call)
//! - Menu navigation state machine and its text rendering
//! - Text console over a blocking UART transmitter
//! - Lighting subsystem trait and state
//! - Configuration types and parser
//!
//! ```text
//!  UART IRQ ──▶ LineFramer ──try_put──▶ LineQueue ──get──▶ MenuMachine ──▶ CommandRouter ──▶ lights
//!                                                              │                 │
//!                                                              └──── Console ◀───┘ ──▶ UART TX
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod console;
pub mod menu;
pub mod queue;
pub mod rx;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{CommandRequest, CommandRouter, RouteOutcome};
pub use console::Console;
pub use menu::{MenuContext, MenuMachine};
pub use queue::{LineQueue, QueueError, Wait, QUEUE_DEPTH};
pub use rx::{service_rx, RxReport};

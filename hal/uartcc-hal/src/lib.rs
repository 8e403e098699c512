//! UART Command Center Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the console logic talks through.
//! Chip-specific code (the RP2040 firmware, host test doubles) implements
//! them, so the framer, queue and menu can be exercised off-target.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (uartcc-core, firmware)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  uartcc-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ RP2040 UART0  │       │  host mocks   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking serial output
//! - [`uart::RxFifo`] - Non-blocking receive FIFO access for interrupt handlers
//! - [`gpio::OutputPin`] - Digital output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use uart::{RxFifo, UartConfig, UartTx};

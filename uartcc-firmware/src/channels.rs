//! Shared state between the receive interrupt and the menu task

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use uartcc_core::queue::{LineQueue, QUEUE_DEPTH};
use uartcc_protocol::LineFramer;

/// Completed input lines, produced by the UART0 interrupt
pub static LINE_QUEUE: LineQueue<CriticalSectionRawMutex, QUEUE_DEPTH> = LineQueue::new();

/// Receive accumulation buffer
///
/// Only the UART0 interrupt touches it; the mutex satisfies `Sync` for the static.
pub static FRAMER: Mutex<CriticalSectionRawMutex, RefCell<LineFramer>> =
    Mutex::new(RefCell::new(LineFramer::new()));

//! Receive interrupt service
//!
//! Glue between the hardware FIFO, the [`LineFramer`] and the [`LineQueue`].
//! Called once per "data available" notification; drains the FIFO
//! completely and enqueues every completed line with zero wait.

use embassy_sync::blocking_mutex::raw::RawMutex;

use uartcc_hal::RxFifo;
use uartcc_protocol::{FramerError, LineFramer};

use crate::queue::LineQueue;

/// What a single service call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxReport {
    /// Bytes read from the FIFO
    pub bytes: usize,
    /// Lines completed and queued
    pub lines: usize,
    /// Lines completed but lost to a full queue
    pub dropped_lines: usize,
    /// Bytes discarded because the line buffer was full
    pub discarded_bytes: usize,
}

impl RxReport {
    /// Check if anything was lost during this call
    pub fn lost_input(&self) -> bool {
        self.dropped_lines > 0 || self.discarded_bytes > 0
    }
}

/// Drain `fifo` through `framer` into `queue`
///
/// Never blocks and never allocates. Runs in time proportional to the
/// number of bytes waiting in the FIFO.
pub fn service_rx<M: RawMutex, const N: usize>(
    framer: &mut LineFramer,
    mut fifo: impl RxFifo,
    queue: &LineQueue<M, N>,
) -> RxReport {
    let mut report = RxReport::default();

    while let Some(byte) = fifo.try_read() {
        report.bytes += 1;
        match framer.feed(byte) {
            Ok(Some(line)) => match queue.try_put(line) {
                Ok(()) => report.lines += 1,
                Err(_) => report.dropped_lines += 1,
            },
            Ok(None) => {}
            Err(FramerError::Overflow) => report.discarded_bytes += 1,
        }
    }

    report
}

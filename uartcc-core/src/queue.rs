//! Line queue between the receive interrupt and the menu task
//!
//! A fixed-depth FIFO of [`Line`] slots. It is the single backpressure point
//! of the input path: when all slots are occupied new lines are rejected and
//! counted, pending lines are never evicted.
//!
//! Producers in interrupt context only ever use [`LineQueue::try_put`]. The
//! menu task blocks in [`LineQueue::get`] with [`Wait::Forever`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration};
use portable_atomic::{AtomicU32, Ordering};

use uartcc_protocol::Line;

/// Default number of line slots
pub const QUEUE_DEPTH: usize = 10;

/// How long a queue operation may wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wait {
    /// Return immediately
    NoWait,
    /// Give up after the duration elapses
    For(Duration),
    /// Wait until the operation can complete
    Forever,
}

/// Queue operation outcomes other than success
///
/// These are expected conditions under load, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// No slot was free (the line was not queued)
    Full,
    /// Nothing queued and the caller would not wait
    Empty,
    /// Nothing arrived within the wait period
    TimedOut,
}

/// Bounded FIFO of completed lines
pub struct LineQueue<M: RawMutex, const N: usize = QUEUE_DEPTH> {
    channel: Channel<M, Line, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> Default for LineQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> LineQueue<M, N> {
    /// Create an empty queue (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Enqueue without waiting
    ///
    /// Safe to call from interrupt context. A full queue rejects the line
    /// and bumps [`LineQueue::dropped`].
    pub fn try_put(&self, line: Line) -> Result<(), QueueError> {
        self.channel.try_send(line).map_err(|_| self.record_drop())
    }

    /// Enqueue, waiting up to `wait` for a free slot
    pub async fn put(&self, line: Line, wait: Wait) -> Result<(), QueueError> {
        match wait {
            Wait::NoWait => self.try_put(line),
            Wait::For(timeout) => with_timeout(timeout, self.channel.send(line))
                .await
                .map_err(|_| self.record_drop()),
            Wait::Forever => {
                self.channel.send(line).await;
                Ok(())
            }
        }
    }

    /// Remove the oldest line, waiting up to `wait` for one to arrive
    pub async fn get(&self, wait: Wait) -> Result<Line, QueueError> {
        match wait {
            Wait::NoWait => self.channel.try_receive().map_err(|_| QueueError::Empty),
            Wait::For(timeout) => with_timeout(timeout, self.channel.receive())
                .await
                .map_err(|_| QueueError::TimedOut),
            Wait::Forever => Ok(self.channel.receive().await),
        }
    }

    /// Discard every pending line
    pub fn clear(&self) {
        self.channel.clear();
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    /// Check if no line is pending
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Lines lost because the queue was full
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn record_drop(&self) -> QueueError {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        QueueError::Full
    }
}

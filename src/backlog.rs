// SPDX-License-Identifier: Apache-2.0 OR MIT
// Bounded FIFO backlog for records produced before the sink exists

use crate::record::LogRecord;
use std::collections::VecDeque;

/// Default capacity of the startup backlog
pub const DEFAULT_BACKLOG_CAPACITY: usize = 100;

/// Fixed-capacity FIFO of log records with a one-way `closed` latch.
///
/// The backlog is not internally synchronized; [`LogFacade`] keeps one
/// behind its state mutex so that enqueue and the close-and-flip transition
/// are mutually exclusive. Closing and draining are a single step: the first
/// [`close`] takes every buffered record, leaving no window in which a
/// writer could observe "open" while the records are already being drained.
///
/// [`LogFacade`]: crate::LogFacade
/// [`close`]: BoundedBacklog::close
#[derive(Debug)]
pub struct BoundedBacklog {
    queue: VecDeque<LogRecord>,
    capacity: usize,
    closed: bool,
    dropped: u64,
}

impl BoundedBacklog {
    /// Create a backlog with the given capacity.
    ///
    /// `const` so a facade holding one can live in a `static` that is usable
    /// before `main`. No allocation happens until the first enqueue.
    pub const fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            capacity,
            closed: false,
            dropped: 0,
        }
    }

    /// Try to append a record, never blocking.
    ///
    /// Returns false when the backlog is closed or full. A full backlog
    /// drops the new record (drop-newest) and counts the loss; a closed
    /// backlog refuses without counting, since the caller re-routes the
    /// record to the live sink instead.
    pub fn try_enqueue(&mut self, record: LogRecord) -> bool {
        if self.closed {
            return false;
        }
        if self.queue.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.queue.push_back(record);
        true
    }

    /// Close the backlog and take every buffered record, in FIFO order.
    ///
    /// The first call yields the records present at close time; later calls
    /// yield an empty batch. Once closed, the backlog never reopens.
    pub fn close(&mut self) -> Vec<LogRecord> {
        self.closed = true;
        self.queue.drain(..).collect()
    }

    /// Records currently buffered
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the backlog holds no records
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether the backlog has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Configured capacity bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records discarded because the backlog was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

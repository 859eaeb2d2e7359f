// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Logging facade with a buffered startup phase.
//!
//! A [`LogFacade`] is callable from the very first instruction of the
//! process. Until a sink is installed, records park in a bounded in-memory
//! backlog; the one-time [`LogFacade::mark_initialized`] transition closes
//! the backlog, drains it to the sink in order, and flips every later call
//! to a direct synchronous write.

use crate::backlog::{BoundedBacklog, DEFAULT_BACKLOG_CAPACITY};
use crate::drainer::{DrainHandle, Drainer, SharedSink};
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Recover the guard even if a previous holder panicked. A poisoned logging
/// mutex must not disable logging for the rest of the process.
fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-lifetime logging entry point.
///
/// The two shared resources are the backlog (behind the state mutex) and
/// the installed sink (behind its own mutex, shared with the drain worker).
/// The lifecycle has exactly two phases, buffering then direct, and moves
/// between them at most once.
pub struct LogFacade {
    /// Backlog plus its closed latch. Enqueue and the close-and-flip
    /// transition both run under this mutex, so neither can interleave
    /// with the other.
    state: Mutex<BoundedBacklog>,
    /// Fast-path flag; stored only inside the transition's critical section.
    initialized: AtomicBool,
    /// Installed once, by the first effective `mark_initialized`.
    sink: OnceLock<SharedSink>,
    /// Handle of the one-shot drain worker.
    drain: Mutex<Option<DrainHandle>>,
    /// Drain completion flag, cloned out of the handle at the transition;
    /// polled without touching the `drain` mutex.
    drain_done: OnceLock<Arc<AtomicBool>>,
}

impl LogFacade {
    /// Facade with the default backlog capacity.
    ///
    /// `const`, so the process-wide instance needs no lazy initialization
    /// and is usable before `main`.
    pub const fn new() -> Self {
        Self::with_capacity(DEFAULT_BACKLOG_CAPACITY)
    }

    /// Facade with a custom backlog capacity
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(BoundedBacklog::new(capacity)),
            initialized: AtomicBool::new(false),
            sink: OnceLock::new(),
            drain: Mutex::new(None),
            drain_done: OnceLock::new(),
        }
    }

    /// Install the sink and switch to direct mode.
    ///
    /// Only the first call has any effect; later calls, including racing
    /// concurrent ones, are no-ops whose sink is discarded. The first call
    /// performs one atomic transaction under the state mutex:
    ///
    /// 1. install the sink,
    /// 2. close the backlog and take its records,
    /// 3. start the drain worker and wait until it holds the sink lock,
    /// 4. flip the lifecycle flag to direct.
    ///
    /// Because the drain worker already holds the sink lock when the flag
    /// flips, every direct-path caller queues behind the entire backlog:
    /// pre-transition records always reach the sink first, in FIFO order.
    /// After the transaction, an `Info` "Logger initialized" record goes
    /// through the now-direct path, landing right after the drained batch.
    pub fn mark_initialized(&self, sink: Box<dyn LogSink>) {
        {
            let mut backlog = lock_recover(&self.state);
            if backlog.is_closed() {
                return;
            }

            let shared: SharedSink = Arc::new(Mutex::new(sink));
            // Install before closing: a writer that observes "closed" must
            // always find the sink present.
            let _ = self.sink.set(Arc::clone(&shared));

            let records = backlog.close();
            let handle = Drainer::spawn(records, shared);
            let _ = self.drain_done.set(handle.completion());
            *lock_recover(&self.drain) = Some(handle);

            self.initialized.store(true, Ordering::Release);
        }

        self.info("Logger initialized");
    }

    /// Format `args` immediately and route the record
    #[inline]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.dispatch(LogRecord::from_args(level, args));
    }

    /// Log with trace severity
    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.dispatch(LogRecord::new(Level::Trace, message));
    }

    /// Log with debug severity
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.dispatch(LogRecord::new(Level::Debug, message));
    }

    /// Log with info severity
    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.dispatch(LogRecord::new(Level::Info, message));
    }

    /// Log with warn severity
    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.dispatch(LogRecord::new(Level::Warn, message));
    }

    /// Log with error severity
    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(LogRecord::new(Level::Error, message));
    }

    /// Log with fatal severity, then exit the process with status 1.
    ///
    /// The record takes the normal route (enqueue or direct write) before
    /// the exit; there is no buffering bypass.
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.dispatch(LogRecord::from_args(Level::Fatal, args));
        std::process::exit(1);
    }

    /// Log with panic severity, then panic with the same message.
    ///
    /// # Panics
    /// Always, after the record is handed off.
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        self.dispatch(LogRecord::new(Level::Panic, message.clone()));
        panic!("{message}");
    }

    /// Whether the one-time transition to direct mode has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Records currently waiting in the backlog
    pub fn backlog_len(&self) -> usize {
        lock_recover(&self.state).len()
    }

    /// Number of records discarded because the backlog was full
    pub fn dropped_records(&self) -> u64 {
        lock_recover(&self.state).dropped()
    }

    /// Whether the drain worker has written and flushed every buffered
    /// record. False before the transition. Reads an atomic flag, so it is
    /// safe to poll while another thread blocks in [`Self::wait_for_drain`].
    pub fn drain_complete(&self) -> bool {
        self.drain_done
            .get()
            .map(|done| done.load(Ordering::Acquire))
            .unwrap_or(false)
    }

    /// Block until the drain worker finishes.
    ///
    /// Returns immediately if the transition has not happened yet or the
    /// drain is already done. Useful in shutdown paths that want the
    /// backlog flushed before exiting.
    pub fn wait_for_drain(&self) {
        if let Some(handle) = lock_recover(&self.drain).as_mut() {
            handle.wait();
        }
    }

    /// Route one record. Exactly one of enqueue, drop, or direct write
    /// happens per call, and none of them blocks beyond the two internal
    /// mutexes.
    fn dispatch(&self, record: LogRecord) {
        if self.initialized.load(Ordering::Acquire) {
            self.write_direct(&record);
            return;
        }

        let mut backlog = lock_recover(&self.state);
        if backlog.is_closed() {
            // Lost the race with the transition: the sink is live, use it.
            drop(backlog);
            self.write_direct(&record);
            return;
        }
        backlog.try_enqueue(record);
    }

    fn write_direct(&self, record: &LogRecord) {
        if let Some(sink) = self.sink.get() {
            let mut sink = lock_recover(sink);
            sink.write_record(record);
            sink.flush();
        }
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide facade used by the `log_*!` macros
static FACADE: LogFacade = LogFacade::new();

/// The process-wide facade instance.
///
/// Lives in a `static` with const initialization, so it is usable before
/// `main` runs and from any thread, with no lazy-init ceremony.
pub fn facade() -> &'static LogFacade {
    &FACADE
}

/// Install the sink on the process-wide facade (first call wins)
pub fn mark_initialized(sink: Box<dyn LogSink>) {
    FACADE.mark_initialized(sink);
}

/// Block until the process-wide facade's drain worker finishes
pub fn wait_for_drain() {
    FACADE.wait_for_drain();
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// One-shot drain worker: flushes the closed backlog to the shared sink

use crate::record::LogRecord;
use crate::sink::LogSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

/// The installed sink, shared between the drain worker and direct-path
/// writers. Everything that touches the sink serializes on this one mutex.
pub(crate) type SharedSink = Arc<Mutex<Box<dyn LogSink>>>;

/// One-shot worker that writes a closed backlog batch to the sink.
///
/// Spawned exactly once, at the lifecycle transition; never restarted.
pub(crate) struct Drainer {
    records: Vec<LogRecord>,
    sink: SharedSink,
    claimed: mpsc::Sender<()>,
    done: Arc<AtomicBool>,
}

impl Drainer {
    /// Start the drain worker for a closed backlog batch.
    ///
    /// Blocks until the worker thread holds the sink lock, then returns.
    /// From that point every other sink user queues behind the whole drain,
    /// so the caller may flip the lifecycle to direct mode knowing that no
    /// direct write can overtake a buffered record. If no OS thread can be
    /// spawned, the batch is drained inline in the caller instead.
    pub(crate) fn spawn(records: Vec<LogRecord>, sink: SharedSink) -> DrainHandle {
        let done = Arc::new(AtomicBool::new(false));
        let (claimed_tx, claimed_rx) = mpsc::channel();

        // `thread::Builder::spawn` consumes the worker closure even when no
        // thread could be started, so the drainer rides in a shared slot the
        // failure arm can take it back out of.
        let slot = Arc::new(Mutex::new(Some(Drainer {
            records,
            sink,
            claimed: claimed_tx,
            done: Arc::clone(&done),
        })));

        let worker_slot = Arc::clone(&slot);
        let spawned = thread::Builder::new()
            .name("bootlog-drain".to_string())
            .spawn(move || {
                let drainer = worker_slot
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                if let Some(drainer) = drainer {
                    drainer.run();
                }
            });

        match spawned {
            Ok(handle) => {
                // A recv error means the worker died before claiming the
                // sink; the batch died with it, nothing left to order.
                let _ = claimed_rx.recv();
                DrainHandle {
                    thread: Some(handle),
                    done,
                }
            }
            Err(_) => {
                let drainer = slot
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                if let Some(drainer) = drainer {
                    drainer.run();
                }
                DrainHandle { thread: None, done }
            }
        }
    }

    fn run(self) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = self.claimed.send(());
        for record in &self.records {
            sink.write_record(record);
        }
        sink.flush();
        drop(sink);
        self.done.store(true, Ordering::Release);
    }
}

/// Observable completion of the one-shot drain
pub(crate) struct DrainHandle {
    thread: Option<thread::JoinHandle<()>>,
    done: Arc<AtomicBool>,
}

impl DrainHandle {
    /// Clone of the completion flag: true once every buffered record has
    /// been written and flushed. Pollable without holding any lock.
    pub(crate) fn completion(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.done)
    }

    /// Block until the drain worker finishes. Absorbs a panicked worker.
    pub(crate) fn wait(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Process-wide logging with a buffered startup phase.
//!
//! Log calls are safe from the very first instruction of the process,
//! before any sink (destination, format, level) has been configured. Until
//! the one-time [`mark_initialized`] transition, records park in a bounded
//! in-memory backlog; the transition installs the sink, drains the backlog
//! to it in FIFO order, and flips every later call to a direct synchronous
//! write. Pre-transition records always reach the sink before any
//! post-transition record.
//!
//! ```ignore
//! bootlog::log_info!("started before any sink exists");
//! bootlog::init_from_env()?;
//! bootlog::log_info!("written straight to the sink");
//! bootlog::wait_for_drain();
//! ```

mod backlog;
mod drainer;
mod facade;
mod level;
#[macro_use]
mod macros;
mod record;
mod settings;
mod sink;

pub use backlog::{BoundedBacklog, DEFAULT_BACKLOG_CAPACITY};
pub use facade::{facade, mark_initialized, wait_for_drain, LogFacade};
pub use level::{Level, ParseLevelError};
pub use record::LogRecord;
pub use settings::{init_from_env, ConfigError, Output, Settings};
pub use sink::{ConsoleSink, FileSink, LogFormat, LogSink, MultiSink};

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log record: severity plus a fully formatted message

use crate::level::Level;
use std::fmt;

/// An immutable log record.
///
/// The message is rendered at call time so that argument values are captured
/// at the moment of the event, not when the record is eventually written. A
/// record is owned by exactly one container at a time (backlog, drain batch,
/// or the sink call) and moves between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    /// Create a record from an already formatted message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Render `format_args!` output into a record immediately
    pub fn from_args(level: Level, args: fmt::Arguments<'_>) -> Self {
        Self {
            level,
            message: fmt::format(args),
        }
    }
}

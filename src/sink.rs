// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks: where drained and direct-path records end up

use crate::level::Level;
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single line: `HH:MM:SS.mmm LEVEL message`
    Pretty,
    /// One JSON object per line with `timestamp`, `level`, `message` fields
    Json,
}

/// Destination for log records.
///
/// `write_record` and `flush` take `&mut self`; concurrent use is the
/// caller's problem. The facade shares one sink between the drain worker
/// and direct-path writers behind a single mutex, which is also what makes
/// the backlog-before-direct ordering hold.
pub trait LogSink: Send {
    /// Write one record to the sink
    fn write_record(&mut self, record: &LogRecord);

    /// Flush any buffered output
    fn flush(&mut self);
}

/// Render one output line.
///
/// The timestamp is taken here, at write time: buffered records are stamped
/// when drained, not when logged.
fn format_line(format: LogFormat, record: &LogRecord) -> String {
    let now = chrono::Utc::now();
    match format {
        LogFormat::Pretty => format!(
            "{} {:<5} {}",
            now.format("%H:%M:%S%.3f"),
            record.level.as_str(),
            record.message
        ),
        LogFormat::Json => serde_json::json!({
            "timestamp": now.to_rfc3339(),
            "level": record.level,
            "message": record.message,
        })
        .to_string(),
    }
}

/// Console sink (writes to stdout)
pub struct ConsoleSink {
    stdout: std::io::Stdout,
    format: LogFormat,
    min_level: Level,
}

impl ConsoleSink {
    pub fn new(format: LogFormat, min_level: Level) -> Self {
        Self {
            stdout: std::io::stdout(),
            format,
            min_level,
        }
    }
}

impl LogSink for ConsoleSink {
    fn write_record(&mut self, record: &LogRecord) {
        if record.level < self.min_level {
            return;
        }
        // Write errors are swallowed: logging is fail-open
        let _ = writeln!(self.stdout, "{}", format_line(self.format, record));
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

/// Append-mode file sink
pub struct FileSink {
    writer: BufWriter<File>,
    format: LogFormat,
    min_level: Level,
}

impl FileSink {
    /// Open the log file in append mode, creating it if needed
    pub fn open(
        path: impl AsRef<Path>,
        format: LogFormat,
        min_level: Level,
    ) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            format,
            min_level,
        })
    }
}

impl LogSink for FileSink {
    fn write_record(&mut self, record: &LogRecord) {
        if record.level < self.min_level {
            return;
        }
        let _ = writeln!(self.writer, "{}", format_line(self.format, record));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Fan-out sink: forwards every record to each inner sink
pub struct MultiSink {
    sinks: Vec<Box<dyn LogSink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for MultiSink {
    fn write_record(&mut self, record: &LogRecord) {
        for sink in &mut self.sinks {
            sink.write_record(record);
        }
    }

    fn flush(&mut self) {
        for sink in &mut self.sinks {
            sink.flush();
        }
    }
}

#[cfg(test)]
pub(crate) use test_support::MemorySink;

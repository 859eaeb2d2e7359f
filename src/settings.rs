// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Environment-driven sink configuration.
//!
//! Resolution logs its own steps through the facade: lookups run before any
//! sink exists, so those records ride the startup backlog and surface once
//! the sink is installed.

use crate::level::{Level, ParseLevelError};
use crate::sink::{ConsoleSink, FileSink, LogFormat, LogSink, MultiSink};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const ENV_LEVEL: &str = "BOOTLOG_LEVEL";
const ENV_FORMAT: &str = "BOOTLOG_FORMAT";
const ENV_OUTPUT: &str = "BOOTLOG_OUTPUT";
const ENV_FILE: &str = "BOOTLOG_FILE";

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_FORMAT: &str = "pretty";
const DEFAULT_OUTPUT: &str = "console";
const DEFAULT_FILE: &str = "bootlog.log";

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Console,
    File,
    Both,
}

/// Errors surfaced to the host while building the sink.
///
/// The host decides whether these abort startup; nothing here crashes the
/// logging core itself.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    #[error("failed to open log file '{path}'")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved sink configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Minimum severity the sink lets through
    pub level: Level,
    /// Output format
    pub format: LogFormat,
    /// Destination(s)
    pub output: Output,
    /// Log file path, used when `output` involves a file
    pub file: PathBuf,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup.
    ///
    /// An unset or empty variable falls back to its default. Only an
    /// unparseable level is an error; unknown formats read as structured
    /// and unknown outputs as console.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let level = Level::from_str(&env_or_default(&lookup, ENV_LEVEL, DEFAULT_LEVEL))?;
        let format = parse_format(&env_or_default(&lookup, ENV_FORMAT, DEFAULT_FORMAT));
        let output = parse_output(&env_or_default(&lookup, ENV_OUTPUT, DEFAULT_OUTPUT));
        let file = PathBuf::from(env_or_default(&lookup, ENV_FILE, DEFAULT_FILE));
        Ok(Self {
            level,
            format,
            output,
            file,
        })
    }

    /// Build the sink this configuration describes
    pub fn build_sink(&self) -> Result<Box<dyn LogSink>, ConfigError> {
        Ok(match self.output {
            Output::Console => Box::new(ConsoleSink::new(self.format, self.level)),
            Output::File => Box::new(self.open_file_sink()?),
            Output::Both => Box::new(MultiSink::new(vec![
                Box::new(ConsoleSink::new(self.format, self.level)),
                Box::new(self.open_file_sink()?),
            ])),
        })
    }

    fn open_file_sink(&self) -> Result<FileSink, ConfigError> {
        FileSink::open(&self.file, self.format, self.level).map_err(|source| {
            ConfigError::OpenLogFile {
                path: self.file.clone(),
                source,
            }
        })
    }
}

/// Resolve the sink configuration from `BOOTLOG_*` environment variables
/// and initialize the process-wide facade with it.
///
/// The typical first call in `main`. Safe to call more than once; only the
/// first effective initialization installs a sink. An error means the level
/// did not parse or the log file could not be opened — the host decides
/// whether that aborts startup.
pub fn init_from_env() -> Result<(), ConfigError> {
    let settings = Settings::from_env()?;
    let sink = settings.build_sink()?;
    crate::mark_initialized(sink);
    Ok(())
}

/// Look up one variable, treating unset and empty as "use the default".
///
/// The fallback is announced at info and the final value traced, both
/// through the facade, so the resolution story lands in the backlog.
fn env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    let value = match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => {
            crate::facade().info(format!("{key} not set, using default '{default}'"));
            default.to_string()
        }
    };
    crate::facade().trace(format!("{key}={value}"));
    value
}

/// "pretty" reads as the human format; anything else is structured JSON
fn parse_format(value: &str) -> LogFormat {
    if value.eq_ignore_ascii_case("pretty") {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

/// Unrecognized destinations fall back to the console
fn parse_output(value: &str) -> Output {
    match value.to_ascii_lowercase().as_str() {
        "file" => Output::File,
        "both" => Output::Both,
        _ => Output::Console,
    }
}

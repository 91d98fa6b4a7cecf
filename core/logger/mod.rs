//! The diagnostics sink of the cache downloader.
//!
//! Every line the downloader reports goes through a [Logger] as a [LogEntry]: the text, how
//! verbose it is, and which output it is meant for. Sinks are fire-and-forget and must record
//! entries in the order they are given.
//!
mod event_logger;
mod tracing_logger;

pub use event_logger::*;
pub use tracing_logger::*;

use std::fmt;

/// How verbose a log line is. Ordered from least to most verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Routine lines that are always worth keeping, even in a compact log.
    Compact,
    Info,
    Verbose,
}

/// Where a log line is meant to end up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogOutput {
    All,
    Console,
    File,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Compact => "compact",
            LogLevel::Info => "info",
            LogLevel::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogOutput::All => "all",
            LogOutput::Console => "console",
            LogOutput::File => "file",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogEntry {
    text: String,
    level: LogLevel,
    output: LogOutput,
}

impl LogEntry {
    pub fn new<T: Into<String>>(text: T, level: LogLevel, output: LogOutput) -> Self {
        Self {
            text: text.into(),
            level,
            output,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn output(&self) -> LogOutput {
        self.output
    }
}

/// A sink for [LogEntry]s.
///
pub trait Logger: Send + Sync {
    fn log(&self, text: &str, level: LogLevel, output: LogOutput);
}

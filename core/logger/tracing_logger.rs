use super::{LogLevel, LogOutput, Logger};
use tracing::{debug, info};

/// Forwards every entry to `tracing`, so whatever subscriber the host application installs
/// decides where the lines end up.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, text: &str, level: LogLevel, output: LogOutput) {
        match level {
            LogLevel::Compact | LogLevel::Info => {
                info!(target: "bincache", %level, %output, "{}", text)
            }
            LogLevel::Verbose => debug!(target: "bincache", %level, %output, "{}", text),
        }
    }
}

use crate::logger::LogEntry;
use std::path::PathBuf;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DownloadEvent {
    DownloadStarted {
        url: Url,
    },
    DownloadCompleted {
        url: Url,
        sha256: String,
        total_size: u64,
    },
    ExtractionStarted {
        source: PathBuf,
        destination: PathBuf,
    },
    ExtractionCompleted {
        source: PathBuf,
        destination: PathBuf,
    },
}

#[derive(Default, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Event {
    /// The "nothing happened" event.
    #[default]
    Noop,
    DownloadEvent(DownloadEvent),
    LogEvent(LogEntry),
}

impl From<DownloadEvent> for Event {
    fn from(value: DownloadEvent) -> Self {
        Event::DownloadEvent(value)
    }
}

impl From<LogEntry> for Event {
    fn from(value: LogEntry) -> Self {
        Event::LogEvent(value)
    }
}

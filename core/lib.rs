//! # bincache
//!
//! The remote tier of a local/remote build-output cache. When a prebuilt binary is missing from
//! the local cache, a [CacheDownloader] checks whether the remote store has it, downloads the
//! archive, and unpacks it into the local cache directory.
//!
//! The flow begins by creating a [Config] and handing it to [CacheDownloader::from_config]. Every
//! collaborator the downloader talks to (network, filesystem, decompression, diagnostics) sits
//! behind a trait, so any of them can be replaced through [CacheDownloader::new].
//!
//! Neither public operation of the downloader ever fails: faults are turned into a `false` result
//! and a trail of [LogEntry]s on the configured [Logger].
//!

pub mod archive;
pub(crate) mod config;
pub(crate) mod downloader;
pub mod events;
pub mod fetcher;
pub mod logger;
pub mod reachability;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{ArchiveDecompressor, Decompressor, DecompressorError};
pub use config::*;
pub use downloader::*;
pub use fetcher::{Fetcher, FetcherError, HttpFetcher};
pub use logger::{EventLogger, LogEntry, LogLevel, LogOutput, Logger, TracingLogger};
pub use reachability::{HttpReachabilityChecker, ReachabilityChecker};
pub use storage::{LocalStorage, Storage, StorageError};

#[macro_use]
extern crate derive_builder;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

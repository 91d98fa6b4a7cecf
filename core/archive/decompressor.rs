use super::{Decompressor, DecompressorError};
use async_compression::futures::bufread::GzipDecoder;
use async_trait::async_trait;
use crate::events::event::DownloadEvent;
use crate::events::EventChannel;
use crate::Config;
use futures::AsyncReadExt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, instrument};

/// Unpacks zip archives, and falls back to gzipped tarballs for anything that is not a zip.
///
/// The archive itself is left in place.
///
#[derive(Debug, Clone)]
pub struct ArchiveDecompressor {
    event_channel: Arc<EventChannel>,
}

impl ArchiveDecompressor {
    pub fn new(config: &Config) -> Self {
        Self {
            event_channel: config.event_channel(),
        }
    }

    async fn unzip_entries(
        &self,
        archive: &Path,
        destination: &Path,
    ) -> Result<bool, DecompressorError> {
        let mut file = fs::File::open(archive).await?;

        let mut zip = match async_zip::read::seek::ZipFileReader::new(&mut file).await {
            Ok(zip) => zip,
            Err(err) => {
                debug!("{:?} is not a zip archive: {}", archive, err);
                return Ok(false);
            }
        };

        for i in 0..zip.entries().len() {
            let reader = zip.entry_reader(i).await?;

            if reader.entry().dir() {
                continue;
            }

            let path = safe_join(destination, reader.entry().name())?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }

            let mut output = fs::File::create(path).await?;
            reader.copy_to_end_crc(&mut output, 65536).await?;
        }

        Ok(true)
    }

    async fn untar(&self, archive: &Path, destination: &Path) -> Result<(), DecompressorError> {
        let file = fs::File::open(archive).await?;
        let mut unzip_stream = GzipDecoder::new(futures::io::BufReader::new(file.compat()));

        let mut data = vec![];
        unzip_stream.read_to_end(&mut data).await?;

        if data.is_empty() {
            return Err(DecompressorError::EmptyArchive {
                path: archive.to_path_buf(),
            });
        }

        let destination = destination.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let mut tar = tar::Archive::new(std::io::BufReader::new(&*data));
            tar.unpack(destination)
        })
        .await??;

        Ok(())
    }
}

#[async_trait]
impl Decompressor for ArchiveDecompressor {
    #[instrument(name = "ArchiveDecompressor::unzip", skip(self))]
    async fn unzip(&self, archive: &Path, destination: &Path) -> Result<(), DecompressorError> {
        if fs::metadata(archive).await?.len() == 0 {
            return Err(DecompressorError::EmptyArchive {
                path: archive.to_path_buf(),
            });
        }

        self.event_channel.send(DownloadEvent::ExtractionStarted {
            source: archive.to_path_buf(),
            destination: destination.to_path_buf(),
        });

        if !self.unzip_entries(archive, destination).await? {
            self.untar(archive, destination).await?;
        }

        self.event_channel.send(DownloadEvent::ExtractionCompleted {
            source: archive.to_path_buf(),
            destination: destination.to_path_buf(),
        });

        Ok(())
    }
}

/// Joins an entry name onto the destination, rejecting names that would escape it.
fn safe_join(destination: &Path, entry: &str) -> Result<PathBuf, DecompressorError> {
    let escapes = Path::new(entry).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if escapes {
        return Err(DecompressorError::UnsafeEntry {
            entry: entry.to_string(),
            destination: destination.to_path_buf(),
        });
    }

    Ok(destination.join(entry))
}

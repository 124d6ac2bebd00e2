use std::path::PathBuf;

use thiserror::Error;

use crate::data_uri::DataUriError;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cannot extract image: {0}")]
    DataUri(#[from] DataUriError),
    #[error("cannot write image: {0}")]
    Persist(#[from] PersistError),
    #[error("save worker failed: {0}")]
    Worker(String),
}

/// Platform save-to-disk mechanism.
pub trait FileSaver: Send + Sync {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError>;
}

/// Saves into a fixed output directory, created on demand.
#[derive(Debug, Clone)]
pub struct DiskSaver {
    writer: AtomicFileWriter,
}

impl DiskSaver {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(output_dir),
        }
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        self.writer.write(filename, content)
    }
}

use crate::error::{Result, VermanError};
use crate::store::{VersionRecord, VersionStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file name of the version document in the project root.
pub const DEFAULT_VERSION_FILE: &str = ".version.toml";

/// Version store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlFileStore { path: path.into() }
    }

    /// Store at `file` relative to `root` (absolute `file` wins).
    pub fn in_dir(root: impl AsRef<Path>, file: impl AsRef<Path>) -> Self {
        TomlFileStore::new(root.as_ref().join(file))
    }
}

impl VersionStore for TomlFileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<VersionRecord> {
        let content = fs::read_to_string(&self.path).map_err(|source| VermanError::StoreRead {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| VermanError::invalid_record(&self.path, e.to_string()))
    }

    fn write(&self, record: &VersionRecord) -> Result<()> {
        let content = toml::to_string(record).map_err(|e| VermanError::StoreWrite {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        debug!(path = %self.path.display(), "writing version file");
        fs::write(&self.path, content).map_err(|source| VermanError::StoreWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed version file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VermanError::Io(e)),
        }
    }
}

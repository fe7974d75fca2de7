//! Persistence of the project version
//!
//! The version lives in a small key-value document with six integer keys.
//! [VersionStore] abstracts where that document is kept:
//!
//! - [file::TomlFileStore]: a TOML file in the project root
//! - [memory::MemoryStore]: an in-memory store for tests
//!
//! Resolver and sync code take the store as an explicit handle so no
//! process-wide state is involved.

pub mod file;
pub mod memory;

pub use file::TomlFileStore;
pub use memory::MemoryStore;

use crate::domain::{Channel, Semver};
use crate::error::{Result, VermanError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a version: six named counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(default)]
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
    #[serde(default)]
    pub patch: u32,
    #[serde(default)]
    pub alpha: u32,
    #[serde(default)]
    pub beta: u32,
    #[serde(default)]
    pub rc: u32,
}

impl VersionRecord {
    /// Convert into a [Semver], rejecting records with more than one
    /// pre-release counter set.
    pub fn to_semver(&self, path: &Path) -> Result<Semver> {
        let active: Vec<(Channel, u32)> = [
            (Channel::Alpha, self.alpha),
            (Channel::Beta, self.beta),
            (Channel::Rc, self.rc),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .collect();

        let release = Semver::new(self.major, self.minor, self.patch);
        match active.as_slice() {
            [] => Ok(release),
            [(channel, n)] => Ok(release.with_pre(*channel, *n)),
            _ => Err(VermanError::invalid_record(
                path,
                "at most one of alpha, beta and rc may be non-zero",
            )),
        }
    }
}

impl From<&Semver> for VersionRecord {
    fn from(version: &Semver) -> Self {
        VersionRecord {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            alpha: version.alpha(),
            beta: version.beta(),
            rc: version.rc(),
        }
    }
}

/// Storage for the project's version record
pub trait VersionStore {
    /// Location of the backing document, used when committing it to git.
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    fn read(&self) -> Result<VersionRecord>;

    fn write(&self, record: &VersionRecord) -> Result<()>;

    /// Remove the document. Removing a missing document succeeds.
    fn remove(&self) -> Result<()>;

    /// Read and validate the stored version.
    fn read_version(&self) -> Result<Semver> {
        self.read()?.to_semver(self.path())
    }

    fn write_version(&self, version: &Semver) -> Result<()> {
        self.write(&VersionRecord::from(version))
    }
}

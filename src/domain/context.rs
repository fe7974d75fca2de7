use crate::domain::version::Semver;
use std::fmt;

/// Where the current version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Nothing found; the version is the default.
    None,
    /// Latest git tag.
    Git,
    /// The version file.
    File,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::None => f.write_str("none"),
            VersionSource::Git => f.write_str("git tag"),
            VersionSource::File => f.write_str("version file"),
        }
    }
}

/// A resolved version together with its source. Built fresh per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub version: Semver,
    pub source: VersionSource,
}

impl Context {
    pub fn new(version: Semver, source: VersionSource) -> Self {
        Context { version, source }
    }

    /// True when an actual source (file or git) backs the version.
    pub fn is_tracked(&self) -> bool {
        self.source != VersionSource::None
    }
}

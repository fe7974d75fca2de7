//! Domain logic - pure version rules independent of git and storage

pub mod bump;
pub mod context;
pub mod prerelease;
pub mod version;

pub use bump::{bump, BumpKind};
pub use context::{Context, VersionSource};
pub use prerelease::{Channel, PreRelease};
pub use version::Semver;

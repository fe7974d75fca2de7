//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! verman needs, allowing for multiple implementations including a real git
//! repository and a mock for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Version discovery goes through [lookup_latest_tag], which classifies the
//! latest tag into a closed [TagLookup] instead of leaving callers to inspect
//! error types.
//!
//! ```rust
//! # use verman::git::{lookup_latest_tag, Repository, TagLookup};
//! # fn example<R: Repository>(repo: &R) -> verman::Result<()> {
//! match lookup_latest_tag(repo)? {
//!     TagLookup::Found { version, .. } => println!("latest: {}", version),
//!     TagLookup::NotFound => println!("no tags yet"),
//!     TagLookup::InvalidFormat { tag } => println!("{} is not a version", tag),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Semver;
use crate::error::{Result, VermanError};
use std::path::Path;

/// Git operations used to discover and publish versions
///
/// Implementations are used from a single thread for one command at a time.
///
/// ## Error Handling
///
/// Every method except [Repository::is_repository] fails with
/// [VermanError::NotARepository] when there is no repository. Tag conflicts
/// are reported as [VermanError::TagExists] so callers can tell them apart
/// from other failures.
pub trait Repository {
    /// Whether the working directory is inside a git repository
    fn is_repository(&self) -> bool;

    /// Name of the most recent tag reachable from `HEAD`
    ///
    /// # Returns
    /// * `Ok(Some(name))` - The nearest tag walking history from `HEAD`
    /// * `Ok(None)` - No tags (including a repository without commits)
    /// * `Err` - Any other git failure
    fn latest_tag(&self) -> Result<Option<String>>;

    /// All tag names in the repository, sorted alphabetically
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create a lightweight tag on `HEAD`
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err(VermanError::TagExists)` - A tag with that name already exists
    /// * `Err` - Any other git failure
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Delete a tag by name
    fn delete_tag(&self, name: &str) -> Result<()>;

    /// Stage `path` and commit it on `HEAD` with `message`
    ///
    /// Failures are reported as [VermanError::Commit].
    fn commit_file(&self, path: &Path, message: &str) -> Result<()>;
}

/// Outcome of reading the latest git tag as a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// The latest tag parses as a version
    Found { tag: String, version: Semver },
    /// The repository has no tags
    NotFound,
    /// The latest tag is not a valid version
    InvalidFormat { tag: String },
}

/// Read the latest tag and classify it.
///
/// Hard git failures stay in the `Err` arm; discovery misses become
/// [TagLookup::NotFound] or [TagLookup::InvalidFormat].
pub fn lookup_latest_tag<R: Repository + ?Sized>(repo: &R) -> Result<TagLookup> {
    let Some(tag) = repo.latest_tag()? else {
        return Ok(TagLookup::NotFound);
    };

    match Semver::parse(&tag) {
        Ok(version) => Ok(TagLookup::Found { tag, version }),
        Err(VermanError::InvalidVersionFormat(_)) => Ok(TagLookup::InvalidFormat { tag }),
        Err(e) => Err(e),
    }
}

/// Pick the tag to report when several point at the same commit: the
/// highest valid version, otherwise the last name in order.
pub(crate) fn pick_latest(names: &[String]) -> Option<String> {
    names
        .iter()
        .max_by_key(|name| Semver::parse(name).ok())
        .cloned()
}

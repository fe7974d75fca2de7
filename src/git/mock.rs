use crate::error::{Result, VermanError};
use crate::git::Repository;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// A commit recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub path: PathBuf,
    pub message: String,
}

/// Mock repository for testing without actual git operations
///
/// Tags are kept in creation order; the most recently added one is the
/// latest.
pub struct MockRepository {
    is_repository: bool,
    tags: RefCell<Vec<String>>,
    commits: RefCell<Vec<RecordedCommit>>,
    lookup_failure: Option<String>,
    fail_commits: Cell<bool>,
}

impl MockRepository {
    /// Create a repository without tags
    pub fn new() -> Self {
        MockRepository {
            is_repository: true,
            tags: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            lookup_failure: None,
            fail_commits: Cell::new(false),
        }
    }

    /// A working directory that is not a git repository
    pub fn not_a_repository() -> Self {
        MockRepository {
            is_repository: false,
            ..Self::new()
        }
    }

    /// Add a tag; the last one added is reported as latest
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.tags.borrow_mut().push(name.into());
        self
    }

    /// Make tag lookup fail with a git error
    pub fn failing_lookup(mut self, message: impl Into<String>) -> Self {
        self.lookup_failure = Some(message.into());
        self
    }

    /// Make every following commit fail
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commits.set(fail);
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    pub fn commits(&self) -> Vec<RecordedCommit> {
        self.commits.borrow().clone()
    }

    fn ensure_repository(&self) -> Result<()> {
        if self.is_repository {
            Ok(())
        } else {
            Err(VermanError::NotARepository("mock".to_string()))
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn is_repository(&self) -> bool {
        self.is_repository
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        self.ensure_repository()?;
        if let Some(message) = &self.lookup_failure {
            return Err(VermanError::Git(git2::Error::from_str(message)));
        }
        Ok(self.tags.borrow().last().cloned())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        self.ensure_repository()?;
        let mut tags = self.tags();
        tags.sort();
        Ok(tags)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.ensure_repository()?;
        if self.tags.borrow().iter().any(|t| t == name) {
            return Err(VermanError::TagExists(name.to_string()));
        }
        self.tags.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.ensure_repository()?;
        let mut tags = self.tags.borrow_mut();
        let before = tags.len();
        tags.retain(|t| t != name);
        if tags.len() == before {
            return Err(VermanError::Git(git2::Error::from_str(&format!(
                "tag '{}' not found",
                name
            ))));
        }
        Ok(())
    }

    fn commit_file(&self, path: &Path, message: &str) -> Result<()> {
        self.ensure_repository()?;
        if self.fail_commits.get() {
            return Err(VermanError::Commit {
                path: path.to_path_buf(),
                source: git2::Error::from_str("commit rejected"),
            });
        }
        self.commits.borrow_mut().push(RecordedCommit {
            path: path.to_path_buf(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let repo = MockRepository::new().with_tag("v1.0.0").with_tag("v1.1.0");

        assert_eq!(repo.latest_tag().unwrap().as_deref(), Some("v1.1.0"));
        assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0", "v1.1.0"]);
    }

    #[test]
    fn test_mock_repository_create_tag_conflict() {
        let repo = MockRepository::new();
        repo.create_tag("v1.0.0").unwrap();

        let err = repo.create_tag("v1.0.0").unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_mock_repository_delete_tag() {
        let repo = MockRepository::new().with_tag("v1.0.0");
        repo.delete_tag("v1.0.0").unwrap();
        assert!(repo.tags().is_empty());
        assert!(repo.delete_tag("v1.0.0").is_err());
    }

    #[test]
    fn test_mock_repository_commits() {
        let repo = MockRepository::new();
        repo.commit_file(Path::new(".version.toml"), "release").unwrap();

        assert_eq!(
            repo.commits(),
            vec![RecordedCommit {
                path: PathBuf::from(".version.toml"),
                message: "release".to_string(),
            }]
        );
    }

    #[test]
    fn test_mock_not_a_repository() {
        let repo = MockRepository::not_a_repository();
        assert!(!repo.is_repository());
        assert!(repo.latest_tag().is_err());
        assert!(repo.create_tag("v1.0.0").is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}

use crate::error::{Result, VermanError};
use crate::git::pick_latest;
use git2::{Commit, ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
///
/// Holds no repository when discovery failed, so "not a git repository"
/// is a state rather than a construction error.
pub struct Git2Repository {
    repo: Option<Git2Repo>,
    path: PathBuf,
}

impl Git2Repository {
    /// Discover the repository containing `path`, if any
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let repo = match Git2Repo::discover(&path) {
            Ok(repo) => Some(repo),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no git repository found");
                None
            }
        };

        Git2Repository { repo, path }
    }

    /// Open the repository containing `path`, failing if there is none
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = Git2Repo::discover(&path)
            .map_err(|e| VermanError::NotARepository(format!("{}: {}", path.display(), e)))?;

        Ok(Git2Repository {
            repo: Some(repo),
            path,
        })
    }

    fn repo(&self) -> Result<&Git2Repo> {
        self.repo
            .as_ref()
            .ok_or_else(|| VermanError::NotARepository(self.path.display().to_string()))
    }

    /// Commit at `HEAD`, or `None` for a repository without commits.
    fn head_commit<'r>(repo: &'r Git2Repo) -> std::result::Result<Option<Commit<'r>>, git2::Error> {
        match repo.head() {
            Ok(head) => head.peel_to_commit().map(Some),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Path of `path` relative to the repository working directory.
    fn relative_to_workdir(repo: &Git2Repo, path: &Path) -> std::result::Result<PathBuf, git2::Error> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("bare repository has no working directory"))?;
        let workdir = workdir
            .canonicalize()
            .map_err(|e| git2::Error::from_str(&e.to_string()))?;
        let absolute = path
            .canonicalize()
            .map_err(|e| git2::Error::from_str(&e.to_string()))?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                git2::Error::from_str(&format!(
                    "{} is outside the repository at {}",
                    absolute.display(),
                    workdir.display()
                ))
            })
    }
}

impl super::Repository for Git2Repository {
    fn is_repository(&self) -> bool {
        self.repo.is_some()
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let repo = self.repo()?;

        let Some(head) = Self::head_commit(repo)? else {
            return Ok(None);
        };

        // Handles both lightweight and annotated tags
        let mut tags_by_commit: HashMap<Oid, Vec<String>> = HashMap::new();
        for tag_name in repo.tag_names(None)?.iter().flatten() {
            let Ok(reference) = repo.find_reference(&format!("refs/tags/{}", tag_name)) else {
                continue;
            };
            if let Ok(commit) = reference.peel_to_commit() {
                tags_by_commit
                    .entry(commit.id())
                    .or_default()
                    .push(tag_name.to_string());
            }
        }

        if tags_by_commit.is_empty() {
            return Ok(None);
        }

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(names) = tags_by_commit.get(&oid) {
                let latest = pick_latest(names);
                debug!(commit = %oid, tag = ?latest, "found nearest tag");
                return Ok(latest);
            }
        }

        Ok(None)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo()?.tag_names(None)?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let repo = self.repo()?;
        let head = repo.head()?.peel_to_commit()?;

        match repo.tag_lightweight(name, head.as_object(), false) {
            Ok(_) => {
                debug!(tag = name, commit = %head.id(), "created tag");
                Ok(())
            }
            Err(e) if e.code() == ErrorCode::Exists => Err(VermanError::TagExists(name.to_string())),
            Err(e) => Err(VermanError::Git(e)),
        }
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo()?.tag_delete(name)?;
        debug!(tag = name, "deleted tag");
        Ok(())
    }

    fn commit_file(&self, path: &Path, message: &str) -> Result<()> {
        let repo = self.repo()?;

        let commit = || -> std::result::Result<Oid, git2::Error> {
            let relative = Self::relative_to_workdir(repo, path)?;

            let mut index = repo.index()?;
            index.add_path(&relative)?;
            index.write()?;

            let tree = repo.find_tree(index.write_tree()?)?;
            let signature = repo.signature()?;
            let parent = Self::head_commit(repo)?;
            let parents: Vec<&Commit> = parent.iter().collect();

            repo.commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
        };

        let oid = commit().map_err(|source| VermanError::Commit {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(commit = %oid, path = %path.display(), "committed version file");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_discover_outside_repository() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repository::discover(dir.path());
        // TempDir could itself live inside a checkout; only assert when not
        if Git2Repo::discover(dir.path()).is_err() {
            assert!(!repo.is_repository());
            assert!(matches!(
                repo.latest_tag().unwrap_err(),
                VermanError::NotARepository(_)
            ));
        }
    }

    #[test]
    fn test_empty_repository_has_no_tags() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::discover(dir.path());
        assert!(repo.is_repository());
        assert_eq!(repo.latest_tag().unwrap(), None);
        assert!(repo.list_tags().unwrap().is_empty());
    }
}

use crate::domain::Semver;
use crate::error::Result;
use crate::git::Repository;
use crate::settings::GitSettings;
use crate::store::VersionStore;
use tracing::{debug, info};

/// What [SyncCoordinator::sync] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub version: Semver,
    /// The version file was committed to git.
    pub committed: bool,
    /// Name of the tag that was created, if any.
    pub tag: Option<String>,
}

/// Makes the version file and git tags agree with a version.
pub struct SyncCoordinator<'a, S: ?Sized, R: ?Sized> {
    store: &'a S,
    repo: &'a R,
    git: &'a GitSettings,
}

impl<'a, S, R> SyncCoordinator<'a, S, R>
where
    S: VersionStore + ?Sized,
    R: Repository + ?Sized,
{
    pub fn new(store: &'a S, repo: &'a R, git: &'a GitSettings) -> Self {
        SyncCoordinator { store, repo, git }
    }

    /// Persist `version`, then commit the version file and tag it.
    ///
    /// The commit and tag are skipped when `use_git_tag` is set (git already
    /// holds this version), when tagging is disabled, or outside a
    /// repository. A failed commit stops before tagging. A duplicate tag is
    /// reported as `TagExists` after the file has been written and committed.
    pub fn sync(&self, version: &Semver, use_git_tag: bool) -> Result<SyncReport> {
        info!(%version, path = %self.store.path().display(), "setting current version");
        self.store.write_version(version)?;

        let mut report = SyncReport {
            version: *version,
            committed: false,
            tag: None,
        };

        if use_git_tag {
            debug!("version came from git, skipping commit and tag");
            return Ok(report);
        }
        if !self.git.tag_on_sync {
            debug!("tagging disabled in settings");
            return Ok(report);
        }
        if !self.repo.is_repository() {
            debug!("not a git repository, skipping commit and tag");
            return Ok(report);
        }

        self.repo
            .commit_file(self.store.path(), &self.git.commit_message_for(version))?;
        report.committed = true;

        let tag = version.to_string();
        info!(%tag, "creating git tag");
        self.repo.create_tag(&tag)?;
        report.tag = Some(tag);

        Ok(report)
    }
}

use crate::domain::{Context, Semver, VersionSource};
use crate::error::Result;
use crate::git::{lookup_latest_tag, Repository, TagLookup};
use crate::notice::Notice;
use crate::store::VersionStore;
use tracing::{debug, info};

/// Initial version chosen by [Resolver::initial]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub version: Semver,
    /// True when the version came from an existing git tag, so git is
    /// already authoritative and must not be re-tagged.
    pub use_git_tag: bool,
    /// Informational conditions met along the way, in order.
    pub notices: Vec<Notice>,
}

impl Resolution {
    fn new(version: Semver, use_git_tag: bool, notices: Vec<Notice>) -> Self {
        Resolution {
            version,
            use_git_tag,
            notices,
        }
    }
}

/// Decides which source supplies the version: explicit input, the version
/// file, the latest git tag, or the default `v0.0.1`.
pub struct Resolver<'a, S: ?Sized, R: ?Sized> {
    store: &'a S,
    repo: &'a R,
}

impl<'a, S, R> Resolver<'a, S, R>
where
    S: VersionStore + ?Sized,
    R: Repository + ?Sized,
{
    pub fn new(store: &'a S, repo: &'a R) -> Self {
        Resolver { store, repo }
    }

    /// Resolve the version a project starts from.
    ///
    /// Priority, first success wins:
    /// 1. `arg`, when it parses;
    /// 2. the default when the directory is not a git repository;
    /// 3. the latest git tag, when it parses (`use_git_tag` is set);
    /// 4. the default when there are no tags or the tag is not a version.
    ///
    /// Only hard git failures are returned as errors.
    pub fn initial(&self, arg: Option<&str>) -> Result<Resolution> {
        let mut notices = Vec::new();
        let fallback = Semver::initial();

        if let Some(arg) = arg {
            match Semver::parse(arg) {
                Ok(version) => {
                    debug!(%version, "using explicit version");
                    return Ok(Resolution::new(version, false, notices));
                }
                Err(e) => notices.push(Notice::InvalidArgument {
                    arg: arg.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if !self.repo.is_repository() {
            notices.push(Notice::NotAGitRepository {
                fallback: fallback.to_string(),
            });
            return Ok(Resolution::new(fallback, false, notices));
        }

        match lookup_latest_tag(self.repo)? {
            TagLookup::Found { tag, version } => {
                info!(%tag, "adopting latest git tag");
                notices.push(Notice::LatestTagFound {
                    tag: version.to_string(),
                });
                Ok(Resolution::new(version, true, notices))
            }
            TagLookup::NotFound => {
                notices.push(Notice::NoGitTags {
                    fallback: fallback.to_string(),
                });
                Ok(Resolution::new(fallback, false, notices))
            }
            TagLookup::InvalidFormat { tag } => {
                notices.push(Notice::UnparsableTag {
                    tag,
                    fallback: fallback.to_string(),
                });
                Ok(Resolution::new(fallback, false, notices))
            }
        }
    }

    /// Resolve the current version and where it came from.
    ///
    /// The version file wins; otherwise the latest git tag when it parses;
    /// otherwise the default with [VersionSource::None].
    pub fn current(&self) -> Result<Context> {
        if self.store.exists() {
            let version = self.store.read_version()?;
            debug!(%version, path = %self.store.path().display(), "version from file");
            return Ok(Context::new(version, VersionSource::File));
        }

        if self.repo.is_repository() {
            if let TagLookup::Found { version, .. } = lookup_latest_tag(self.repo)? {
                debug!(%version, "version from git tag");
                return Ok(Context::new(version, VersionSource::Git));
            }
        }

        Ok(Context::new(Semver::initial(), VersionSource::None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VermanError;
    use crate::git::MockRepository;
    use crate::store::{MemoryStore, VersionRecord};

    #[test]
    fn test_no_repo_no_argument_defaults() {
        let store = MemoryStore::new();
        let repo = MockRepository::not_a_repository();

        let resolution = Resolver::new(&store, &repo).initial(None).unwrap();

        assert_eq!(resolution.version.to_string(), "v0.0.1");
        assert!(!resolution.use_git_tag);
        assert!(matches!(
            resolution.notices.as_slice(),
            [Notice::NotAGitRepository { .. }]
        ));
    }

    #[test]
    fn test_repo_without_tags_defaults() {
        let store = MemoryStore::new();
        let repo = MockRepository::new();

        let resolution = Resolver::new(&store, &repo).initial(None).unwrap();

        assert_eq!(resolution.version, Semver::initial());
        assert!(!resolution.use_git_tag);
        assert_eq!(resolution.notices.len(), 1);
        assert!(resolution.notices[0]
            .to_string()
            .starts_with("no git tags found."));
    }

    #[test]
    fn test_repo_with_tag_uses_it() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("v2.3.1");

        let resolution = Resolver::new(&store, &repo).initial(None).unwrap();

        assert_eq!(resolution.version.to_string(), "v2.3.1");
        assert!(resolution.use_git_tag);
    }

    #[test]
    fn test_unparsable_tag_defaults() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("latest");

        let resolution = Resolver::new(&store, &repo).initial(None).unwrap();

        assert_eq!(resolution.version, Semver::initial());
        assert!(!resolution.use_git_tag);
        assert!(matches!(
            resolution.notices.as_slice(),
            [Notice::UnparsableTag { tag, .. }] if tag == "latest"
        ));
    }

    #[test]
    fn test_explicit_argument_beats_git() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("v2.3.1");

        let resolution = Resolver::new(&store, &repo)
            .initial(Some("v1.0.0-beta.2"))
            .unwrap();

        assert_eq!(resolution.version.to_string(), "v1.0.0-beta.2");
        assert!(!resolution.use_git_tag);
        assert!(resolution.notices.is_empty());
    }

    #[test]
    fn test_invalid_argument_falls_through() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("v2.3.1");

        let resolution = Resolver::new(&store, &repo)
            .initial(Some("one.two"))
            .unwrap();

        assert_eq!(resolution.version.to_string(), "v2.3.1");
        assert!(resolution.use_git_tag);
        assert!(matches!(
            resolution.notices.first(),
            Some(Notice::InvalidArgument { arg, .. }) if arg == "one.two"
        ));
    }

    #[test]
    fn test_git_failure_is_hard_error() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().failing_lookup("bad object");

        let err = Resolver::new(&store, &repo).initial(None).unwrap_err();
        assert!(matches!(err, VermanError::Git(_)));
    }

    #[test]
    fn test_current_prefers_file() {
        let store = MemoryStore::with_record(VersionRecord {
            major: 1,
            minor: 4,
            ..Default::default()
        });
        let repo = MockRepository::new().with_tag("v9.9.9");

        let ctx = Resolver::new(&store, &repo).current().unwrap();

        assert_eq!(ctx.source, VersionSource::File);
        assert_eq!(ctx.version.to_string(), "v1.4.0");
    }

    #[test]
    fn test_current_from_git() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("v0.3.0-rc.1");

        let ctx = Resolver::new(&store, &repo).current().unwrap();

        assert_eq!(ctx.source, VersionSource::Git);
        assert_eq!(ctx.version.to_string(), "v0.3.0-rc.1");
    }

    #[test]
    fn test_current_without_source() {
        let store = MemoryStore::new();
        let repo = MockRepository::new().with_tag("nightly");

        let ctx = Resolver::new(&store, &repo).current().unwrap();

        assert_eq!(ctx.source, VersionSource::None);
        assert_eq!(ctx.version, Semver::initial());
    }

    #[test]
    fn test_current_rejects_corrupt_file() {
        let store = MemoryStore::with_record(VersionRecord {
            alpha: 1,
            rc: 2,
            ..Default::default()
        });
        let repo = MockRepository::not_a_repository();

        let err = Resolver::new(&store, &repo).current().unwrap_err();
        assert!(matches!(err, VermanError::InvalidRecord { .. }));
    }
}

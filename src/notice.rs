use std::fmt;

/// Informational conditions met while resolving or changing a version.
/// These are never fatal; the CLI prints them and carries on or exits 0.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Working directory is not inside a git repository
    NotAGitRepository { fallback: String },
    /// Repository has no tags
    NoGitTags { fallback: String },
    /// Latest tag exists but is not a valid version
    UnparsableTag { tag: String, fallback: String },
    /// Latest tag was adopted as the current version
    LatestTagFound { tag: String },
    /// Explicit version argument could not be parsed and was ignored
    InvalidArgument { arg: String, reason: String },
    /// `init` was run but a version file already exists
    AlreadyInitialized,
    /// No version file and no usable git tag
    NotInitialized,
    /// Version file was removed but git tags were kept
    TagsLeftBehind { tags: Vec<String> },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotAGitRepository { fallback } => {
                write!(f, "not a git repository. setting version to {}", fallback)
            }
            Notice::NoGitTags { fallback } => {
                write!(f, "no git tags found. setting version to {}", fallback)
            }
            Notice::UnparsableTag { tag, fallback } => write!(
                f,
                "latest git tag '{}' is not a valid semver tag. setting version to {}",
                tag, fallback
            ),
            Notice::LatestTagFound { tag } => write!(f, "latest git tag found: {}", tag),
            Notice::InvalidArgument { arg, reason } => {
                write!(f, "ignoring version argument '{}': {}", arg, reason)
            }
            Notice::AlreadyInitialized => write!(
                f,
                "configuration already exists. run `semver get` to display the current version or `semver reset` to reset all tags and config."
            ),
            Notice::NotInitialized => write!(
                f,
                "no version source found. run `semver init` to initialize the configuration."
            ),
            Notice::TagsLeftBehind { tags } => write!(
                f,
                "{} version tag(s) kept in git. run `semver reset --tags` or `git tag -d {}` to remove them.",
                tags.len(),
                tags.join(" ")
            ),
        }
    }
}

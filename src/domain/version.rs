use crate::domain::prerelease::{Channel, PreRelease};
use crate::error::{Result, VermanError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^v?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([A-Za-z]+)\.([1-9][0-9]*))?$",
        )
        .expect("version pattern compiles")
    })
}

/// Semantic version: a release triple plus at most one pre-release channel.
///
/// Values are immutable; bumping produces a new `Semver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Semver {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pre: Option<PreRelease>,
}

impl Semver {
    /// Create a final release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Semver {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// The version used when nothing else is known: `v0.0.1`.
    pub fn initial() -> Self {
        Semver::new(0, 0, 1)
    }

    /// Same release triple in the given pre-release channel.
    ///
    /// A zero counter yields the final release.
    pub fn with_pre(self, channel: Channel, number: u32) -> Self {
        Semver {
            pre: PreRelease::new(channel, number),
            ..self
        }
    }

    /// Same release triple with the pre-release marker dropped.
    pub fn release(self) -> Self {
        Semver { pre: None, ..self }
    }

    /// Parse `v?MAJOR.MINOR.PATCH(-(alpha|beta|rc).N)?`.
    ///
    /// Anything else, including partial matches, is `InvalidVersionFormat`.
    pub fn parse(s: &str) -> Result<Self> {
        let caps = version_regex()
            .captures(s)
            .ok_or_else(|| VermanError::invalid_format(s))?;

        let number = |idx: usize| -> Result<u32> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| VermanError::invalid_format(s))
        };

        let version = Semver::new(number(1)?, number(2)?, number(3)?);

        match caps.get(4) {
            Some(name) => {
                let channel = name
                    .as_str()
                    .parse::<Channel>()
                    .map_err(|_| VermanError::invalid_format(s))?;
                Ok(version.with_pre(channel, number(5)?))
            }
            None => Ok(version),
        }
    }

    pub fn pre_release(&self) -> Option<PreRelease> {
        self.pre
    }

    /// True iff any of alpha/beta/rc is non-zero.
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }

    /// Counter of the given channel, 0 when the version is not in it.
    pub fn counter(&self, channel: Channel) -> u32 {
        match self.pre {
            Some(pre) if pre.channel() == channel => pre.number(),
            _ => 0,
        }
    }

    pub fn alpha(&self) -> u32 {
        self.counter(Channel::Alpha)
    }

    pub fn beta(&self) -> u32 {
        self.counter(Channel::Beta)
    }

    pub fn rc(&self) -> u32 {
        self.counter(Channel::Rc)
    }
}

impl Default for Semver {
    fn default() -> Self {
        Semver::initial()
    }
}

impl FromStr for Semver {
    type Err = VermanError;

    fn from_str(s: &str) -> Result<Self> {
        Semver::parse(s)
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl PartialOrd for Semver {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Semver {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre, other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

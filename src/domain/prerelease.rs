//! Pre-release channels for semantic versions
//!
//! A version is either a final release or sits in exactly one of three
//! channels (alpha, beta, rc), each with a counter starting at 1.

use crate::error::{Result, VermanError};
use std::fmt;
use std::str::FromStr;

/// Pre-release channel, ordered `Alpha < Beta < Rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Alpha,
    Beta,
    Rc,
}

impl Channel {
    /// The identifier used in the string form (`alpha`, `beta`, `rc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Alpha => "alpha",
            Channel::Beta => "beta",
            Channel::Rc => "rc",
        }
    }
}

impl FromStr for Channel {
    type Err = VermanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(Channel::Alpha),
            "beta" => Ok(Channel::Beta),
            "rc" => Ok(Channel::Rc),
            other => Err(VermanError::invalid_format(other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pre-release marker such as `beta.2`.
///
/// The counter is always at least 1; a zero counter means "no pre-release"
/// and is represented by the absence of a `PreRelease` on the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreRelease {
    channel: Channel,
    number: u32,
}

impl PreRelease {
    /// Build a pre-release marker. Returns `None` for a zero counter.
    pub fn new(channel: Channel, number: u32) -> Option<Self> {
        (number > 0).then_some(PreRelease { channel, number })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.channel
            .cmp(&other.channel)
            .then(self.number.cmp(&other.number))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.channel, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_str() {
        assert_eq!("alpha".parse::<Channel>().unwrap(), Channel::Alpha);
        assert_eq!("beta".parse::<Channel>().unwrap(), Channel::Beta);
        assert_eq!("rc".parse::<Channel>().unwrap(), Channel::Rc);
    }

    #[test]
    fn test_channel_rejects_unknown() {
        assert!("gamma".parse::<Channel>().is_err());
        assert!("Alpha".parse::<Channel>().is_err());
        assert!("a".parse::<Channel>().is_err());
    }

    #[test]
    fn test_channel_ordering() {
        assert!(Channel::Alpha < Channel::Beta);
        assert!(Channel::Beta < Channel::Rc);
    }

    #[test]
    fn test_prerelease_zero_is_none() {
        assert!(PreRelease::new(Channel::Beta, 0).is_none());
    }

    #[test]
    fn test_prerelease_display() {
        let pre = PreRelease::new(Channel::Rc, 3).unwrap();
        assert_eq!(pre.to_string(), "rc.3");
    }

    #[test]
    fn test_prerelease_ordering() {
        let alpha9 = PreRelease::new(Channel::Alpha, 9).unwrap();
        let beta1 = PreRelease::new(Channel::Beta, 1).unwrap();
        let beta2 = PreRelease::new(Channel::Beta, 2).unwrap();
        assert!(alpha9 < beta1);
        assert!(beta1 < beta2);
    }
}

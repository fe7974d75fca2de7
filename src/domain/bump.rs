use crate::domain::prerelease::Channel;
use crate::domain::version::Semver;
use std::fmt;

/// Which field of a version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    PreRelease(Channel),
}

impl BumpKind {
    pub const ALPHA: BumpKind = BumpKind::PreRelease(Channel::Alpha);
    pub const BETA: BumpKind = BumpKind::PreRelease(Channel::Beta);
    pub const RC: BumpKind = BumpKind::PreRelease(Channel::Rc);
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => f.write_str("major"),
            BumpKind::Minor => f.write_str("minor"),
            BumpKind::Patch => f.write_str("patch"),
            BumpKind::PreRelease(channel) => write!(f, "{}", channel),
        }
    }
}

/// Compute the version that follows `current` for the requested bump.
///
/// Numeric bumps clear every lower field and any pre-release marker.
/// Pre-release bumps keep the release triple, increment the requested
/// channel's counter and clear the other channels, so moving from
/// `alpha.3` to beta lands on `beta.1`. Channel order is not enforced.
pub fn bump(current: &Semver, kind: BumpKind) -> Semver {
    match kind {
        BumpKind::Major => Semver::new(current.major.saturating_add(1), 0, 0),
        BumpKind::Minor => Semver::new(current.major, current.minor.saturating_add(1), 0),
        BumpKind::Patch => Semver::new(
            current.major,
            current.minor,
            current.patch.saturating_add(1),
        ),
        BumpKind::PreRelease(channel) => current
            .release()
            .with_pre(channel, current.counter(channel).saturating_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Semver {
        Semver::parse(s).unwrap()
    }

    #[test]
    fn test_bump_major() {
        assert_eq!(bump(&v("v1.2.3"), BumpKind::Major), v("v2.0.0"));
        assert_eq!(bump(&v("v1.2.3-rc.2"), BumpKind::Major), v("v2.0.0"));
    }

    #[test]
    fn test_bump_minor() {
        assert_eq!(bump(&v("v1.2.3"), BumpKind::Minor), v("v1.3.0"));
        assert_eq!(bump(&v("v1.2.3-beta.1"), BumpKind::Minor), v("v1.3.0"));
    }

    #[test]
    fn test_bump_patch_clears_pre_release() {
        assert_eq!(bump(&v("v1.2.3"), BumpKind::Patch), v("v1.2.4"));
        assert_eq!(bump(&v("v1.2.3-alpha.2"), BumpKind::Patch), v("v1.2.4"));
    }

    #[test]
    fn test_bump_alpha_from_release() {
        assert_eq!(bump(&v("v1.2.3"), BumpKind::ALPHA), v("v1.2.3-alpha.1"));
    }

    #[test]
    fn test_bump_same_channel_increments() {
        assert_eq!(
            bump(&v("v1.2.3-alpha.1"), BumpKind::ALPHA),
            v("v1.2.3-alpha.2")
        );
        assert_eq!(bump(&v("v1.2.3-rc.4"), BumpKind::RC), v("v1.2.3-rc.5"));
    }

    #[test]
    fn test_bump_cross_channel_restarts_counter() {
        assert_eq!(
            bump(&v("v1.2.3-alpha.1"), BumpKind::BETA),
            v("v1.2.3-beta.1")
        );
        assert_eq!(bump(&v("v1.2.3-beta.7"), BumpKind::RC), v("v1.2.3-rc.1"));
    }

    #[test]
    fn test_bump_backwards_channel_is_allowed() {
        assert_eq!(
            bump(&v("v1.2.3-rc.2"), BumpKind::ALPHA),
            v("v1.2.3-alpha.1")
        );
    }

    #[test]
    fn test_bump_does_not_touch_input() {
        let current = v("v1.2.3");
        let _ = bump(&current, BumpKind::Major);
        assert_eq!(current, v("v1.2.3"));
    }

    #[test]
    fn test_bump_kind_display() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!(BumpKind::RC.to_string(), "rc");
    }
}

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::BumpKind;

#[derive(Parser, Debug)]
#[command(
    name = "semver",
    version,
    about = "Manage a project's semantic version in a version file and git tags"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom settings file path")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Initialize the version file from an explicit version, the latest git tag, or v0.0.1
    Init {
        #[arg(help = "Initial version, e.g. v1.0.0 or 1.0.0-beta.1")]
        version: Option<String>,
    },

    /// Display the current version
    #[command(visible_alias = "display")]
    Get {
        #[arg(long, help = "Also show where the version came from")]
        source: bool,
    },

    /// Bump the version and tag it
    Bump {
        #[arg(value_enum)]
        kind: BumpArg,
    },

    /// Set an explicit version and tag it
    Set {
        #[arg(help = "New version, e.g. v2.0.0")]
        version: String,
    },

    /// Remove the version file
    Reset {
        #[arg(long, help = "Also delete local git tags that are versions")]
        tags: bool,

        #[arg(short, long, help = "Skip confirmation prompts")]
        yes: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
pub enum BumpArg {
    Major,
    Minor,
    Patch,
    Alpha,
    Beta,
    Rc,
}

impl From<BumpArg> for BumpKind {
    fn from(arg: BumpArg) -> Self {
        match arg {
            BumpArg::Major => BumpKind::Major,
            BumpArg::Minor => BumpKind::Minor,
            BumpArg::Patch => BumpKind::Patch,
            BumpArg::Alpha => BumpKind::ALPHA,
            BumpArg::Beta => BumpKind::BETA,
            BumpArg::Rc => BumpKind::RC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bump() {
        let cli = Cli::try_parse_from(["semver", "bump", "beta"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Bump {
                kind: BumpArg::Beta
            }
        );
        assert_eq!(BumpKind::from(BumpArg::Beta), BumpKind::BETA);
    }

    #[test]
    fn test_parse_rejects_unknown_channel() {
        assert!(Cli::try_parse_from(["semver", "bump", "gamma"]).is_err());
    }

    #[test]
    fn test_display_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["semver", "display", "--source", "-vv"]).unwrap();
        assert_eq!(cli.command, Command::Get { source: true });
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_init_version_is_optional() {
        let cli = Cli::try_parse_from(["semver", "init"]).unwrap();
        assert_eq!(cli.command, Command::Init { version: None });

        let cli = Cli::try_parse_from(["semver", "init", "v1.0.0"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Init {
                version: Some("v1.0.0".to_string())
            }
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

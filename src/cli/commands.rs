//! Command workflows
//!
//! Each command resolves, changes and publishes a version through the
//! engine, printing progress through [crate::ui]. Argument parsing lives in
//! [super::args]; these functions can be driven with any store and
//! repository, which keeps them testable with the in-memory
//! implementations.

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::args::Command;
use crate::domain::{bump, BumpKind, Context, Semver};
use crate::engine::{Resolver, SyncCoordinator, SyncReport};
use crate::git::Repository;
use crate::notice::Notice;
use crate::settings::Settings;
use crate::store::VersionStore;
use crate::ui;

/// Result of a command that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A version was written (and possibly committed and tagged)
    Synced(SyncReport),
    /// The current version was displayed
    Displayed(Context),
    /// The version file was removed
    Reset {
        removed_tags: Vec<String>,
        kept_tags: Vec<String>,
    },
    /// Nothing to do; the notice explains why
    Stopped(Notice),
}

/// Everything a command needs, passed explicitly
pub struct Workspace<'a, S: ?Sized, R: ?Sized> {
    pub store: &'a S,
    pub repo: &'a R,
    pub settings: &'a Settings,
}

impl<'a, S, R> Workspace<'a, S, R>
where
    S: VersionStore + ?Sized,
    R: Repository + ?Sized,
{
    pub fn new(store: &'a S, repo: &'a R, settings: &'a Settings) -> Self {
        Workspace {
            store,
            repo,
            settings,
        }
    }

    /// Dispatch a parsed command
    pub fn execute(&self, command: &Command) -> Result<CommandOutcome> {
        debug!(?command, "executing command");
        match command {
            Command::Init { version } => self.init(version.as_deref()),
            Command::Get { source } => self.get(*source),
            Command::Bump { kind } => self.bump((*kind).into()),
            Command::Set { version } => self.set(version),
            Command::Reset { tags, yes } => self.reset(*tags, *yes),
        }
    }

    /// Create the version file from an explicit version, the latest git tag
    /// or the default, then publish it.
    pub fn init(&self, version: Option<&str>) -> Result<CommandOutcome> {
        if self.store.exists() {
            return Ok(stop(Notice::AlreadyInitialized));
        }

        ui::display_status("initializing configuration...");
        let resolution = Resolver::new(self.store, self.repo).initial(version)?;
        for notice in &resolution.notices {
            ui::display_notice(notice);
        }

        let report = self.publish(&resolution.version, resolution.use_git_tag)?;
        ui::display_success(
            "semver configuration initialized successfully. run `semver get` to display the current version.",
        );
        Ok(CommandOutcome::Synced(report))
    }

    /// Print the current version
    pub fn get(&self, show_source: bool) -> Result<CommandOutcome> {
        let ctx = Resolver::new(self.store, self.repo).current()?;
        if !ctx.is_tracked() {
            return Ok(stop(Notice::NotInitialized));
        }

        println!("{}", ui::format_version(&ctx, show_source));
        Ok(CommandOutcome::Displayed(ctx))
    }

    /// Bump the current version and publish it
    pub fn bump(&self, kind: BumpKind) -> Result<CommandOutcome> {
        let ctx = Resolver::new(self.store, self.repo).current()?;
        if !ctx.is_tracked() {
            return Ok(stop(Notice::NotInitialized));
        }

        let next = bump(&ctx.version, kind);
        ui::display_status(&format!("bumping {}: {} -> {}", kind, ctx.version, next));
        let report = self.publish(&next, false)?;
        Ok(CommandOutcome::Synced(report))
    }

    /// Publish an explicit version
    pub fn set(&self, version: &str) -> Result<CommandOutcome> {
        let version = Semver::parse(version).context("invalid version")?;
        ui::display_status(&format!("setting current version: {} ...", version));
        let report = self.publish(&version, false)?;
        Ok(CommandOutcome::Synced(report))
    }

    /// Remove the version file and, when asked, the version tags
    pub fn reset(&self, delete_tags: bool, assume_yes: bool) -> Result<CommandOutcome> {
        self.store
            .remove()
            .context("error removing configuration file")?;
        ui::display_success(&format!("removed {}", self.store.path().display()));

        let tags = self.version_tags()?;
        if tags.is_empty() {
            return Ok(CommandOutcome::Reset {
                removed_tags: Vec::new(),
                kept_tags: Vec::new(),
            });
        }

        let confirmed = delete_tags && {
            ui::display_tags(&tags);
            assume_yes || ui::confirm_action("Delete these tags?")?
        };

        if !confirmed {
            ui::display_notice(&Notice::TagsLeftBehind { tags: tags.clone() });
            return Ok(CommandOutcome::Reset {
                removed_tags: Vec::new(),
                kept_tags: tags,
            });
        }

        for tag in &tags {
            self.repo
                .delete_tag(tag)
                .with_context(|| format!("error deleting git tag {}", tag))?;
        }
        ui::display_success(&format!("deleted {} git tag(s)", tags.len()));
        Ok(CommandOutcome::Reset {
            removed_tags: tags,
            kept_tags: Vec::new(),
        })
    }

    fn publish(&self, version: &Semver, use_git_tag: bool) -> Result<SyncReport> {
        let report = SyncCoordinator::new(self.store, self.repo, &self.settings.git)
            .sync(version, use_git_tag)
            .map_err(|e| {
                if e.is_conflict() {
                    anyhow::Error::new(e)
                        .context("error creating git tag: check if the tag already exists")
                } else {
                    anyhow::Error::new(e)
                }
            })?;
        ui::display_sync_report(&report);
        Ok(report)
    }

    /// Local tags that parse as versions
    fn version_tags(&self) -> Result<Vec<String>> {
        if !self.repo.is_repository() {
            return Ok(Vec::new());
        }
        let tags = self.repo.list_tags().context("error listing git tags")?;
        Ok(tags
            .into_iter()
            .filter(|tag| Semver::parse(tag).is_ok())
            .collect())
    }
}

fn stop(notice: Notice) -> CommandOutcome {
    ui::display_notice(&notice);
    CommandOutcome::Stopped(notice)
}

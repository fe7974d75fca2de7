//! Pure formatting functions for UI output.
//!
//! This module contains all display logic separated from user interaction.
//! Styling comes from `console`, which drops colours when the stream is not
//! a terminal.

use console::style;

use crate::domain::Context;
use crate::engine::SyncReport;
use crate::notice::Notice;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print an informational notice.
pub fn display_notice(notice: &Notice) {
    println!("{} {}", style("ℹ").cyan(), notice);
}

/// Render the current version, optionally followed by its source.
///
/// Plain text so scripts can capture it (`$(semver get)`).
pub fn format_version(ctx: &Context, show_source: bool) -> String {
    if show_source {
        format!("{} (source: {})", ctx.version, ctx.source)
    } else {
        ctx.version.to_string()
    }
}

/// Describe what a sync did.
///
/// # Arguments
/// * `report` - Outcome of the sync
pub fn display_sync_report(report: &SyncReport) {
    if report.committed {
        display_success(&format!("committed version file for {}", report.version));
    }
    match &report.tag {
        Some(tag) => display_success(&format!("created git tag {}", style(tag).green())),
        None => display_success(&format!("version set to {}", report.version)),
    }
}

/// Display the tags that would be deleted by a reset.
pub fn display_tags(tags: &[String]) {
    println!("{}", style("Version tags:").bold());
    for tag in tags {
        println!("  - {}", tag);
    }
}

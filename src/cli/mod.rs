//! Command-line surface
//!
//! `args` holds the clap definitions; `commands` holds the workflows so they
//! can be called programmatically without going through argument parsing.

pub mod args;
pub mod commands;

pub use args::{BumpArg, Cli, Command};
pub use commands::{CommandOutcome, Workspace};

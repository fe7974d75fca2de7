use anyhow::{Context, Result};
use clap::Parser;

use verman::cli::{Cli, Workspace};
use verman::git::Git2Repository;
use verman::settings::load_settings;
use verman::store::TomlFileStore;
use verman::{logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref()).context("Error loading settings")?;

    let root = std::env::current_dir().context("cannot determine current directory")?;
    let store = TomlFileStore::in_dir(&root, &settings.version_file);
    let repo = Git2Repository::discover(&root);

    Workspace::new(&store, &repo, &settings).execute(&cli.command)?;
    Ok(())
}

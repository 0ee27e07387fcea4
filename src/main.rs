mod changelog_md;
mod cli;
mod deb;
mod error;
mod release_notes;
mod rpm;
mod ui;

use changelog::ReleaseConfig;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    let config = ReleaseConfig::default();

    let result = match cli.command {
        Commands::UpdateRpm {
            version,
            draft,
            verbose,
        } => rpm::execute(&config, version, draft, verbose),
        Commands::UpdateDeb {
            version,
            draft,
            verbose,
        } => deb::execute(&config, version, draft, verbose),
        Commands::UpdateReleaseNotes {
            version,
            draft,
            verbose,
        } => release_notes::execute(&config, version, draft, verbose),
        Commands::UpdateChangelogMd {
            version,
            draft,
            verbose,
        } => changelog_md::execute(&config, version, draft, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

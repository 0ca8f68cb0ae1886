mod cli;
mod cli_modes;
mod common;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use jrnl_core::{Config, Journal, JournalStore};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jrnl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    common::init_logging();

    let config = Config::load()?.with_journal_file(cli.file.clone());
    debug!(journal_file = %config.journal_file.display(), "using journal file");
    let journal = Journal::with_config(&config)?;
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli_modes::use_color(&cli),
        style: cli.style(),
    }));

    match &cli.command {
        Some(Command::Add {
            title,
            content,
            tags,
        }) => cli_modes::add_mode(&renderer, &journal, title, content, tags.as_deref()),
        Some(Command::List { .. }) => {
            cli_modes::list_mode(&renderer, &journal);
            Ok(())
        }
        Some(Command::Delete { id }) => cli_modes::delete_mode(&renderer, &journal, id),
        Some(Command::Path) => {
            renderer.print_info(&format!("{}", journal.store.location().display()));
            Ok(())
        }
        None => cli_modes::interactive_mode(&renderer, &journal),
    }
}

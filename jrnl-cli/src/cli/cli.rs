use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::{ColorMode, Style};

/// jrnl — Tiny personal journal kept in a JSON file
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Journal file to use instead of the configured one (default `./journal.json`).
    #[arg(long, short, global = true, env = "JRNL_FILE")]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Without a command, jrnl asks for a title, content and tags, then shows the journal.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Adds a new entry (e.g., `jrnl add Trip "Went hiking" --tags outdoors,weekend`).
    /// Without `--tags` you will be asked for them.
    Add {
        title: String,
        content: String,
        /// Comma separated tags (e.g., `--tags "travel, family"`).
        #[arg(long, short)]
        tags: Option<String>,
    },
    /// Lists every entry, oldest first.
    List {
        /// Output style: "long" or "short". Short style prints one line per entry.
        #[arg(long, short, value_enum, env = "JRNL_STYLE", default_value_t = Style::Long)]
        style: Style,
    },
    /// Deletes the entry with the given id (as printed by `jrnl list`).
    Delete { id: String },
    /// Prints the path of the journal file.
    Path,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    pub fn style(&self) -> Style {
        match self.command {
            Some(Command::List { style }) => style,
            _ => Style::Long,
        }
    }
}

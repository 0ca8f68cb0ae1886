use super::{add_mode::save_entry, list_mode};
use crate::{common::prompt_line, render::Renderer};
use anyhow::Result;
use jrnl_core::{Journal, JournalStore, JournalWriteEntry, parse_tags};
use std::io;

/// Asks for a title, content and tags, saves the entry and shows the whole journal.
pub fn interactive_mode<S: JournalStore>(renderer: &Renderer, journal: &Journal<S>) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let Some(title) = prompt_line(&mut input, &mut output, "Title: ")? else {
        println!();
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(());
    };
    let content = prompt_line(&mut input, &mut output, "Content: ")?.unwrap_or_default();
    let tags = prompt_line(&mut input, &mut output, "Tags (comma separated): ")?
        .as_deref()
        .map(parse_tags)
        .unwrap_or_default();

    let saved = save_entry(
        renderer,
        journal,
        JournalWriteEntry {
            title,
            content,
            tags,
        },
    );
    if saved {
        println!("\nYour journal:");
        list_mode(renderer, journal);
    }
    Ok(())
}

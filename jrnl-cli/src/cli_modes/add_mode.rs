use crate::{common::prompt_line, render::Renderer};
use anyhow::Result;
use jrnl_core::{Journal, JournalStore, JournalWriteEntry, parse_tags};
use std::io;

pub fn add_mode<S: JournalStore>(
    renderer: &Renderer,
    journal: &Journal<S>,
    title: &str,
    content: &str,
    tags: Option<&str>,
) -> Result<()> {
    let tags = match tags {
        Some(tags) => parse_tags(tags),
        None => {
            let answer = prompt_line(
                &mut io::stdin().lock(),
                &mut io::stdout(),
                "Tags (comma separated): ",
            )?;
            answer.as_deref().map(parse_tags).unwrap_or_default()
        }
    };

    save_entry(
        renderer,
        journal,
        JournalWriteEntry {
            title: title.to_string(),
            content: content.to_string(),
            tags,
        },
    );
    Ok(())
}

/// Adds the entry and reports the outcome. A failed save is reported, not returned.
pub(super) fn save_entry<S: JournalStore>(
    renderer: &Renderer,
    journal: &Journal<S>,
    input: JournalWriteEntry,
) -> bool {
    match journal.add(input) {
        Ok(entry) => {
            renderer.print_info(&format!("Entry saved with id {}", entry.id));
            true
        }
        Err(error) => {
            renderer.print_error(&format!("Could not save journal: {error:#}"));
            false
        }
    }
}

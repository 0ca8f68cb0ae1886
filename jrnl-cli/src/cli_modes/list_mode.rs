use crate::render::Renderer;
use jrnl_core::{Journal, JournalStore};

pub fn list_mode<S: JournalStore>(renderer: &Renderer, journal: &Journal<S>) {
    let result = journal.list();
    if result.entries.is_empty() {
        renderer.print_info("No journal entries found.");
    } else {
        renderer.print_entries(&result);
    }
    if !result.errors.is_empty() {
        renderer.print_errors(&result.errors);
    }
}

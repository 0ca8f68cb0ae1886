use crate::render::Renderer;
use anyhow::Result;
use jrnl_core::{DeleteOutcome, Journal, JournalStore};

pub fn delete_mode<S: JournalStore>(
    renderer: &Renderer,
    journal: &Journal<S>,
    id: &str,
) -> Result<()> {
    match journal.delete(id) {
        Ok(DeleteOutcome::Deleted(entry)) => {
            renderer.print_info(&format!("Deleted entry {} ({})", entry.id, entry.title));
        }
        Ok(DeleteOutcome::NotFound) => {
            renderer.print_info(&format!("No entry found with id {id}"));
        }
        Err(error) => {
            renderer.print_error(&format!("Could not save journal: {error:#}"));
        }
    }
    Ok(())
}

use super::{Style, theme::JournalTheme};
use jrnl_core::{JournalEntry, JournalQueryResult, QueryError};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

const SEPARATOR_WIDTH: usize = 40;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub style: Style,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: JournalTheme::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    use_color: true,
                    style: Style::Long,
                },
            },
        }
    }

    /// Fixed markdown only. Never pass user text here.
    fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(JournalTheme::INFO));
        } else {
            println!("{}", message);
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(JournalTheme::ERROR));
        } else {
            eprintln!("{}", message);
        }
    }

    pub fn print_entry_line(&self, entry: &JournalEntry) {
        println!("{}", format_entry_line(entry, self.opts.use_color));
    }

    pub fn print_entries(&self, result: &JournalQueryResult) {
        for entry in &result.entries {
            if let Style::Short = self.opts.style {
                self.print_entry_line(entry);
                continue;
            }

            if self.opts.use_color {
                print!("{}", format_colored_entry(entry));
                self.print_md("---");
            } else {
                print!("{}", format_plain_entry(entry));
            }
        }
    }

    pub fn print_errors(&self, errors: &[QueryError]) {
        if self.opts.use_color {
            println!();
            self.print_md("# Warnings:");
        } else {
            println!("\nWarnings:");
        }
        for error in errors {
            let message = match error {
                QueryError::FileError { path, error } => {
                    format!("* Could not read '{}': {:#}", path.display(), error)
                }
                QueryError::Corrupt { path, error } => format!(
                    "* '{}' is not a valid journal, it was read as empty: {}",
                    path.display(),
                    error
                ),
                QueryError::InvalidRecord { path, error } => {
                    format!("* In '{}': {}", path.display(), error)
                }
            };
            println!("{}", message);
        }
    }
}

/// `date title [tags] (id)`
fn format_entry_line(entry: &JournalEntry, use_color: bool) -> String {
    if !use_color {
        let tags = if entry.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", entry.tags.join(" - "))
        };
        return format!("{} {}{} ({})", entry.date, entry.title, tags, entry.id);
    }

    let tags = if entry.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", print_colored_list(&entry.tags).join(" - "))
    };
    format!(
        "{} {}{} ({})",
        entry.date.as_str().with(JournalTheme::DATE),
        entry.title.as_str().with(JournalTheme::TITLE),
        tags,
        entry.id.as_str().with(JournalTheme::MUTED)
    )
}

fn format_colored_entry(entry: &JournalEntry) -> String {
    let mut out = format!(
        "{}\n{}\n",
        entry.date.as_str().with(JournalTheme::DATE),
        entry.title.as_str().with(JournalTheme::TITLE).bold()
    );
    if !entry.content.trim().is_empty() {
        out.push_str(entry.content.trim_end());
        out.push('\n');
    }
    if !entry.tags.is_empty() {
        out.push_str(&format!("[{}]\n", print_colored_list(&entry.tags).join(" - ")));
    }
    out.push_str(&format!(
        "{}\n",
        format!("id: {}", entry.id).with(JournalTheme::MUTED)
    ));
    out
}

/// Date, title, content, tags and id on their own lines, then a separator.
fn format_plain_entry(entry: &JournalEntry) -> String {
    let mut out = format!("{}\n{}\n{}\n", entry.date, entry.title, entry.content);
    if !entry.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", entry.tags.join(", ")));
    }
    out.push_str(&format!("id: {}\n", entry.id));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}

pub fn print_colored_list(values: &[String]) -> Vec<String> {
    values.iter().map(|v| colorize_value(v)).collect()
}

fn colorize_value(val: &str) -> String {
    let palette = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::DarkRed,
        Color::DarkGreen,
        Color::DarkYellow,
        Color::DarkBlue,
        Color::DarkMagenta,
        Color::DarkCyan,
    ];

    // FNV-1a, so a tag keeps its color between runs.
    fn stable_index(s: &str, modulo: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in s.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % modulo
    }

    let idx = stable_index(val, palette.len());
    format!("{}", val.with(palette[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tags: &[&str]) -> JournalEntry {
        JournalEntry {
            title: "Trip".to_string(),
            content: "Went hiking".to_string(),
            date: "2025-08-15 10:00:00".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            id: "abc".to_string(),
        }
    }

    #[test]
    fn plain_entry_lists_every_field() {
        let s = format_plain_entry(&entry(&["outdoors", "weekend"]));
        assert_eq!(
            s,
            format!(
                "2025-08-15 10:00:00\nTrip\nWent hiking\ntags: outdoors, weekend\nid: abc\n{}\n",
                "-".repeat(40)
            )
        );
    }

    #[test]
    fn plain_entry_without_tags_skips_tag_line() {
        let s = format_plain_entry(&entry(&[]));
        assert!(!s.contains("tags:"));
        assert!(s.contains("id: abc\n"));
    }

    #[test]
    fn plain_line_has_date_title_tags_and_id() {
        let s = format_entry_line(&entry(&["a", "b"]), false);
        assert_eq!(s, "2025-08-15 10:00:00 Trip [a - b] (abc)");
    }

    #[test]
    fn colored_entry_keeps_markdown_characters_verbatim() {
        let mut e = entry(&[]);
        e.title = "a | b *c*".to_string();
        e.content = "# not a heading\n| not | a table |".to_string();

        let s = format_colored_entry(&e);

        assert!(s.contains("a | b *c*"));
        assert!(s.contains("# not a heading\n| not | a table |\n"));
        assert!(s.contains("id: abc"));
    }

    #[test]
    fn same_tag_gets_same_color() {
        assert_eq!(colorize_value("travel"), colorize_value("travel"));
    }
}

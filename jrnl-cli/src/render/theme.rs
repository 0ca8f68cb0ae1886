use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Colors for journal output. Markdown only ever renders our own fixed text
/// (section headings and rules); user fields are styled directly.
pub struct JournalTheme;

impl JournalTheme {
    pub const DATE: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    };
    pub const TITLE: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    };
    pub const MUTED: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    };
    pub const INFO: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    };
    pub const ERROR: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    };

    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.headers[0].set_fg(Self::ERROR);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;
        skin.horizontal_rule.set_fg(Self::MUTED);
        skin
    }
}

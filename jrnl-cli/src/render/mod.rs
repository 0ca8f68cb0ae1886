mod color_mode;
mod renderer;
mod style;
mod theme;

pub use color_mode::ColorMode;
pub use renderer::{RenderOptions, Renderer};
pub use style::Style;

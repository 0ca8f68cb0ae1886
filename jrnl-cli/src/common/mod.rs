mod logging;
mod prompt;

pub use logging::init_logging;
pub use prompt::prompt_line;

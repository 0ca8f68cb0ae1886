mod add_mode;
mod delete_mode;
mod interactive_mode;
mod list_mode;
mod use_color;

pub use add_mode::add_mode;
pub use delete_mode::delete_mode;
pub use interactive_mode::interactive_mode;
pub use list_mode::list_mode;
pub use use_color::use_color;

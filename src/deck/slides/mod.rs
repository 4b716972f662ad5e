//! Slide renderers - one per SlideSpec variant

pub mod content;
pub mod table;
pub mod title;
pub mod two_column;

pub use content::render_content;
pub use table::render_table;
pub use title::render_title;
pub use two_column::render_two_column;

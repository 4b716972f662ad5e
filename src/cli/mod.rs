pub mod args;

pub use args::{parse_slide_range, Args, SlideSize};

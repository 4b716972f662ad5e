//! Deck building: SlideSpec -> Canvas

pub mod builder;
pub mod layout;
pub mod slides;

pub use builder::build_deck;
pub use layout::{Placeholders, SlideLayout};

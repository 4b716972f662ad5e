//! Render slide decks described as structured content to PDF.
//!
//! The pipeline has two stages. [`deck::build_deck`] turns an ordered list of
//! [`model::SlideSpec`]s into a [`model::Canvas`], the fully positioned
//! document model: slides, shapes, paragraphs and tables with explicit
//! geometry in mm and typography in points. [`render::render_pdf`] then walks
//! the canvas and emits one PDF page per slide.
//!
//! ```no_run
//! use deck_to_pdf::{config::Settings, model::DeckSpec, render_deck};
//!
//! # fn main() -> anyhow::Result<()> {
//! let deck = DeckSpec::builtin()?;
//! let settings = Settings::default();
//! let pdf = render_deck(&deck, &settings)?;
//! std::fs::write("deck.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod model;
pub mod render;

pub use error::{BuildError, DeckError, RenderError, SpecError};

use config::Settings;
use model::DeckSpec;

/// Build and render a whole deck in one call.
///
/// Returns uncompressed PDF bytes; pass them through
/// [`render::compress_pdf`] to shrink the output.
pub fn render_deck(deck: &DeckSpec, settings: &Settings) -> Result<Vec<u8>, DeckError> {
    let canvas = deck::build_deck(settings, deck.document_title(), &deck.slides)?;
    let bytes = render::render_pdf(&canvas, settings)?;
    Ok(bytes)
}

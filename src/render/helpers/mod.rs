//! Low-level rendering helpers

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use compress::compress_pdf;
pub use fonts::FontSet;
pub use layer::LayerBuilder;
pub use text_metrics::BuiltinFontMeasurer;

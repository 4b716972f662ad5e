//! PDF rendering

pub mod helpers;
pub mod pdf;

pub use helpers::compress_pdf;
pub use pdf::{render_pdf, save_pdf, PdfRenderer};

//! Color helpers for PDF rendering

use printpdf::{Color, Rgb};

/// Convert an (r, g, b) triple in 0.0..=1.0 into a printpdf color.
pub fn rgb(components: (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb {
        r: components.0,
        g: components.1,
        b: components.2,
        icc_profile: None,
    })
}

pub fn black() -> Color {
    rgb((0.0, 0.0, 0.0))
}

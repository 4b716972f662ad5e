//! Text measurement for the builtin base-14 fonts
//!
//! Glyph advance widths come from the Adobe AFM files for Helvetica and
//! Helvetica-Bold, in 1/1000 em units. Only the ASCII range is tabulated;
//! everything else falls back to an average width, which is good enough for
//! centering and fit checks.

use printpdf::BuiltinFont;
use std::sync::OnceLock;

const PT_TO_MM: f32 = 0.3528;

/// Advance width of a glyph that is not in the table, in 1/1000 em.
const FALLBACK_WIDTH: u16 = 556;

/// Bullet (U+2022) advance width, same in Helvetica and Helvetica-Bold.
const BULLET_WIDTH: u16 = 350;

/// Helvetica AFM widths for code points 0..=127, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold AFM widths for code points 0..=127, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

/// Measures text set in one of the Helvetica builtin fonts.
pub struct BuiltinFontMeasurer {
    widths: &'static [u16; 128],
    cap_height: u16,
}

impl BuiltinFontMeasurer {
    fn helvetica() -> Self {
        Self {
            widths: &HELVETICA_WIDTHS,
            cap_height: 718,
        }
    }

    fn helvetica_bold() -> Self {
        Self {
            widths: &HELVETICA_BOLD_WIDTHS,
            cap_height: 718,
        }
    }

    /// Pick the measurer matching a builtin font. Oblique variants share
    /// their upright metrics.
    pub fn for_font(font: BuiltinFont) -> &'static Self {
        static REGULAR: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
        static BOLD: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
        match font {
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                BOLD.get_or_init(Self::helvetica_bold)
            }
            _ => REGULAR.get_or_init(Self::helvetica),
        }
    }

    fn glyph_width(&self, c: char) -> u16 {
        if c == '\u{2022}' {
            return BULLET_WIDTH;
        }
        match self.widths.get(c as usize) {
            Some(&w) if w > 0 => w,
            Some(_) if c == '\u{7f}' => 0,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` at `font_size` points, returned in millimeters.
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c) as u32).sum();
        units as f32 / 1000.0 * font_size * PT_TO_MM
    }

    /// Cap height at `font_size` points, in millimeters.
    pub fn cap_height_mm(&self, font_size: f32) -> f32 {
        self.cap_height as f32 / 1000.0 * font_size * PT_TO_MM
    }
}

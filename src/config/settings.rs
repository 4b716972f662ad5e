use crate::cli::Args;

use super::defaults::*;

/// Runtime settings shared by the deck builder and the PDF renderer.
///
/// Geometry is in mm, font sizes in points. All four slide renderers read
/// from the same settings so a deck is internally consistent.
#[derive(Debug, Clone)]
pub struct Settings {
    // Canvas dimensions
    pub slide_width: f32,
    pub slide_height: f32,
    pub margin: f32,

    // Typography (points)
    pub title_slide_font_size: f32,
    pub subtitle_font_size: f32,
    pub banner_font_size: f32,
    pub body_font_size: f32,
    pub column_font_size: f32,
    pub table_header_font_size: f32,
    pub table_body_font_size: f32,

    // Paragraph spacing
    pub column_space_after: f32,
    pub column_gap: f32,
    pub line_height_mult: f32,

    // Table geometry
    pub table_top: f32,

    // Colors (RGB 0.0-1.0)
    pub text_color: (f32, f32, f32),
    pub header_fill_color: (f32, f32, f32),
    pub header_text_color: (f32, f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slide_width: STANDARD_SLIDE_WIDTH,
            slide_height: STANDARD_SLIDE_HEIGHT,
            margin: DEFAULT_SLIDE_MARGIN,

            title_slide_font_size: DEFAULT_TITLE_SLIDE_FONT_SIZE,
            subtitle_font_size: DEFAULT_SUBTITLE_FONT_SIZE,
            banner_font_size: DEFAULT_BANNER_FONT_SIZE,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            column_font_size: DEFAULT_COLUMN_FONT_SIZE,
            table_header_font_size: DEFAULT_TABLE_HEADER_FONT_SIZE,
            table_body_font_size: DEFAULT_TABLE_BODY_FONT_SIZE,

            column_space_after: DEFAULT_COLUMN_SPACE_AFTER,
            column_gap: DEFAULT_COLUMN_GAP,
            line_height_mult: LINE_HEIGHT_MULT,

            table_top: DEFAULT_TABLE_TOP,

            text_color: TEXT_COLOR,
            header_fill_color: HEADER_FILL_COLOR,
            header_text_color: HEADER_TEXT_COLOR,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        let (slide_width, slide_height) = args.slide_dimensions();
        Self {
            slide_width,
            slide_height,
            ..Default::default()
        }
    }

    /// Usable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.slide_width - 2.0 * self.margin
    }
}

/// Standard slide width in mm (10 in)
pub const STANDARD_SLIDE_WIDTH: f32 = 254.0;

/// Standard slide height in mm (7.5 in)
pub const STANDARD_SLIDE_HEIGHT: f32 = 190.5;

/// Slide margin in mm (0.5 in)
pub const DEFAULT_SLIDE_MARGIN: f32 = 12.7;

/// Title font size on the title slide, in points
pub const DEFAULT_TITLE_SLIDE_FONT_SIZE: f32 = 40.0;

/// Subtitle font size on the title slide, in points
pub const DEFAULT_SUBTITLE_FONT_SIZE: f32 = 20.0;

/// Font size of manually placed title banners, in points
pub const DEFAULT_BANNER_FONT_SIZE: f32 = 32.0;

/// Body paragraph font size on content slides, in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 18.0;

/// Column paragraph font size on two-column slides, in points
pub const DEFAULT_COLUMN_FONT_SIZE: f32 = 14.0;

/// Gap after each column paragraph, in points
pub const DEFAULT_COLUMN_SPACE_AFTER: f32 = 12.0;

/// Horizontal gap between the two columns, in mm (0.5 in)
pub const DEFAULT_COLUMN_GAP: f32 = 12.7;

/// Header row font size in tables, in points
pub const DEFAULT_TABLE_HEADER_FONT_SIZE: f32 = 14.0;

/// Data row font size in tables, in points
pub const DEFAULT_TABLE_BODY_FONT_SIZE: f32 = 12.0;

/// Distance from slide top to the table grid, in mm (1.8 in)
pub const DEFAULT_TABLE_TOP: f32 = 45.72;

/// Solid fill behind table header cells (RGB 79, 129, 189)
pub const HEADER_FILL_COLOR: (f32, f32, f32) = (0.310, 0.506, 0.741);

/// Header cell text color
pub const HEADER_TEXT_COLOR: (f32, f32, f32) = (1.0, 1.0, 1.0);

/// Default text color
pub const TEXT_COLOR: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Baseline-to-baseline spacing as a multiple of the font size
pub const LINE_HEIGHT_MULT: f32 = 1.3;

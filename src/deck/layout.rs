//! Slide layouts
//!
//! Two kinds of geometry feed the slide renderers. Template layouts
//! (`SlideLayout::Title`, `SlideLayout::TitleAndBody`) hand out placeholder
//! regions the way a host presentation template would; the blank layout has no
//! placeholders, and renderers that use it place shapes at absolute
//! coordinates obtained from the helpers below. All regions derive from
//! `Settings` so both slide sizes share one set of rules.

use crate::config::Settings;
use crate::model::Rect;

/// Placeholder regions supplied by a template layout.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders {
    pub title: Rect,
    pub subtitle: Option<Rect>,
    pub body: Option<Rect>,
}

/// The layout a slide renderer starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title + subtitle placeholders
    Title,
    /// Top title placeholder + body placeholder
    TitleAndBody,
    /// No placeholders; absolute geometry only
    Blank,
}

impl SlideLayout {
    /// Placeholder regions for this layout, or `None` for the blank layout.
    pub fn placeholders(&self, settings: &Settings) -> Option<Placeholders> {
        let width = settings.content_width();
        let margin = settings.margin;

        match self {
            SlideLayout::Title => Some(Placeholders {
                // Centered pair in the upper middle of the slide
                title: Rect::new(margin, 63.5, width, 25.4),
                subtitle: Some(Rect::new(margin, 95.25, width, 50.8)),
                body: None,
            }),
            SlideLayout::TitleAndBody => {
                let body_top = 38.1;
                Some(Placeholders {
                    title: Rect::new(margin, margin, width, 20.32),
                    subtitle: None,
                    body: Some(Rect::new(
                        margin,
                        body_top,
                        width,
                        settings.slide_height - body_top - margin,
                    )),
                })
            }
            SlideLayout::Blank => None,
        }
    }
}

/// Title banner box for blank-layout slides (0.5in inset, 0.8in tall).
pub fn banner(settings: &Settings) -> Rect {
    Rect::new(
        settings.margin,
        settings.margin,
        settings.content_width(),
        20.32,
    )
}

/// The two column boxes for a two-column slide, left then right.
///
/// Both share one width; the right box starts one gap after the left box
/// ends, so the pair never overlaps. No reflow: long content silently
/// overflows the box.
pub fn columns(settings: &Settings) -> (Rect, Rect) {
    let top = 38.1;
    let height = 127.0;
    let width = (settings.content_width() - settings.column_gap) / 2.0;
    let left = Rect::new(settings.margin, top, width, height);
    let right = Rect::new(left.right() + settings.column_gap, top, width, height);
    (left, right)
}

/// Table grid area for a table slide (1in inset at reference size).
pub fn table_area(settings: &Settings) -> Rect {
    let x = 2.0 * settings.margin;
    Rect::new(
        x,
        settings.table_top,
        settings.slide_width - 2.0 * x,
        settings.slide_height - settings.table_top - 2.0 * settings.margin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_do_not_overlap() {
        let settings = Settings::default();
        let (left, right) = columns(&settings);
        assert!(left.right() <= right.x);
        assert!(!left.overlaps_horizontally(&right));
        assert!((left.width - right.width).abs() < f32::EPSILON);
    }

    #[test]
    fn test_regions_inside_canvas() {
        let settings = Settings::default();
        let all = [
            banner(&settings),
            columns(&settings).0,
            columns(&settings).1,
            table_area(&settings),
        ];
        for rect in all {
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.right() <= settings.slide_width + 0.01);
            assert!(rect.bottom() <= settings.slide_height + 0.01);
        }
    }

    #[test]
    fn test_blank_layout_has_no_placeholders() {
        let settings = Settings::default();
        assert!(SlideLayout::Blank.placeholders(&settings).is_none());
        assert!(SlideLayout::Title.placeholders(&settings).is_some());

        let ph = SlideLayout::TitleAndBody.placeholders(&settings).unwrap();
        assert!(ph.body.is_some());
        assert!(ph.subtitle.is_none());
    }
}

//! Two-column slide renderer
//!
//! Blank layout: the title banner and both column boxes are placed at
//! absolute coordinates. The split is purely positional; content that is too
//! long for a box overflows it rather than reflowing.

use crate::config::Settings;
use crate::deck::layout;
use crate::model::{Paragraph, Rect, Shape, ShapeRole, Slide, TextBox, TextStyle};

/// Render a slide with a title banner and two independent text columns.
pub fn render_two_column(
    settings: &Settings,
    title: &str,
    left_items: &[String],
    right_items: &[String],
) -> Slide {
    let banner_style = TextStyle::new(settings.banner_font_size)
        .bold()
        .with_color(settings.text_color);
    let banner_box = TextBox::new(vec![Paragraph::new(title, banner_style)]);

    let (left_rect, right_rect) = layout::columns(settings);

    Slide::new(vec![
        Shape::text(ShapeRole::Title, layout::banner(settings), banner_box),
        Shape::text(
            ShapeRole::Body,
            left_rect,
            column_box(settings, left_items),
        ),
        Shape::text(
            ShapeRole::Body,
            right_rect,
            column_box(settings, right_items),
        ),
    ])
}

fn column_box(settings: &Settings, items: &[String]) -> TextBox {
    let style = TextStyle::new(settings.column_font_size).with_color(settings.text_color);
    TextBox::new(
        items
            .iter()
            .map(|item| {
                Paragraph::new(item.clone(), style).with_space_after(settings.column_space_after)
            })
            .collect(),
    )
}

/// The column boxes of a rendered two-column slide, left then right.
pub fn column_bounds(slide: &Slide) -> Option<(Rect, Rect)> {
    let mut bodies = slide
        .shapes
        .iter()
        .filter(|s| s.role == ShapeRole::Body)
        .map(|s| s.bounds);
    Some((bodies.next()?, bodies.next()?))
}

//! Title slide renderer

use crate::config::Settings;
use crate::deck::layout::SlideLayout;
use crate::model::{Paragraph, Shape, ShapeRole, Slide, TextBox, TextStyle};

/// Render a title slide: centered title and subtitle in the template's
/// placeholder regions. Subtitle lines are split on '\n', one paragraph each.
pub fn render_title(settings: &Settings, title: &str, subtitle: &str) -> Slide {
    // The title layout always has both placeholders
    let ph = SlideLayout::Title
        .placeholders(settings)
        .expect("title layout provides placeholders");

    let title_style = TextStyle::new(settings.title_slide_font_size)
        .bold()
        .with_color(settings.text_color);
    let title_box = TextBox::new(vec![Paragraph::new(title, title_style).centered()]);

    let subtitle_style =
        TextStyle::new(settings.subtitle_font_size).with_color(settings.text_color);
    let subtitle_box = TextBox::new(
        subtitle
            .split('\n')
            .map(|line| Paragraph::new(line, subtitle_style).centered())
            .collect(),
    );

    Slide::new(vec![
        Shape::text(ShapeRole::Title, ph.title, title_box),
        Shape::text(
            ShapeRole::Subtitle,
            ph.subtitle.expect("title layout provides a subtitle region"),
            subtitle_box,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShapeContent;

    #[test]
    fn test_title_and_subtitle_placeholders() {
        let settings = Settings::default();
        let slide = render_title(&settings, "Hybrid RAG Architecture", "Feb 2026");

        assert_eq!(slide.shapes.len(), 2);
        assert_eq!(slide.title_text(), Some("Hybrid RAG Architecture"));

        let subtitle = &slide.shapes[1];
        assert_eq!(subtitle.role, ShapeRole::Subtitle);
        match &subtitle.content {
            ShapeContent::Text(tb) => {
                assert_eq!(tb.paragraphs.len(), 1);
                assert_eq!(tb.paragraphs[0].text, "Feb 2026");
                assert!(!tb.paragraphs[0].style.bold);
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_multiline_subtitle_splits() {
        let settings = Settings::default();
        let slide = render_title(&settings, "Thank You!", "Questions?\n\nFebruary 2026");

        match &slide.shapes[1].content {
            ShapeContent::Text(tb) => {
                let lines: Vec<_> = tb.paragraphs.iter().map(|p| p.text.as_str()).collect();
                assert_eq!(lines, vec!["Questions?", "", "February 2026"]);
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }
}

//! Bulleted-content slide renderer

use crate::config::Settings;
use crate::deck::layout::SlideLayout;
use crate::model::{Paragraph, Shape, ShapeRole, Slide, TextBox, TextStyle};

/// Render a title-and-body slide: one body paragraph per item, in order, at
/// the configured body size. Empty items become blank lines; the mapping from
/// input sequence to paragraphs is strictly 1:1.
pub fn render_content(settings: &Settings, title: &str, items: &[String]) -> Slide {
    let ph = SlideLayout::TitleAndBody
        .placeholders(settings)
        .expect("title-and-body layout provides placeholders");

    let title_style = TextStyle::new(settings.banner_font_size)
        .bold()
        .with_color(settings.text_color);
    let title_box = TextBox::new(vec![Paragraph::new(title, title_style)]);

    let body_style = TextStyle::new(settings.body_font_size).with_color(settings.text_color);
    let body_box = TextBox::new(
        items
            .iter()
            .map(|item| Paragraph::new(item.clone(), body_style))
            .collect(),
    );

    Slide::new(vec![
        Shape::text(ShapeRole::Title, ph.title, title_box),
        Shape::text(
            ShapeRole::Body,
            ph.body.expect("title-and-body layout provides a body region"),
            body_box,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_paragraph_per_item_in_order() {
        let settings = Settings::default();
        let slide = render_content(
            &settings,
            "The Problem",
            &items(&["first", "", "third", "fourth"]),
        );

        let body = slide.body().unwrap();
        assert_eq!(body.paragraphs.len(), 4);
        let texts: Vec<_> = body.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "", "third", "fourth"]);
        for p in &body.paragraphs {
            assert!((p.style.font_size - settings.body_font_size).abs() < f32::EPSILON);
            assert!(!p.style.bold);
        }
    }

    #[test]
    fn test_empty_item_list() {
        let settings = Settings::default();
        let slide = render_content(&settings, "Nothing Yet", &[]);

        assert_eq!(slide.title_text(), Some("Nothing Yet"));
        assert_eq!(slide.body().unwrap().paragraphs.len(), 0);
    }
}

//! Deck builder
//!
//! Dispatches each `SlideSpec` to its renderer and appends the result to a
//! fresh `Canvas`, preserving input order. Building is separate from
//! serialization so the model can be inspected and tested without touching
//! storage. The first construction error aborts the whole build.

use crate::config::Settings;
use crate::error::BuildError;
use crate::model::{Canvas, SlideSpec};

use super::slides;

/// Build the in-memory canvas for an ordered list of slide specifications.
pub fn build_deck(
    settings: &Settings,
    title: &str,
    specs: &[SlideSpec],
) -> Result<Canvas, BuildError> {
    if settings.slide_width <= 0.0 || settings.slide_height <= 0.0 {
        return Err(BuildError::InvalidCanvas {
            width: settings.slide_width,
            height: settings.slide_height,
        });
    }

    let mut canvas = Canvas::new(settings.slide_width, settings.slide_height, title);

    for (index, spec) in specs.iter().enumerate() {
        let slide = match spec {
            SlideSpec::Title { title, subtitle } => {
                slides::render_title(settings, title, subtitle)
            }
            SlideSpec::Content { title, items } => {
                slides::render_content(settings, title, items)
            }
            SlideSpec::TwoColumn { title, left, right } => {
                slides::render_two_column(settings, title, left, right)
            }
            SlideSpec::Table {
                title,
                headers,
                rows,
                column_weights,
            } => slides::render_table(
                settings,
                title,
                headers,
                rows,
                column_weights.as_deref(),
            )
            .map_err(|e| e.at_slide(index, title))?,
        };

        log::debug!("built slide {} ({})", index + 1, spec.title());
        canvas.push_slide(slide);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn sample_specs() -> Vec<SlideSpec> {
        vec![
            SlideSpec::Title {
                title: "Deck".into(),
                subtitle: "subtitle".into(),
            },
            SlideSpec::Content {
                title: "Second".into(),
                items: strings(&["a", "b"]),
            },
            SlideSpec::TwoColumn {
                title: "Third".into(),
                left: strings(&["l"]),
                right: strings(&["r"]),
            },
            SlideSpec::Table {
                title: "Fourth".into(),
                headers: strings(&["H1", "H2"]),
                rows: vec![strings(&["1", "2"])],
                column_weights: None,
            },
        ]
    }

    #[test]
    fn test_input_order_is_slide_order() {
        let settings = Settings::default();
        let canvas = build_deck(&settings, "Deck", &sample_specs()).unwrap();

        assert_eq!(canvas.slide_count(), 4);
        let titles: Vec<_> = canvas
            .slides()
            .iter()
            .filter_map(|s| s.title_text())
            .collect();
        assert_eq!(titles, vec!["Deck", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn test_bad_table_aborts_build() {
        let settings = Settings::default();
        let specs = vec![
            SlideSpec::Content {
                title: "Fine".into(),
                items: strings(&["ok"]),
            },
            SlideSpec::Table {
                title: "Broken".into(),
                headers: strings(&["A", "B"]),
                rows: vec![strings(&["short"])],
                column_weights: None,
            },
        ];

        let err = build_deck(&settings, "Deck", &specs).unwrap_err();
        match err {
            BuildError::Slide { index, title, .. } => {
                assert_eq!(index, 1);
                assert_eq!(title, "Broken");
            }
            other => panic!("expected slide-wrapped error, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_canvas_rejected() {
        let settings = Settings {
            slide_width: 0.0,
            ..Settings::default()
        };
        let err = build_deck(&settings, "Deck", &sample_specs()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidCanvas { .. }));
    }
}

//! Table slide renderer
//!
//! Blank layout with a title banner and a fixed grid. The header row is bold
//! white text on a solid fill; data rows are plain and unfilled. The grid is
//! rendered verbatim in caller-supplied order, and any row whose width
//! differs from the header aborts the slide.

use crate::config::Settings;
use crate::deck::layout;
use crate::error::BuildError;
use crate::model::{
    Paragraph, Shape, ShapeRole, Slide, TableCell, TableModel, TextBox, TextStyle,
};

/// Render a slide with a title banner and a header + data grid.
pub fn render_table(
    settings: &Settings,
    title: &str,
    headers: &[String],
    rows: &[Vec<String>],
    column_weights: Option<&[f32]>,
) -> Result<Slide, BuildError> {
    let banner_style = TextStyle::new(settings.banner_font_size)
        .bold()
        .with_color(settings.text_color);
    let banner_box = TextBox::new(vec![Paragraph::new(title, banner_style)]);

    let area = layout::table_area(settings);
    let widths = column_widths(area.width, headers.len(), column_weights)?;

    let header_style = TextStyle::new(settings.table_header_font_size)
        .bold()
        .with_color(settings.header_text_color);
    let header_cells = headers
        .iter()
        .map(|h| TableCell::new(h.clone(), header_style).with_fill(settings.header_fill_color))
        .collect();

    let body_style =
        TextStyle::new(settings.table_body_font_size).with_color(settings.text_color);
    let data_rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| TableCell::new(value.clone(), body_style))
                .collect()
        })
        .collect();

    let table = TableModel::new(widths, header_cells, data_rows)?;

    Ok(Slide::new(vec![
        Shape::text(ShapeRole::Title, layout::banner(settings), banner_box),
        Shape::table(area, table),
    ]))
}

/// Absolute column widths from relative weights, normalized to the grid
/// width. Equal columns when no weights are given.
fn column_widths(
    total: f32,
    columns: usize,
    weights: Option<&[f32]>,
) -> Result<Vec<f32>, BuildError> {
    match weights {
        None => {
            if columns == 0 {
                return Err(BuildError::EmptyTableHeader);
            }
            Ok(vec![total / columns as f32; columns])
        }
        Some(w) => {
            if w.len() != columns {
                return Err(BuildError::ColumnWeightMismatch {
                    expected: columns,
                    found: w.len(),
                });
            }
            let sum: f32 = w.iter().sum();
            if sum <= 0.0 {
                return Err(BuildError::ColumnWeightMismatch {
                    expected: columns,
                    found: w.len(),
                });
            }
            Ok(w.iter().map(|x| x / sum * total).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grid_shape_and_header_styling() {
        let settings = Settings::default();
        let slide = render_table(
            &settings,
            "Performance",
            &strings(&["Aspect", "Traditional", "Hybrid"]),
            &[
                strings(&["Speed", "~800ms", "~250ms"]),
                strings(&["Cost", "$0.027", "$0.009"]),
            ],
            None,
        )
        .unwrap();

        let table = slide.table().unwrap();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 3);

        for col in 0..3 {
            let header = table.cell(0, col);
            assert!(header.style.bold);
            assert!(header.fill.is_some());
            assert_eq!(header.style.color, settings.header_text_color);
        }
        for row in 1..3 {
            for col in 0..3 {
                let cell = table.cell(row, col);
                assert!(!cell.style.bold);
                assert!(cell.fill.is_none());
                assert!(
                    (cell.style.font_size - settings.table_body_font_size).abs() < f32::EPSILON
                );
            }
        }
        assert_eq!(table.cell(1, 0).text, "Speed");
        assert_eq!(table.cell(2, 2).text, "$0.009");
    }

    #[test]
    fn test_row_width_mismatch_builds_nothing() {
        let settings = Settings::default();
        let err = render_table(
            &settings,
            "Bad",
            &strings(&["A", "B"]),
            &[strings(&["only one"])],
            None,
        )
        .unwrap_err();

        assert!(matches!(err, BuildError::RowWidthMismatch { .. }));
    }

    #[test]
    fn test_weighted_columns_normalize_to_grid_width() {
        let settings = Settings::default();
        let slide = render_table(
            &settings,
            "Weighted",
            &strings(&["A", "B", "C", "D"]),
            &[],
            Some(&[2.2, 2.0, 2.0, 1.8]),
        )
        .unwrap();

        let table = slide.table().unwrap();
        let total: f32 = table.column_widths().iter().sum();
        let area = layout::table_area(&settings);
        assert!((total - area.width).abs() < 0.01);
        // first column is the widest
        assert!(table.column_widths()[0] > table.column_widths()[3]);
    }

    #[test]
    fn test_weight_count_mismatch_rejected() {
        let settings = Settings::default();
        let err = render_table(
            &settings,
            "Bad weights",
            &strings(&["A", "B"]),
            &[],
            Some(&[1.0]),
        )
        .unwrap_err();

        assert!(matches!(err, BuildError::ColumnWeightMismatch { .. }));
    }
}

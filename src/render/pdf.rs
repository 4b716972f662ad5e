//! Canvas to PDF rendering
//!
//! Walks a built [`Canvas`] and emits one PDF page per slide. The document
//! model uses a top-left origin with y growing downward; PDF uses a
//! bottom-left origin, so every y coordinate is flipped against the slide
//! height on the way out.

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{
    Align, Canvas, Paragraph, Shape, ShapeContent, Slide, TableModel, TextBox, TextStyle,
};
use crate::render::helpers::{colors, BuiltinFontMeasurer, FontSet, LayerBuilder};
use log::{debug, info};
use printpdf::{Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};
use std::fs;
use std::path::Path;

const PT_TO_MM: f32 = 0.3528;

/// Horizontal inset between a shape edge and its text, in mm.
const TEXT_INSET: f32 = 2.54;

/// Inset of table cell text from the cell border, in mm.
const CELL_INSET: f32 = 2.0;

/// Stroke width of table grid lines, in pt.
const GRID_THICKNESS: f32 = 0.75;

pub struct PdfRenderer<'a> {
    settings: &'a Settings,
    fonts: FontSet,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            fonts: FontSet::new(),
        }
    }

    /// Render the whole canvas to PDF bytes (uncompressed streams).
    pub fn render(&self, canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
        info!(
            "rendering {} slide(s) at {}x{} mm",
            canvas.slide_count(),
            canvas.width,
            canvas.height
        );

        let mut doc = PdfDocument::new(&canvas.title);
        let mut pages = Vec::with_capacity(canvas.slide_count());

        for (index, slide) in canvas.slides().iter().enumerate() {
            debug!("rendering slide {}", index + 1);
            let mut layer = LayerBuilder::new();
            self.render_slide(slide, &mut layer);
            pages.push(PdfPage::new(
                Mm(canvas.width),
                Mm(canvas.height),
                layer.into_ops(),
            ));
        }

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            debug!("pdf writer warning: {warning:?}");
        }
        Ok(bytes)
    }

    fn render_slide(&self, slide: &Slide, layer: &mut LayerBuilder) {
        for shape in &slide.shapes {
            match &shape.content {
                ShapeContent::Text(text_box) => self.render_text_box(shape, text_box, layer),
                ShapeContent::Table(table) => self.render_table(shape, table, layer),
            }
        }
    }

    fn render_text_box(&self, shape: &Shape, text_box: &TextBox, layer: &mut LayerBuilder) {
        let bounds = &shape.bounds;
        let available = bounds.width - 2.0 * TEXT_INSET;
        let mut cursor_y = bounds.y;

        for paragraph in &text_box.paragraphs {
            cursor_y = self.render_paragraph(paragraph, bounds.x, cursor_y, available, layer);
        }
    }

    /// Render one paragraph starting at `top`, returning the y of the next
    /// paragraph's top edge.
    fn render_paragraph(
        &self,
        paragraph: &Paragraph,
        shape_x: f32,
        top: f32,
        available: f32,
        layer: &mut LayerBuilder,
    ) -> f32 {
        let style = &paragraph.style;
        let font = self.fonts.pick(style);
        let measurer = BuiltinFontMeasurer::for_font(font);
        let line_height = style.font_size * self.settings.line_height_mult * PT_TO_MM;

        let lines = if paragraph.text.is_empty() {
            vec![String::new()]
        } else {
            wrap_text(&paragraph.text, measurer, style.font_size, available)
        };

        layer.set_fill_color(colors::rgb(style.color));

        let mut cursor_y = top;
        for line in &lines {
            if !line.is_empty() {
                let x = match paragraph.align {
                    Align::Left => shape_x + TEXT_INSET,
                    Align::Center => {
                        let width = measurer.measure_width_mm(line, style.font_size);
                        shape_x + TEXT_INSET + (available - width).max(0.0) / 2.0
                    }
                };
                let baseline = cursor_y + measurer.cap_height_mm(style.font_size);
                layer.use_text_builtin(
                    line.clone(),
                    style.font_size,
                    Mm(x),
                    self.flip_y(baseline),
                    font,
                );
            }
            cursor_y += line_height;
        }

        cursor_y + paragraph.space_after * PT_TO_MM
    }

    fn render_table(&self, shape: &Shape, table: &TableModel, layer: &mut LayerBuilder) {
        let bounds = &shape.bounds;
        let rows = table.rows();
        let columns = table.columns();
        if rows == 0 || columns == 0 {
            return;
        }
        let row_height = bounds.height / rows as f32;

        // Cell background fills first, so grid lines and text paint on top.
        for row in 0..rows {
            let cell_top = bounds.y + row as f32 * row_height;
            let mut cell_x = bounds.x;
            for col in 0..columns {
                let cell_width = table.column_widths()[col];
                if let Some(fill) = table.cell(row, col).fill {
                    layer.set_fill_color(colors::rgb(fill));
                    layer.add_rect(
                        Mm(cell_x),
                        self.flip_y(cell_top + row_height),
                        Mm(cell_x + cell_width),
                        self.flip_y(cell_top),
                        PaintMode::Fill,
                    );
                }
                cell_x += cell_width;
            }
        }

        // Grid lines
        layer.set_outline_color(colors::black());
        layer.set_outline_thickness(GRID_THICKNESS);
        for row in 0..=rows {
            let y = self.flip_y(bounds.y + row as f32 * row_height);
            layer.add_line(Mm(bounds.x), y, Mm(bounds.right()), y);
        }
        let mut cell_x = bounds.x;
        layer.add_line(
            Mm(cell_x),
            self.flip_y(bounds.y),
            Mm(cell_x),
            self.flip_y(bounds.bottom()),
        );
        for col in 0..columns {
            cell_x += table.column_widths()[col];
            layer.add_line(
                Mm(cell_x),
                self.flip_y(bounds.y),
                Mm(cell_x),
                self.flip_y(bounds.bottom()),
            );
        }

        // Cell text, vertically centered within each row
        for row in 0..rows {
            let cell_top = bounds.y + row as f32 * row_height;
            let mut text_x = bounds.x;
            for col in 0..columns {
                let cell = table.cell(row, col);
                let cell_width = table.column_widths()[col];
                if !cell.text.is_empty() {
                    self.render_cell_text(
                        &cell.text,
                        &cell.style,
                        text_x,
                        cell_top,
                        cell_width,
                        row_height,
                        layer,
                    );
                }
                text_x += cell_width;
            }
        }
    }

    fn render_cell_text(
        &self,
        text: &str,
        style: &TextStyle,
        cell_x: f32,
        cell_top: f32,
        cell_width: f32,
        row_height: f32,
        layer: &mut LayerBuilder,
    ) {
        let font = self.fonts.pick(style);
        let measurer = BuiltinFontMeasurer::for_font(font);
        let available = cell_width - 2.0 * CELL_INSET;
        let lines = wrap_text(text, measurer, style.font_size, available);
        let line_height = style.font_size * self.settings.line_height_mult * PT_TO_MM;
        let block_height = lines.len() as f32 * line_height;
        let cap_height = measurer.cap_height_mm(style.font_size);

        // Center the line block in the row; clamp so overflow stays in-cell
        // at the top rather than spilling upward.
        let mut cursor_y = cell_top + ((row_height - block_height) / 2.0).max(0.0);

        layer.set_fill_color(colors::rgb(style.color));
        for line in &lines {
            layer.use_text_builtin(
                line.clone(),
                style.font_size,
                Mm(cell_x + CELL_INSET),
                self.flip_y(cursor_y + cap_height),
                font,
            );
            cursor_y += line_height;
        }
    }

    /// Convert a model y (top-left origin, y-down) to PDF space.
    fn flip_y(&self, y: f32) -> Mm {
        Mm(self.settings.slide_height - y)
    }
}

/// Greedy word wrap that keeps the paragraph's leading indent and interior
/// runs of spaces intact; the deck content uses both for visual structure.
/// Words that are individually wider than `max_width` get a line of their own
/// rather than being split.
fn wrap_text(
    text: &str,
    measurer: &BuiltinFontMeasurer,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let indent_len = text.len() - text.trim_start_matches(' ').len();
    let (indent, body) = text.split_at(indent_len);

    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut has_word = false;

    // Splitting on single spaces yields an empty token per extra space, so
    // runs like "the    base" survive reassembly.
    for word in body.split(' ') {
        let mut candidate = current.clone();
        if has_word || word.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if !has_word || measurer.measure_width_mm(&candidate, font_size) <= max_width {
            current = candidate;
            has_word = has_word || !word.is_empty();
        } else {
            lines.push(current);
            current = word.to_string();
            has_word = !word.is_empty();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Render a canvas straight to PDF bytes.
pub fn render_pdf(canvas: &Canvas, settings: &Settings) -> Result<Vec<u8>, RenderError> {
    PdfRenderer::new(settings).render(canvas)
}

/// Render a canvas and write the PDF to `path`.
pub fn save_pdf(canvas: &Canvas, settings: &Settings, path: &Path) -> Result<(), RenderError> {
    let bytes = render_pdf(canvas, settings)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::{Rect, Shape, ShapeRole, Slide, TextBox};

    fn text_slide(text: &str) -> Slide {
        let paragraph = Paragraph::new(text, TextStyle::new(18.0));
        Slide::new(vec![Shape::text(
            ShapeRole::Body,
            Rect::new(12.7, 38.1, 228.6, 139.7),
            TextBox::new(vec![paragraph]),
        )])
    }

    #[test]
    fn test_render_produces_pdf_header() {
        let settings = Settings::default();
        let mut canvas = Canvas::new(settings.slide_width, settings.slide_height, "Test Deck");
        canvas.push_slide(text_slide("Hello"));
        let bytes = render_pdf(&canvas, &settings).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_slide_renders() {
        let settings = Settings::default();
        let mut canvas = Canvas::new(settings.slide_width, settings.slide_height, "Empty");
        canvas.push_slide(Slide::default());
        let bytes = render_pdf(&canvas, &settings).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_long_text() {
        let measurer = BuiltinFontMeasurer::for_font(printpdf::BuiltinFont::Helvetica);
        let text = "retrieval augmented generation pipelines combine dense and sparse search";
        let lines = wrap_text(text, measurer, 14.0, 40.0);
        assert!(lines.len() > 1);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let measurer = BuiltinFontMeasurer::for_font(printpdf::BuiltinFont::Helvetica);
        let lines = wrap_text("short", measurer, 14.0, 200.0);
        assert_eq!(lines, vec!["short".to_string()]);
    }

    #[test]
    fn test_wrap_keeps_indent_and_space_runs() {
        let measurer = BuiltinFontMeasurer::for_font(printpdf::BuiltinFont::Helvetica);
        let text = "  1. RETRIEVE: search the    base";
        let lines = wrap_text(text, measurer, 18.0, 300.0);
        assert_eq!(lines, vec![text.to_string()]);
    }

    #[test]
    fn test_wrap_indents_first_line_only() {
        let measurer = BuiltinFontMeasurer::for_font(printpdf::BuiltinFont::Helvetica);
        let text = "   bullet items keep their two or three space indent";
        let lines = wrap_text(text, measurer, 14.0, 40.0);
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("   bullet"));
        // continuation lines restart at the box edge
        assert!(!lines[1].starts_with(' '));
    }

    #[test]
    fn test_oversized_word_keeps_own_line() {
        let measurer = BuiltinFontMeasurer::for_font(printpdf::BuiltinFont::Helvetica);
        let lines = wrap_text("a supercalifragilisticexpialidocious b", measurer, 14.0, 20.0);
        assert_eq!(lines.len(), 3);
    }
}

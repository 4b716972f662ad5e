//! In-memory document model
//!
//! A `Canvas` is the whole deck before serialization: an ordered sequence of
//! `Slide`s, each a collection of positioned `Shape`s. Coordinates are in mm
//! with the origin at the top-left of the slide; the PDF renderer flips them
//! into PDF space. The model carries everything the renderer needs (geometry,
//! typography, fills) so it can be asserted on without producing bytes.

use super::table::TableModel;

/// Axis-aligned bounding box in mm, y measured from the top of the slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether two rects overlap horizontally (used to check column layout).
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }
}

/// Horizontal paragraph alignment within its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Character formatting for one paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    pub bold: bool,
    /// RGB, each component 0.0-1.0
    pub color: (f32, f32, f32),
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            bold: false,
            color: (0.0, 0.0, 0.0),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_color(mut self, color: (f32, f32, f32)) -> Self {
        self.color = color;
        self
    }
}

/// One unit of text; insertion order is rendering order, top to bottom.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
    pub align: Align,
    /// Extra vertical gap after the paragraph, in points
    pub space_after: f32,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            align: Align::Left,
            space_after: 0.0,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }
}

/// An ordered run of paragraphs inside one shape.
#[derive(Debug, Clone, Default)]
pub struct TextBox {
    pub paragraphs: Vec<Paragraph>,
}

impl TextBox {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

/// What a shape stood on the slide for; lets callers find the title region
/// without re-deriving it from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Title,
    Subtitle,
    Body,
}

#[derive(Debug, Clone)]
pub enum ShapeContent {
    Text(TextBox),
    Table(TableModel),
}

/// A positioned visual primitive: a text box or a table.
#[derive(Debug, Clone)]
pub struct Shape {
    pub role: ShapeRole,
    pub bounds: Rect,
    pub content: ShapeContent,
}

impl Shape {
    pub fn text(role: ShapeRole, bounds: Rect, text: TextBox) -> Self {
        Self {
            role,
            bounds,
            content: ShapeContent::Text(text),
        }
    }

    pub fn table(bounds: Rect, table: TableModel) -> Self {
        Self {
            role: ShapeRole::Body,
            bounds,
            content: ShapeContent::Table(table),
        }
    }
}

/// One page of the output document.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    fn first_with_role(&self, role: ShapeRole) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.role == role)
    }

    /// Text of the slide's title region, if any.
    pub fn title_text(&self) -> Option<&str> {
        match &self.first_with_role(ShapeRole::Title)?.content {
            ShapeContent::Text(tb) => tb.paragraphs.first().map(|p| p.text.as_str()),
            ShapeContent::Table(_) => None,
        }
    }

    /// The body text box (content slides), if any.
    pub fn body(&self) -> Option<&TextBox> {
        match &self.first_with_role(ShapeRole::Body)?.content {
            ShapeContent::Text(tb) => Some(tb),
            ShapeContent::Table(_) => None,
        }
    }

    /// The first table on the slide, if any.
    pub fn table(&self) -> Option<&TableModel> {
        self.shapes.iter().find_map(|s| match &s.content {
            ShapeContent::Table(t) => Some(t),
            ShapeContent::Text(_) => None,
        })
    }
}

/// The whole deck: fixed dimensions plus an ordered slide sequence.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Slide width in mm
    pub width: f32,
    /// Slide height in mm
    pub height: f32,
    /// Document title carried into the PDF metadata
    pub title: String,
    slides: Vec<Slide>,
}

impl Canvas {
    pub fn new(width: f32, height: f32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            slides: Vec::new(),
        }
    }

    pub fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_horizontal_overlap() {
        let left = Rect::new(10.0, 40.0, 100.0, 120.0);
        let right = Rect::new(130.0, 40.0, 100.0, 120.0);
        assert!(!left.overlaps_horizontally(&right));
        assert!(!right.overlaps_horizontally(&left));

        let touching = Rect::new(110.0, 40.0, 50.0, 10.0);
        assert!(!left.overlaps_horizontally(&touching));

        let crossing = Rect::new(90.0, 0.0, 50.0, 10.0);
        assert!(left.overlaps_horizontally(&crossing));
    }

    #[test]
    fn test_slide_title_lookup() {
        let title_box = TextBox::new(vec![Paragraph::new("Heading", TextStyle::new(32.0).bold())]);
        let slide = Slide::new(vec![Shape::text(
            ShapeRole::Title,
            Rect::new(12.7, 12.7, 228.6, 20.3),
            title_box,
        )]);
        assert_eq!(slide.title_text(), Some("Heading"));
        assert!(slide.body().is_none());
    }

    #[test]
    fn test_canvas_preserves_slide_order() {
        let mut canvas = Canvas::new(254.0, 190.5, "Deck");
        for name in ["one", "two", "three"] {
            let tb = TextBox::new(vec![Paragraph::new(name, TextStyle::new(32.0))]);
            canvas.push_slide(Slide::new(vec![Shape::text(
                ShapeRole::Title,
                Rect::new(0.0, 0.0, 10.0, 10.0),
                tb,
            )]));
        }
        let titles: Vec<_> = canvas.slides().iter().filter_map(|s| s.title_text()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }
}

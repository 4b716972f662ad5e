pub mod canvas;
pub mod spec;
pub mod table;

pub use canvas::{Align, Canvas, Paragraph, Rect, Shape, ShapeContent, ShapeRole, Slide, TextBox, TextStyle};
pub use spec::{DeckSpec, SlideSpec};
pub use table::{TableCell, TableModel};

//! Fixed-grid table model
//!
//! Row and column counts are fixed at construction; `TableModel::new` is the
//! single place the header/row shape invariant is enforced. A grid that does
//! not validate is never built.

use crate::error::BuildError;

use super::canvas::TextStyle;

/// One table cell: a single text run plus an optional solid fill.
#[derive(Debug, Clone)]
pub struct TableCell {
    pub text: String,
    pub style: TextStyle,
    pub fill: Option<(f32, f32, f32)>,
}

impl TableCell {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: (f32, f32, f32)) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// A rows x columns grid of cells with per-column widths.
///
/// Row 0 is the header row by convention; this type does not special-case it
/// beyond what the cells themselves carry (bold, fill).
#[derive(Debug, Clone)]
pub struct TableModel {
    column_widths: Vec<f32>,
    cells: Vec<Vec<TableCell>>,
}

impl TableModel {
    /// Build a grid from a header row and data rows.
    ///
    /// Fails if the header is empty, if `column_widths` does not match the
    /// header, or if any data row's length differs from the header's.
    pub fn new(
        column_widths: Vec<f32>,
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    ) -> Result<Self, BuildError> {
        let columns = header.len();
        if columns == 0 {
            return Err(BuildError::EmptyTableHeader);
        }
        if column_widths.len() != columns {
            return Err(BuildError::ColumnWeightMismatch {
                expected: columns,
                found: column_widths.len(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(BuildError::RowWidthMismatch {
                    // data rows sit below the header, so row 0 of input is grid row 1
                    row: i + 1,
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(rows.len() + 1);
        cells.push(header);
        cells.extend(rows);

        Ok(Self {
            column_widths,
            cells,
        })
    }

    /// Total row count including the header row.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    pub fn cell(&self, row: usize, col: usize) -> &TableCell {
        &self.cells[row][col]
    }

    pub fn row_cells(&self, row: usize) -> &[TableCell] {
        &self.cells[row]
    }

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }
}

use thiserror::Error;

/// Errors loading a deck description from a file or embedded asset.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck contains no slides")]
    EmptyDeck,
}

/// Errors constructing the in-memory slide model.
///
/// Any of these aborts the build; a half-built deck is worse than no deck.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("canvas dimensions must be positive, got {width}x{height} mm")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("table has no header columns")]
    EmptyTableHeader,

    #[error("table row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{found} column weights given for {expected} columns")]
    ColumnWeightMismatch { expected: usize, found: usize },

    #[error("slide {index} (\"{title}\"): {source}")]
    Slide {
        index: usize,
        title: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Attach the slide position and title the error occurred in.
    pub fn at_slide(self, index: usize, title: &str) -> Self {
        BuildError::Slide {
            index,
            title: title.to_string(),
            source: Box::new(self),
        }
    }
}

/// Errors serializing a canvas to PDF bytes or disk.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Combined error for the high-level build-then-render entry point.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

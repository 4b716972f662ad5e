use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deck-to-pdf")]
#[command(
    author,
    version,
    about = "Render slide decks described as structured content to presentation-style PDF"
)]
pub struct Args {
    /// Input deck JSON file (uses the built-in reference deck when omitted)
    pub input: Option<PathBuf>,

    /// Output PDF file path (defaults to input with .pdf extension, or deck.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Slide size
    #[arg(short = 's', long, value_enum, default_value = "standard")]
    pub size: SlideSize,

    /// Slide range to include, 1-based (e.g., "1-4" or "1,9,12-16")
    #[arg(long)]
    pub slides: Option<String>,

    /// Skip the PDF stream compression pass
    #[arg(long)]
    pub uncompressed: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SlideSize {
    /// 4:3, 10 x 7.5 in
    Standard,
    /// 16:9, 13.33 x 7.5 in
    Widescreen,
}

impl SlideSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            SlideSize::Standard => (254.0, 190.5),
            SlideSize::Widescreen => (338.7, 190.5),
        }
    }
}

impl Args {
    /// Get the output path, defaulting to the input with a .pdf extension.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| match &self.input {
            Some(input) => input.with_extension("pdf"),
            None => PathBuf::from("deck.pdf"),
        })
    }

    /// Slide dimensions in mm (width, height).
    pub fn slide_dimensions(&self) -> (f32, f32) {
        self.size.dimensions_mm()
    }
}

/// Parse a slide range specification into 1-based slide numbers.
pub fn parse_slide_range(spec: &str) -> Result<Vec<usize>, String> {
    let mut slides = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();

        if part.contains('-') {
            // Range: "1-16"
            let parts: Vec<&str> = part.split('-').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid range: {}", part));
            }

            let start: usize = parts[0]
                .trim()
                .parse()
                .map_err(|_| format!("Invalid number: {}", parts[0]))?;
            let end: usize = parts[1]
                .trim()
                .parse()
                .map_err(|_| format!("Invalid number: {}", parts[1]))?;

            if start == 0 {
                return Err("Slide numbers start at 1".to_string());
            }
            if start > end {
                return Err(format!("Invalid range: {} > {}", start, end));
            }

            for i in start..=end {
                slides.push(i);
            }
        } else {
            let num: usize = part
                .parse()
                .map_err(|_| format!("Invalid number: {}", part))?;
            if num == 0 {
                return Err("Slide numbers start at 1".to_string());
            }
            slides.push(num);
        }
    }

    Ok(slides)
}

//! Slide and deck descriptions
//!
//! `SlideSpec` is the declarative input to the deck builder: what should be on
//! a slide, with no geometry or typography attached. Decks are described as
//! JSON documents so presentation content lives in data assets rather than
//! code; the full reference deck ships embedded in the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SpecError;

/// The built-in reference deck, embedded at compile time.
const HYBRID_RAG_DECK: &str = include_str!("../../assets/decks/hybrid_rag.json");

/// Declarative description of one slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    /// Centered title and subtitle, template layout
    Title { title: String, subtitle: String },

    /// Title plus a vertical list of paragraphs; empty strings are blank lines
    Content { title: String, items: Vec<String> },

    /// Title banner plus two independently placed text columns
    TwoColumn {
        title: String,
        left: Vec<String>,
        right: Vec<String>,
    },

    /// Title banner plus a fixed grid with a styled header row
    Table {
        title: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        /// Relative column widths, normalized against the table width.
        /// Equal widths when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column_weights: Option<Vec<f32>>,
    },
}

impl SlideSpec {
    /// The slide's title text, used for logging and error context.
    pub fn title(&self) -> &str {
        match self {
            SlideSpec::Title { title, .. }
            | SlideSpec::Content { title, .. }
            | SlideSpec::TwoColumn { title, .. }
            | SlideSpec::Table { title, .. } => title,
        }
    }
}

/// A whole deck: optional document title plus the ordered slide list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slides: Vec<SlideSpec>,
}

impl DeckSpec {
    /// Parse a deck from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let deck: DeckSpec = serde_json::from_str(json)?;
        if deck.slides.is_empty() {
            return Err(SpecError::EmptyDeck);
        }
        Ok(deck)
    }

    /// Load a deck description from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The embedded "Hybrid RAG Architecture" reference deck.
    pub fn builtin() -> Result<Self, SpecError> {
        Self::from_json(HYBRID_RAG_DECK)
    }

    /// Document title for PDF metadata: the deck title, falling back to the
    /// first slide's title.
    pub fn document_title(&self) -> &str {
        self.title
            .as_deref()
            .or_else(|| self.slides.first().map(|s| s.title()))
            .unwrap_or("Slide Deck")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_variants() {
        let json = r#"{
            "title": "Demo",
            "slides": [
                {"kind": "title", "title": "T", "subtitle": "S"},
                {"kind": "content", "title": "C", "items": ["a", "", "b"]},
                {"kind": "two_column", "title": "W", "left": ["l"], "right": ["r"]},
                {"kind": "table", "title": "G", "headers": ["H1", "H2"],
                 "rows": [["1", "2"]], "column_weights": [2.0, 1.0]}
            ]
        }"#;

        let deck = DeckSpec::from_json(json).unwrap();
        assert_eq!(deck.slides.len(), 4);
        assert_eq!(deck.document_title(), "Demo");
        assert_eq!(deck.slides[1].title(), "C");
        match &deck.slides[3] {
            SlideSpec::Table {
                headers,
                rows,
                column_weights,
                ..
            } => {
                assert_eq!(headers.len(), 2);
                assert_eq!(rows.len(), 1);
                assert_eq!(column_weights.as_deref(), Some(&[2.0, 1.0][..]));
            }
            other => panic!("expected table spec, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = DeckSpec::from_json(r#"{"slides": []}"#).unwrap_err();
        assert!(matches!(err, SpecError::EmptyDeck));
    }

    #[test]
    fn test_builtin_deck_parses() {
        let deck = DeckSpec::builtin().unwrap();
        assert_eq!(deck.slides.len(), 16);
        assert!(matches!(deck.slides[0], SlideSpec::Title { .. }));
        assert!(matches!(deck.slides[8], SlideSpec::Table { .. }));
        assert!(matches!(deck.slides[11], SlideSpec::TwoColumn { .. }));
        assert!(matches!(deck.slides[15], SlideSpec::Title { .. }));
    }

    #[test]
    fn test_document_title_fallback() {
        let json = r#"{"slides": [{"kind": "title", "title": "Only", "subtitle": ""}]}"#;
        let deck = DeckSpec::from_json(json).unwrap();
        assert_eq!(deck.document_title(), "Only");
    }
}

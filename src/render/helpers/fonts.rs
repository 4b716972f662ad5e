//! Font selection for PDF rendering
//!
//! The deck is typeset entirely in the builtin base-14 Helvetica family, so
//! no font files are embedded and every PDF viewer can display the output.

use crate::model::TextStyle;
use printpdf::BuiltinFont;

/// The Helvetica family variants used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct FontSet {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
    pub italic: BuiltinFont,
    pub bold_italic: BuiltinFont,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            italic: BuiltinFont::HelveticaOblique,
            bold_italic: BuiltinFont::HelveticaBoldOblique,
        }
    }
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font variant for a text style.
    pub fn pick(&self, style: &TextStyle) -> BuiltinFont {
        if style.bold {
            self.bold
        } else {
            self.regular
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_bold() {
        let fonts = FontSet::new();
        let bold = TextStyle::new(14.0).bold();
        let regular = TextStyle::new(14.0);
        assert!(matches!(fonts.pick(&bold), BuiltinFont::HelveticaBold));
        assert!(matches!(fonts.pick(&regular), BuiltinFont::Helvetica));
    }
}

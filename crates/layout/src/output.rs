//! Output types from the layout engine.
//!
//! A [`LaidOutDocument`] holds, per page, the absolutely positioned elements
//! ready for painting, in paint order (decorations first).

use crate::document::{DocumentInfo, GradientAxis, TextStyle};
use crate::glyph::Glyph;
use folio_types::{Color, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// `baseline` is absolute, in page coordinates.
    Text {
        text: String,
        style: TextStyle,
        baseline: f32,
    },
    Fill(Color),
    Gradient {
        from: Color,
        to: Color,
        axis: GradientAxis,
    },
    Frame {
        color: Color,
        line_width: f32,
    },
    /// Line from the box's top-left to its bottom-right corner.
    Line {
        color: Color,
        line_width: f32,
    },
    /// Filled circle inscribed in the box.
    Disc(Color),
    Glyph {
        glyph: Glyph,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ElementKind,
}

impl PositionedElement {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub elements: Vec<PositionedElement>,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match &e.kind {
            ElementKind::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub page_size: Size,
    pub pages: Vec<LaidOutPage>,
    pub info: DocumentInfo,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

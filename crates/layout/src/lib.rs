use folio_traits::FontError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Page content area is empty ({0:.2} x {1:.2}); the margins exceed the page size.")]
    EmptyContentArea(f32, f32),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
}

pub mod algorithms;
pub mod document;
pub mod engine;
pub mod glyph;
pub mod output;
pub mod text;

pub use self::document::{
    walk_blocks, Block, Cell, CellWidth, Columns, Decoration, DocumentInfo, GlyphBlock,
    GradientAxis, Labeled, LayoutDocument, PageScope, PageSetup, Paint, Panel, Paragraph, Rating,
    Row, Rule, Section, SectionKind, TextRun, TextStyle,
};
pub use self::engine::LayoutEngine;
pub use self::glyph::{FlagKind, Glyph, GlyphPaint, GlyphShape};
pub use self::output::{ElementKind, LaidOutDocument, LaidOutPage, PositionedElement};

// Geometry types used throughout the document tree
pub use folio_types::{Color, Insets, Rect, Size};

//! Font metric sources.
//!
//! Layout only needs advance widths and vertical metrics; the renderer needs
//! the face name it references in page resources and, for embedded faces,
//! the font program itself. A [`FontSource`] supplies all of it for each of
//! the four faces of a family.

use folio_style::FontVariant;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Font family '{0}' is not available")]
    MissingFamily(String),

    #[error("Font family '{family}' has no {variant:?} face")]
    MissingFace { family: String, variant: FontVariant },

    #[error("Invalid font metrics for '{0}': {1}")]
    InvalidMetrics(String, String),

    #[error("Cannot read font program '{0}': {1}")]
    InvalidProgram(String, String),
}

/// A glyph of an embedded face: its id and advance in 1000-per-em units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub gid: u16,
    pub advance: u16,
}

/// A TrueType program that is embedded in the output and addressed by glyph id.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFace {
    /// The raw font file, written out as `FontFile2`.
    pub data: Arc<Vec<u8>>,
    /// Unicode cmap of the face.
    pub glyphs: BTreeMap<char, GlyphMetrics>,
    /// Advance of `.notdef`, used for characters the face lacks.
    pub missing_advance: u16,
    /// `[x_min, y_min, x_max, y_max]` in 1000-per-em units.
    pub bbox: [i16; 4],
    pub italic_angle: f32,
    pub cap_height: i16,
}

impl EmbeddedFace {
    pub fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&c).copied()
    }
}

/// How a face's glyphs reach the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceProgram {
    /// A standard face drawn through single-byte WinAnsi codes. Viewers
    /// supply the glyphs; widths are indexed by code.
    Standard { widths: Arc<[u16; 256]> },
    /// A TrueType face embedded in the document.
    Embedded(Arc<EmbeddedFace>),
}

/// Metrics of a single face, in glyph-space units (1000 per em).
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMetrics {
    /// Name the face is referenced by in the output document.
    pub base_font: String,
    pub program: FaceProgram,
    pub ascent: i16,
    pub descent: i16,
}

impl FaceMetrics {
    pub fn is_embedded(&self) -> bool {
        matches!(self.program, FaceProgram::Embedded(_))
    }
}

/// Supplies face metrics for a font family.
///
/// Implementations must return either all four variants of a family or an
/// error; partial families are rejected when the table is loaded.
pub trait FontSource: Send + Sync + Debug {
    fn face(&self, family: &str, variant: FontVariant) -> Result<FaceMetrics, FontError>;

    /// Family names this source can serve.
    fn families(&self) -> Vec<String>;

    fn name(&self) -> &'static str;
}

impl<S: FontSource + ?Sized> FontSource for Arc<S> {
    fn face(&self, family: &str, variant: FontVariant) -> Result<FaceMetrics, FontError> {
        (**self).face(family, variant)
    }

    fn families(&self) -> Vec<String> {
        (**self).families()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

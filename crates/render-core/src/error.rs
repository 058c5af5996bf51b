use folio_layout::LayoutError;
use folio_traits::FontError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Font resources unavailable: {0}")]
    Font(#[from] FontError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Font '{family}' has no glyph for {chars:?}")]
    MissingGlyphs { family: String, chars: String },
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

use crate::error::FitError;
use folio_layout::LayoutDocument;
use folio_render_core::DocumentRenderer;

/// One rendering at a candidate scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendition {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Renders at a scale and reports the page count.
///
/// Closures `Fn(f64) -> Result<Rendition, FitError>` are oracles, which keeps
/// fake oracles in tests to one line.
pub trait ScaleOracle {
    fn trial(&self, scale: f64) -> Result<Rendition, FitError>;
}

impl<F> ScaleOracle for F
where
    F: Fn(f64) -> Result<Rendition, FitError>,
{
    fn trial(&self, scale: f64) -> Result<Rendition, FitError> {
        self(scale)
    }
}

/// Builds a document for each scale and renders it with a real backend.
pub struct RenderOracle<'a, R: ?Sized, B> {
    renderer: &'a R,
    build: B,
}

impl<'a, R, B> RenderOracle<'a, R, B>
where
    R: DocumentRenderer + ?Sized,
    B: Fn(f64) -> LayoutDocument,
{
    pub fn new(renderer: &'a R, build: B) -> Self {
        Self { renderer, build }
    }
}

impl<R, B> ScaleOracle for RenderOracle<'_, R, B>
where
    R: DocumentRenderer + ?Sized,
    B: Fn(f64) -> LayoutDocument,
{
    fn trial(&self, scale: f64) -> Result<Rendition, FitError> {
        let doc = (self.build)(scale);
        let bytes = self.renderer.render(&doc)?;
        let pages = self.renderer.count_pages(&bytes)?;
        Ok(Rendition { bytes, pages })
    }
}

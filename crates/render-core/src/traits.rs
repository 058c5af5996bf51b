use crate::error::RenderError;
use folio_layout::LayoutDocument;

/// A render backend: the only component that knows the output format.
///
/// `count_pages` is the page-count oracle the fitting engine relies on.
/// Rendering the same document twice must produce identical bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, doc: &LayoutDocument) -> Result<Vec<u8>, RenderError>;

    fn count_pages(&self, bytes: &[u8]) -> Result<usize, RenderError>;

    fn name(&self) -> &'static str;
}

impl<R: DocumentRenderer + ?Sized> DocumentRenderer for std::sync::Arc<R> {
    fn render(&self, doc: &LayoutDocument) -> Result<Vec<u8>, RenderError> {
        (**self).render(doc)
    }

    fn count_pages(&self, bytes: &[u8]) -> Result<usize, RenderError> {
        (**self).count_pages(bytes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

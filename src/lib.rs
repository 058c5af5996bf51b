//! folio: CV and cover-letter PDFs fitted to a page budget.
//!
//! The pieces compose as follows:
//!
//! 1. [`normalize_cv`] / [`normalize_letter`] turn loose JSON into models.
//! 2. [`make_colors`] derives a palette from one brand color.
//! 3. [`build_cv_document`] lays a model out with one of eight templates.
//! 4. [`fit_one_page`] searches the largest scale that stays within the page budget.
//! 5. [`merge_documents`] concatenates finished PDFs.
//!
//! [`PipelineBuilder`] wires all of it together for the common case of a CV
//! followed by its cover letter.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Bundle, DocumentPipeline, GenerationConfig, PipelineBuilder};

pub use folio_fit::{CancelToken, FitError, FitOptions, FittedArtifact, Trial};
pub use folio_layout::LayoutDocument;
pub use folio_model::{
    normalize_cv, normalize_letter, CvDocModel, ExperienceEntry, Lang, LmModel, SkillCategory,
    Skills, ValidationError,
};
pub use folio_render_core::{DocumentRenderer, RenderError};
pub use folio_render_lopdf::LopdfRenderer;
pub use folio_resource::{Base14Source, TrueTypeSource};
pub use folio_traits::{FontError, FontSource};
pub use folio_style::{darken, make_colors, mix, normalize_hex, FontVariant, PdfColors};
pub use folio_templates::{
    build_cv_document, build_letter_document, catalogue, LayoutHint, TemplateId, TemplateMeta,
};

/// Fits `build` to `opts.max_pages` pages with the lopdf backend.
///
/// Never fails because the content is too long: the result then falls back
/// to `opts.min` and reports `fell_back`.
pub fn fit_one_page<B>(build: B, opts: &FitOptions) -> Result<FittedArtifact, PipelineError>
where
    B: Fn(f64) -> LayoutDocument,
{
    let renderer = LopdfRenderer::with_global_fonts()?;
    Ok(folio_fit::fit_document(&renderer, build, opts)?)
}

/// Concatenates PDFs in order. An empty list is an error.
pub fn merge_documents<B: AsRef<[u8]>>(blobs: &[B]) -> Result<Vec<u8>, PipelineError> {
    Ok(folio_pdf_composer::merge_pdfs(blobs)?)
}

/// Renders a layout once, at whatever scale it was built with.
pub fn render_document(doc: &LayoutDocument) -> Result<Vec<u8>, PipelineError> {
    Ok(LopdfRenderer::with_global_fonts()?.render(doc)?)
}

pub fn count_pages(bytes: &[u8]) -> Result<usize, PipelineError> {
    Ok(LopdfRenderer::with_global_fonts()?.count_pages(bytes)?)
}

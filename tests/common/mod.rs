#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{
    build_cv_document, make_colors, render_document, CvDocModel, FittedArtifact, Lang,
    LayoutHint, PipelineError, TemplateId,
};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_artifact(artifact: FittedArtifact) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(artifact.bytes)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders a CV once at a fixed scale, with the default brand and French labels.
pub fn render_cv(
    template: TemplateId,
    model: &CvDocModel,
    scale: f64,
) -> Result<GeneratedPdf, PipelineError> {
    let doc = build_cv_document(
        template,
        model,
        Lang::Fr,
        &make_colors("#2563eb"),
        LayoutHint::Tight,
        scale,
    );
    let bytes = render_document(&doc)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Config(e.to_string()))
}

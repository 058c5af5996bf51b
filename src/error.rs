use folio_fit::FitError;
use folio_model::ValidationError;
use folio_pdf_composer::ComposerError;
use folio_render_core::RenderError;
use folio_templates::TemplateError;
use thiserror::Error;

/// Every failure the document pipeline can surface.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Fitting failed: {0}")]
    Fit(#[from] FitError),

    #[error("Merging failed: {0}")]
    Compose(#[from] ComposerError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

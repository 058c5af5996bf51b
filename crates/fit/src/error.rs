use folio_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("Fitting was cancelled")]
    Cancelled,
    #[error("Invalid fit options: {0}")]
    InvalidOptions(String),
    #[error("Rendering failed during fitting: {0}")]
    Render(#[from] RenderError),
}

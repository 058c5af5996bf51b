use super::config::GenerationConfig;
use crate::error::PipelineError;
use folio_executor::{Executor, ExecutorImpl};
use folio_fit::{fit_with_cancel, CancelToken, FitOptions, FittedArtifact, RenderOracle};
use folio_layout::LayoutDocument;
use folio_model::{CvDocModel, LmModel};
use folio_pdf_composer::merge_pdfs;
use folio_render_core::DocumentRenderer;
use folio_render_lopdf::LopdfRenderer;
use folio_style::PdfColors;
use folio_templates::{build_cv_document, build_letter_document};
use std::path::Path;

/// A CV, optionally followed by its cover letter, as one PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub cv_scale: f64,
    pub letter_scale: Option<f64>,
}

/// Fits and merges documents for one [`GenerationConfig`].
///
/// Cheap to share across threads; every method takes `&self`.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    config: GenerationConfig,
    colors: PdfColors,
    renderer: LopdfRenderer,
    executor: ExecutorImpl,
    cancel: CancelToken,
}

impl DocumentPipeline {
    pub(crate) fn new(
        config: GenerationConfig,
        colors: PdfColors,
        renderer: LopdfRenderer,
        executor: ExecutorImpl,
        cancel: CancelToken,
    ) -> Self {
        Self {
            config,
            colors,
            renderer,
            executor,
            cancel,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn colors(&self) -> &PdfColors {
        &self.colors
    }

    /// Trips every fit running on this pipeline at its next trial.
    ///
    /// The token stays cancelled, so later calls fail with
    /// `FitError::Cancelled` as well; call [`CancelToken::reset`] to run
    /// the pipeline again.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// The CV layout at one scale, without fitting.
    pub fn layout_cv(&self, model: &CvDocModel, scale: f64) -> LayoutDocument {
        build_cv_document(
            self.config.template,
            model,
            self.config.lang,
            &self.colors,
            self.config.layout_hint,
            scale,
        )
    }

    /// The letter layout at one scale, without fitting.
    pub fn layout_letter(&self, letter: &LmModel, scale: f64) -> LayoutDocument {
        build_letter_document(letter, &self.colors, self.config.layout_hint, scale)
    }

    fn fit<B>(&self, build: B, opts: &FitOptions) -> Result<FittedArtifact, PipelineError>
    where
        B: Fn(f64) -> LayoutDocument,
    {
        let oracle = RenderOracle::new(&self.renderer, build);
        Ok(fit_with_cancel(&oracle, opts, &self.cancel)?)
    }

    pub fn generate_cv(&self, model: &CvDocModel) -> Result<FittedArtifact, PipelineError> {
        let artifact = self.fit(|scale| self.layout_cv(model, scale), &self.config.fit)?;
        log::info!(
            "CV ({}) fitted at scale {:.3}: {} page(s), {} bytes",
            self.config.template,
            artifact.scale,
            artifact.pages,
            artifact.bytes.len()
        );
        Ok(artifact)
    }

    pub fn generate_letter(&self, letter: &LmModel) -> Result<FittedArtifact, PipelineError> {
        let artifact = self.fit(|scale| self.layout_letter(letter, scale), &self.config.letter_fit)?;
        log::info!(
            "Cover letter fitted at scale {:.3}: {} page(s), {} bytes",
            artifact.scale,
            artifact.pages,
            artifact.bytes.len()
        );
        Ok(artifact)
    }

    /// Fits the CV and, when given, the letter, then merges them CV first.
    pub fn generate_bundle(
        &self,
        cv: &CvDocModel,
        letter: Option<&LmModel>,
    ) -> Result<Bundle, PipelineError> {
        let Some(letter) = letter else {
            let cv = self.generate_cv(cv)?;
            return Ok(Bundle {
                pages: cv.pages,
                cv_scale: cv.scale,
                letter_scale: None,
                bytes: cv.bytes,
            });
        };

        let (cv, letter) = self
            .executor
            .join(|| self.generate_cv(cv), || self.generate_letter(letter));
        let (cv, letter) = (cv?, letter?);

        let bytes = merge_pdfs(&[cv.bytes.as_slice(), letter.bytes.as_slice()])?;
        let pages = self.renderer.count_pages(&bytes)?;
        log::info!(
            "Bundle merged on {}: {} page(s), {} bytes",
            self.executor.name(),
            pages,
            bytes.len()
        );
        Ok(Bundle {
            bytes,
            pages,
            cv_scale: cv.scale,
            letter_scale: Some(letter.scale),
        })
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        cv: &CvDocModel,
        letter: Option<&LmModel>,
        path: P,
    ) -> Result<Bundle, PipelineError> {
        let bundle = self.generate_bundle(cv, letter)?;
        std::fs::write(path, &bundle.bytes)?;
        Ok(bundle)
    }
}

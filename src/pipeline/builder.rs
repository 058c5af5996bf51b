use super::config::GenerationConfig;
use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use folio_executor::{Executor, ExecutorImpl};
use folio_fit::{CancelToken, FitOptions};
use folio_layout::LayoutEngine;
use folio_model::Lang;
use folio_render_core::RenderError;
use folio_render_lopdf::LopdfRenderer;
use folio_resource::FontCache;
use folio_style::make_colors;
use folio_templates::{LayoutHint, TemplateId};
use folio_traits::FontSource;
use std::sync::Arc;

/// A builder for creating a [`DocumentPipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: GenerationConfig,
    renderer: Option<LopdfRenderer>,
    fonts: Option<Arc<FontCache>>,
    strict_glyphs: bool,
    cancel: Option<CancelToken>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a camelCase JSON [`GenerationConfig`].
    pub fn from_config_json(json: &str) -> Result<Self, PipelineError> {
        Ok(Self::new().with_config(GenerationConfig::from_json(json)?))
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.config.template = template;
        self
    }

    /// Accepts ids like `pro_max` or `pro-max`.
    pub fn with_template_name(self, name: &str) -> Result<Self, PipelineError> {
        Ok(self.with_template(name.parse()?))
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.config.lang = lang;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.config.brand = brand.into();
        self
    }

    pub fn with_layout_hint(mut self, hint: LayoutHint) -> Self {
        self.config.layout_hint = hint;
        self
    }

    pub fn with_fit(mut self, fit: FitOptions) -> Self {
        self.config.fit = fit;
        self
    }

    pub fn with_letter_fit(mut self, fit: FitOptions) -> Self {
        self.config.letter_fit = fit;
        self
    }

    /// Fit the CV and the letter on separate threads.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Uses `renderer` instead of one over the process-wide font table.
    pub fn with_renderer(mut self, renderer: LopdfRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Sets text in `family` from `source` instead of the built-in
    /// Helvetica. TrueType families are embedded, so text outside WinAnsi
    /// (Polish, Czech, Cyrillic names) is drawn as written.
    pub fn with_font_source(
        mut self,
        source: impl FontSource + 'static,
        family: impl Into<String>,
    ) -> Self {
        self.fonts = Some(Arc::new(FontCache::new(Arc::new(source), family)));
        self
    }

    /// Fail with [`RenderError::MissingGlyphs`] instead of drawing
    /// placeholders for characters the font cannot show.
    pub fn with_strict_glyphs(mut self, strict: bool) -> Self {
        self.strict_glyphs = strict;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        self.config.fit.validate()?;
        self.config.letter_fit.validate()?;

        let mut renderer = match (self.renderer, self.fonts) {
            (Some(renderer), _) => renderer,
            (None, Some(fonts)) => {
                let table = fonts.get().map_err(RenderError::from)?;
                LopdfRenderer::new(LayoutEngine::new(table))
            }
            (None, None) => LopdfRenderer::with_global_fonts()?,
        };
        if self.strict_glyphs {
            renderer = renderer.with_strict_glyphs(true);
        }
        let executor = if self.config.parallel {
            ExecutorImpl::parallel()
        } else {
            ExecutorImpl::sequential()
        };
        let colors = make_colors(&self.config.brand);
        log::debug!(
            "Pipeline: template {}, lang {}, brand {}, executor {} ({} thread(s))",
            self.config.template,
            self.config.lang,
            colors.brand().to_hex(),
            executor.name(),
            executor.parallelism()
        );

        Ok(DocumentPipeline::new(
            self.config,
            colors,
            renderer,
            executor,
            self.cancel.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fit_options_fail_at_build() {
        let result = PipelineBuilder::new()
            .with_fit(FitOptions::default().with_bounds(1.5, 0.9))
            .build();
        assert!(matches!(result, Err(PipelineError::Fit(_))));
    }

    #[test]
    fn unknown_template_name_is_an_error() {
        let result = PipelineBuilder::new().with_template_name("fancy");
        assert!(matches!(result, Err(PipelineError::Template(_))));
    }

    #[test]
    fn unavailable_font_family_fails_at_build() {
        let result = PipelineBuilder::new()
            .with_font_source(folio_resource::Base14Source::new(), "Garamond")
            .build();
        assert!(matches!(
            result,
            Err(PipelineError::Render(RenderError::Font(_)))
        ));
    }

    #[test]
    fn invalid_brand_falls_back() {
        let pipeline = PipelineBuilder::new()
            .with_brand("not a color")
            .with_template_name("pro-max")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(pipeline.config().template, TemplateId::ProMax);
        assert_eq!(pipeline.colors(), &make_colors("#2563eb"));
    }
}

use folio_fit::FitOptions;
use folio_model::Lang;
use folio_style::DEFAULT_BRAND;
use folio_templates::{LayoutHint, TemplateId};
use serde::{Deserialize, Serialize};

/// Everything that shapes one generation request, apart from the models.
///
/// Deserialises from camelCase JSON; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub template: TemplateId,
    pub lang: Lang,
    /// Brand color as hex; invalid values fall back to the default brand.
    pub brand: String,
    pub layout_hint: LayoutHint,
    pub fit: FitOptions,
    pub letter_fit: FitOptions,
    /// Fit the CV and the letter concurrently.
    pub parallel: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            template: TemplateId::default(),
            lang: Lang::default(),
            brand: DEFAULT_BRAND.to_string(),
            layout_hint: LayoutHint::default(),
            fit: FitOptions::default(),
            letter_fit: FitOptions::default(),
            parallel: true,
        }
    }
}

impl GenerationConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

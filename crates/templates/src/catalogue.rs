use crate::id::TemplateId;
use serde::Serialize;

/// Display metadata for the template picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMeta {
    pub id: TemplateId,
    pub label: &'static str,
    pub description: &'static str,
    pub preview_src: String,
}

fn describe(id: TemplateId) -> (&'static str, &'static str) {
    match id {
        TemplateId::Ats => (
            "ATS",
            "Single column, plain structure that parses cleanly in applicant tracking systems.",
        ),
        TemplateId::Classic => (
            "Classic",
            "Centered header, hairline separators and right-aligned dates.",
        ),
        TemplateId::Modern => (
            "Modern",
            "Gradient sidebar for contact, skills and languages next to the main story.",
        ),
        TemplateId::Minimalist => (
            "Minimalist",
            "Generous whitespace and quiet headings.",
        ),
        TemplateId::Creative => (
            "Creative",
            "Gradient header band with a soft side panel.",
        ),
        TemplateId::Elegant => (
            "Elegant",
            "Framed pages, centered titles and diamond ornaments.",
        ),
        TemplateId::Tech => (
            "Tech",
            "Dark header band, chevron bullets and shaded skill panels.",
        ),
        TemplateId::ProMax => (
            "Pro Max",
            "Full-height gradient sidebar with icons for every detail.",
        ),
    }
}

/// All templates, in picker order.
pub fn catalogue() -> Vec<TemplateMeta> {
    TemplateId::ALL
        .into_iter()
        .map(|id| {
            let (label, description) = describe(id);
            TemplateMeta {
                id,
                label,
                description,
                preview_src: format!("/templates/{id}.png"),
            }
        })
        .collect()
}

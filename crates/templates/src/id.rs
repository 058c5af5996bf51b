use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("Unknown layout hint '{0}'")]
    UnknownHint(String),
}

/// The closed set of CV templates. Each id maps to exactly one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Ats,
    Classic,
    Modern,
    Minimalist,
    Creative,
    Elegant,
    Tech,
    ProMax,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Ats,
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Elegant,
        TemplateId::Tech,
        TemplateId::ProMax,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Ats => "ats",
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::Elegant => "elegant",
            TemplateId::Tech => "tech",
            TemplateId::ProMax => "pro_max",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| TemplateError::UnknownTemplate(s.to_string()))
    }
}

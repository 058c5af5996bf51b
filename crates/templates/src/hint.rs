use crate::id::TemplateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smallest and largest effective scale a template is drawn at.
pub const MIN_EFFECTIVE_SCALE: f32 = 0.75;
pub const MAX_EFFECTIVE_SCALE: f32 = 1.6;

/// Density preference applied on top of the fitting scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
    #[default]
    Auto,
    Tight,
    Spacious,
}

impl LayoutHint {
    pub fn factor(self) -> f32 {
        match self {
            LayoutHint::Auto => 0.92,
            LayoutHint::Tight => 1.0,
            LayoutHint::Spacious => 1.08,
        }
    }

    /// The scale sizes are multiplied by.
    pub fn apply(self, scale: f64) -> f32 {
        let raw = scale as f32 * self.factor();
        if raw.is_nan() {
            return MIN_EFFECTIVE_SCALE;
        }
        raw.clamp(MIN_EFFECTIVE_SCALE, MAX_EFFECTIVE_SCALE)
    }
}

impl FromStr for LayoutHint {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(LayoutHint::Auto),
            "tight" => Ok(LayoutHint::Tight),
            "spacious" => Ok(LayoutHint::Spacious),
            _ => Err(TemplateError::UnknownHint(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_multiply_then_clamp() {
        assert!((LayoutHint::Auto.apply(1.0) - 0.92).abs() < 1e-6);
        assert_eq!(LayoutHint::Tight.apply(1.2), 1.2);
        assert!((LayoutHint::Spacious.apply(1.0) - 1.08).abs() < 1e-6);
        assert_eq!(LayoutHint::Auto.apply(0.8), MIN_EFFECTIVE_SCALE);
        assert_eq!(LayoutHint::Spacious.apply(1.6), MAX_EFFECTIVE_SCALE);
        assert_eq!(LayoutHint::Tight.apply(f64::NAN), MIN_EFFECTIVE_SCALE);
    }

    #[test]
    fn parses_names() {
        assert_eq!("Spacious".parse::<LayoutHint>(), Ok(LayoutHint::Spacious));
        assert!("loose".parse::<LayoutHint>().is_err());
    }
}

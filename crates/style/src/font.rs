use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// The four faces of a family that documents may draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    pub fn new(weight: FontWeight, style: FontStyle) -> Self {
        match (weight, style) {
            (FontWeight::Regular, FontStyle::Normal) => FontVariant::Regular,
            (FontWeight::Bold, FontStyle::Normal) => FontVariant::Bold,
            (FontWeight::Regular, FontStyle::Italic) => FontVariant::Italic,
            (FontWeight::Bold, FontStyle::Italic) => FontVariant::BoldItalic,
        }
    }

    pub fn weight(self) -> FontWeight {
        match self {
            FontVariant::Bold | FontVariant::BoldItalic => FontWeight::Bold,
            _ => FontWeight::Regular,
        }
    }

    pub fn style(self) -> FontStyle {
        match self {
            FontVariant::Italic | FontVariant::BoldItalic => FontStyle::Italic,
            _ => FontStyle::Normal,
        }
    }
}

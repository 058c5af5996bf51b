use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for labels and date/subject conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    /// Lenient parse of codes, locales and language names ("FR", "en-GB", "English").
    pub fn from_loose(input: &str) -> Option<Lang> {
        let lowered = input.trim().to_lowercase();
        let code = lowered.split(['-', '_']).next().unwrap_or_default();
        match code {
            "fr" | "fra" | "fre" | "french" | "français" | "francais" => Some(Lang::Fr),
            "en" | "eng" | "english" | "anglais" => Some(Lang::En),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_loose(s).ok_or_else(|| format!("Unknown language '{s}'"))
    }
}

use crate::lang::Lang;
use serde::{Deserialize, Serialize};

/// Cover letter model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LmModel {
    pub lang: Lang,
    pub name: String,
    pub contact_lines: Vec<String>,
    pub service: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_addr: Option<String>,
    pub city: String,
    pub date_str: String,
    pub subject: String,
    pub salutation: String,
    /// Paragraphs separated by blank lines.
    pub body: String,
    pub closing: String,
    pub signature: String,
}

impl LmModel {
    /// Body paragraphs; single line breaks inside a paragraph are kept as spaces.
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in self.body.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }
        paragraphs
    }

    /// Recipient address lines.
    pub fn company_addr_lines(&self) -> Vec<&str> {
        self.company_addr
            .as_deref()
            .map(|addr| {
                addr.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let letter = LmModel {
            body: "First line\ncontinues here.\n\n\nSecond paragraph.\n".into(),
            ..Default::default()
        };
        assert_eq!(
            letter.paragraphs(),
            vec!["First line continues here.", "Second paragraph."]
        );
    }

    #[test]
    fn address_lines_skip_blanks() {
        let letter = LmModel {
            company_addr: Some("12 rue de la Paix\n\n75002 Paris".into()),
            ..Default::default()
        };
        assert_eq!(letter.company_addr_lines(), vec!["12 rue de la Paix", "75002 Paris"]);
    }
}

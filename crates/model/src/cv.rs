use crate::languages::{parse_lang_line, LanguageSkill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed skill buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Cloud,
    Security,
    Systems,
    Automation,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Cloud,
        SkillCategory::Security,
        SkillCategory::Systems,
        SkillCategory::Automation,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Cloud => "cloud",
            SkillCategory::Security => "security",
            SkillCategory::Systems => "systems",
            SkillCategory::Automation => "automation",
            SkillCategory::Tools => "tools",
            SkillCategory::Soft => "soft",
        }
    }

    /// Accepts the canonical keys plus common English and French spellings.
    pub fn from_key(key: &str) -> Option<SkillCategory> {
        let folded: String = key
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'é' | 'è' | 'ê' => 'e',
                'ô' => 'o',
                _ => c,
            })
            .filter(|c| c.is_alphanumeric())
            .collect();
        match folded.as_str() {
            "cloud" | "devops" => Some(SkillCategory::Cloud),
            "security" | "securite" | "cybersecurity" | "cybersecurite" => Some(SkillCategory::Security),
            "systems" | "system" | "systemes" | "systeme" | "network" | "reseaux" => Some(SkillCategory::Systems),
            "automation" | "automatisation" | "scripting" => Some(SkillCategory::Automation),
            "tools" | "outils" | "tooling" | "tech" | "technical" => Some(SkillCategory::Tools),
            "soft" | "softskills" | "savoiretre" | "interpersonal" => Some(SkillCategory::Soft),
            _ => None,
        }
    }
}

/// Skills grouped by category. Iteration follows [`SkillCategory`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(BTreeMap<SkillCategory, Vec<String>>);

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: SkillCategory, skill: impl Into<String>) {
        self.0.entry(category).or_default().push(skill.into());
    }

    pub fn extend<I>(&mut self, category: SkillCategory, skills: I)
    where
        I: IntoIterator<Item = String>,
    {
        let entry = self.0.entry(category).or_default();
        entry.extend(skills);
    }

    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that actually hold skills, in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.0
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, items)| (*category, items.as_slice()))
    }

    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.0.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub role: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

/// The canonical CV model. Every field may be empty; renderers omit empty sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvDocModel {
    pub name: String,
    pub title: String,
    pub contact_line: String,
    pub profile: String,
    pub skills: Skills,
    pub xp: Vec<ExperienceEntry>,
    pub education: Vec<String>,
    pub certs: String,
    pub lang_line: String,
    pub hobbies: Vec<String>,
}

impl CvDocModel {
    /// The languages line, parsed into rows.
    pub fn languages(&self) -> Vec<LanguageSkill> {
        parse_lang_line(&self.lang_line)
    }

    /// Contact details split on the usual separators.
    pub fn contact_items(&self) -> Vec<&str> {
        self.contact_line
            .split(['|', '·', '•', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Certifications, one entry per line.
    pub fn cert_lines(&self) -> Vec<&str> {
        self.certs
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

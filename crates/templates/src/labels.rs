use folio_model::{Lang, SkillCategory};

/// Fixed interface text for one language.
#[derive(Debug)]
pub struct Labels {
    pub profile: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub certifications: &'static str,
    pub languages: &'static str,
    pub interests: &'static str,
    pub contact: &'static str,
    /// Prefix of the letter subject line.
    pub subject: &'static str,
    /// Between a skill category and its items.
    pub label_sep: &'static str,
    /// Indexed like [`SkillCategory::ALL`].
    categories: [&'static str; 6],
}

static FR: Labels = Labels {
    profile: "Profil",
    skills: "Compétences",
    experience: "Expérience professionnelle",
    education: "Formation",
    certifications: "Certifications",
    languages: "Langues",
    interests: "Centres d'intérêt",
    contact: "Contact",
    subject: "Objet :",
    label_sep: " : ",
    categories: [
        "Cloud",
        "Sécurité",
        "Systèmes & réseaux",
        "Automatisation",
        "Outils",
        "Savoir-être",
    ],
};

static EN: Labels = Labels {
    profile: "Profile",
    skills: "Skills",
    experience: "Professional experience",
    education: "Education",
    certifications: "Certifications",
    languages: "Languages",
    interests: "Interests",
    contact: "Contact",
    subject: "Subject:",
    label_sep: ": ",
    categories: [
        "Cloud",
        "Security",
        "Systems & networking",
        "Automation",
        "Tools",
        "Soft skills",
    ],
};

impl Labels {
    pub fn for_lang(lang: Lang) -> &'static Labels {
        match lang {
            Lang::Fr => &FR,
            Lang::En => &EN,
        }
    }

    pub fn category(&self, category: SkillCategory) -> &'static str {
        let index = SkillCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        self.categories[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_and_english_differ() {
        let fr = Labels::for_lang(Lang::Fr);
        let en = Labels::for_lang(Lang::En);
        assert_eq!(fr.skills, "Compétences");
        assert_eq!(en.skills, "Skills");
        assert_eq!(fr.category(SkillCategory::Security), "Sécurité");
        assert_eq!(en.category(SkillCategory::Soft), "Soft skills");
        assert_eq!(fr.subject, "Objet :");
    }
}

use folio::{CvDocModel, ExperienceEntry, Lang, LmModel, SkillCategory, Skills};
use serde_json::{json, Value};

/// Exactly 500 characters of plain ASCII prose.
pub fn profile_500() -> String {
    let sentence = "Platform engineer focused on reliable cloud infrastructure and automation. ";
    let mut profile = sentence.repeat(7);
    profile.truncate(500);
    profile
}

fn skills() -> Skills {
    let mut skills = Skills::new();
    skills.extend(
        SkillCategory::Cloud,
        ["AWS", "Azure", "GCP"].map(String::from),
    );
    skills.extend(
        SkillCategory::Automation,
        ["Terraform", "Ansible"].map(String::from),
    );
    skills.extend(SkillCategory::Tools, ["Git", "Grafana"].map(String::from));
    skills.push(SkillCategory::Soft, "Mentoring");
    skills
}

fn entry(company: &str, role: &str, dates: &str, bullets: Vec<String>) -> ExperienceEntry {
    ExperienceEntry {
        company: company.into(),
        city: Some("Lyon".into()),
        role: role.into(),
        dates: dates.into(),
        bullets,
    }
}

/// A typical CV: long profile, two experience entries.
pub fn sample_cv() -> CvDocModel {
    CvDocModel {
        name: "Jane Doe".into(),
        title: "Cloud Engineer".into(),
        contact_line: "jane@example.com | +33 6 12 34 56 78 | Lyon".into(),
        profile: profile_500(),
        skills: skills(),
        xp: vec![
            entry(
                "Acme",
                "Site Reliability Engineer",
                "2021 - 2024",
                vec![
                    "Migrated workloads to Kubernetes".into(),
                    "Cut incident response time by half".into(),
                    "Introduced on-call runbooks".into(),
                ],
            ),
            entry(
                "Globex",
                "Systems Administrator",
                "2018 - 2021",
                vec!["Automated patching with Ansible".into(), "Ran backups".into()],
            ),
        ],
        education: vec!["MSc Computer Science, Lyon 1".into()],
        certs: "AWS Solutions Architect\nCKA".into(),
        lang_line: "Français (Natif), Anglais (Courant)".into(),
        hobbies: vec!["Climbing".into(), "Photography".into()],
    }
}

/// Eight experience entries of six bullets each.
pub fn dense_cv() -> CvDocModel {
    let xp = (1..=8)
        .map(|i| {
            let bullets = (1..=6)
                .map(|j| format!("Delivered improvement {j} to the deployment pipeline of team {i}"))
                .collect();
            entry(&format!("Company {i}"), "Engineer", "2010 - 2012", bullets)
        })
        .collect();
    CvDocModel {
        name: "Dense Candidate".into(),
        title: "Engineer".into(),
        contact_line: "dense@example.com".into(),
        profile: "Engineer with a long track record.".into(),
        xp,
        education: vec!["BSc Computer Science".into()],
        ..Default::default()
    }
}

pub fn sample_letter() -> LmModel {
    LmModel {
        lang: Lang::En,
        name: "Jane Doe".into(),
        contact_lines: vec!["jane@example.com".into(), "+33 6 12 34 56 78".into()],
        service: "Human Resources".into(),
        company_name: "Initech".into(),
        company_addr: Some("1 Main Street\n69001 Lyon".into()),
        city: "Lyon".into(),
        date_str: "March 3, 2025".into(),
        subject: "Application for the Cloud Engineer position".into(),
        salutation: "Dear Hiring Manager,".into(),
        body: "I am writing to apply for the Cloud Engineer position.\n\n\
               I have six years of experience running production systems.\n\n\
               I would welcome the chance to discuss my application."
            .into(),
        closing: "Kind regards,".into(),
        signature: "Jane Doe".into(),
    }
}

/// Loosely shaped input, as an upstream form might send it.
pub fn raw_cv_json() -> Value {
    json!({
        "version": 1,
        "full_name": "  Jane\u{00a0}Doe ",
        "title": "Cloud Engineer",
        "contact_line": "jane@example.com | Lyon",
        "summary": "Short profile.",
        "skills": { "cloud": "AWS, Azure", "outils": ["Git"] },
        "experience": [
            { "company": "Acme", "role": "SRE", "dates": "2021 - 2024",
              "bullets": "Migrated to Kubernetes\nWrote runbooks" }
        ],
        "education": ["MSc Computer Science"],
        "lang_line": "English (fluent)",
        "hobbies": "Climbing, Chess",
        "unknownField": 42
    })
}

pub fn raw_letter_json() -> Value {
    json!({
        "lang": "en-GB",
        "name": "Jane Doe",
        "contactLines": ["jane@example.com"],
        "companyName": "Initech",
        "city": "Lyon",
        "dateStr": "March 3, 2025",
        "subject": "Application",
        "salutation": "Dear Hiring Manager,",
        "body": "First paragraph.\n\nSecond paragraph.",
        "closing": "Kind regards,",
        "signature": "Jane Doe"
    })
}

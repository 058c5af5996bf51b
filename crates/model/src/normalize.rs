//! Lenient conversion from loosely shaped JSON into the canonical models.
//!
//! The normalizer never fails on missing data: absent or `null` fields become
//! empty strings and lists. It fails only when a value has a shape that cannot
//! be coerced (an object where text is expected, a bare string where an
//! experience entry object is expected). Unknown fields are ignored.

use crate::cv::{CvDocModel, ExperienceEntry, SkillCategory, Skills};
use crate::error::ValidationError;
use crate::lang::Lang;
use crate::letter::LmModel;
use serde_json::{Map, Value};

/// The only schema version this crate understands.
pub const SCHEMA_VERSION: u64 = 1;

const LINE_SEPARATORS: &[char] = &['\n'];
const ITEM_SEPARATORS: &[char] = &[',', ';', '\n', '•', '·'];

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Replaces non-breaking spaces, collapses inner whitespace on every line and
/// trims. Blank lines survive as a single empty line (paragraph breaks).
pub fn clean_text(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.replace("\r\n", "\n").split('\n') {
        let collapsed = line
            .split(|c: char| c.is_whitespace() || c == '\u{a0}' || c == '\u{202f}')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if collapsed.is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(collapsed);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// [`clean_text`] folded onto a single line.
pub fn clean_inline(raw: &str) -> String {
    clean_text(raw)
        .split('\n')
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops one leading list marker. Dashes, asterisks and middle dots only
/// count as markers when whitespace follows, so `-30%` keeps its sign.
fn strip_marker(item: &str) -> &str {
    let item = item.trim_start();
    let Some(first) = item.chars().next() else {
        return item;
    };
    let rest = &item[first.len_utf8()..];
    let is_marker = match first {
        '•' | '▪' => true,
        '-' | '*' | '–' | '·' => rest.is_empty() || rest.starts_with(char::is_whitespace),
        _ => false,
    };
    if is_marker { rest.trim_start() } else { item }
}

fn lookup<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|v| !v.is_null())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Reads a text field. Arrays of scalars are joined with `joiner`.
fn text_field(
    obj: &Map<String, Value>,
    names: &[&str],
    joiner: &str,
) -> Result<String, ValidationError> {
    let Some(value) = lookup(obj, names) else {
        return Ok(String::new());
    };
    if let Some(text) = scalar_text(value) {
        return Ok(text);
    }
    match value {
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Null => {}
                    other => parts.push(scalar_text(other).ok_or_else(|| {
                        ValidationError::ExpectedString {
                            field: format!("{}[{}]", names[0], i),
                            found: kind(other),
                        }
                    })?),
                }
            }
            Ok(parts.join(joiner))
        }
        other => Err(ValidationError::ExpectedString {
            field: names[0].to_string(),
            found: kind(other),
        }),
    }
}

fn inline_field(obj: &Map<String, Value>, names: &[&str]) -> Result<String, ValidationError> {
    text_field(obj, names, " · ").map(|s| clean_inline(&s))
}

fn block_field(obj: &Map<String, Value>, names: &[&str]) -> Result<String, ValidationError> {
    text_field(obj, names, "\n").map(|s| clean_text(&s))
}

fn split_items(raw: &str, separators: &[char]) -> Vec<String> {
    raw.split(separators)
        .map(|item| clean_inline(strip_marker(item)))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Reads an ordered list of strings. Delimited strings are split; `null`
/// entries are dropped; empty entries are dropped after cleaning.
fn list_value(
    value: Option<&Value>,
    field: &str,
    separators: &[char],
) -> Result<Vec<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(split_items(s, separators)),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Null => {}
                    Value::Object(fields) => {
                        let joined = fields
                            .values()
                            .filter_map(scalar_text)
                            .map(|s| clean_inline(&s))
                            .filter(|s| !s.is_empty())
                            .collect::<Vec<_>>()
                            .join(", ");
                        if !joined.is_empty() {
                            out.push(joined);
                        }
                    }
                    other => {
                        let text = scalar_text(other).ok_or_else(|| ValidationError::ExpectedString {
                            field: format!("{field}[{i}]"),
                            found: kind(other),
                        })?;
                        let cleaned = clean_inline(strip_marker(&text));
                        if !cleaned.is_empty() {
                            out.push(cleaned);
                        }
                    }
                }
            }
            Ok(out)
        }
        Some(other) => scalar_text(other)
            .map(|s| split_items(&s, separators))
            .ok_or_else(|| ValidationError::ExpectedList {
                field: field.to_string(),
                found: kind(other),
            }),
    }
}

fn list_field(
    obj: &Map<String, Value>,
    names: &[&str],
    separators: &[char],
) -> Result<Vec<String>, ValidationError> {
    list_value(lookup(obj, names), names[0], separators)
}

fn check_version(obj: &Map<String, Value>) -> Result<(), ValidationError> {
    match obj.get("version") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(SCHEMA_VERSION) => Ok(()),
            Some(other) => Err(ValidationError::UnsupportedVersion(other)),
            None => Err(ValidationError::UnsupportedVersion(0)),
        },
        Some(other) => Err(ValidationError::ExpectedString {
            field: "version".into(),
            found: kind(other),
        }),
    }
}

fn root_object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject(kind(raw)))?;
    check_version(obj)?;
    Ok(obj)
}

fn normalize_skills(value: Option<&Value>) -> Result<Skills, ValidationError> {
    let mut skills = Skills::new();
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Object(categories)) => {
            for (key, items) in categories {
                let Some(category) = SkillCategory::from_key(key) else {
                    log::warn!("Dropping unknown skill category '{}'", key);
                    continue;
                };
                let field = format!("skills.{key}");
                skills.extend(category, list_value(Some(items), &field, ITEM_SEPARATORS)?);
            }
        }
        Some(Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                match entry {
                    Value::Null => {}
                    Value::Object(group) => {
                        let key = text_field(group, &["category", "name", "key"], " ")?;
                        let Some(category) = SkillCategory::from_key(&key) else {
                            log::warn!("Dropping unknown skill category '{}'", key);
                            continue;
                        };
                        skills.extend(
                            category,
                            list_field(group, &["items", "skills", "values"], ITEM_SEPARATORS)?,
                        );
                    }
                    other => {
                        let field = format!("skills[{i}]");
                        skills.extend(
                            SkillCategory::Tools,
                            list_value(Some(other), &field, ITEM_SEPARATORS)?,
                        );
                    }
                }
            }
        }
        Some(Value::String(s)) => skills.extend(SkillCategory::Tools, split_items(s, ITEM_SEPARATORS)),
        Some(other) => {
            return Err(ValidationError::ExpectedObject {
                field: "skills".into(),
                found: kind(other),
            });
        }
    }
    Ok(skills)
}

fn normalize_experience(value: Option<&Value>) -> Result<Vec<ExperienceEntry>, ValidationError> {
    let entries = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(ValidationError::ExpectedList {
                field: "xp".into(),
                found: kind(other),
            });
        }
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let fields = match entry {
            Value::Null => continue,
            Value::Object(fields) => fields,
            other => {
                return Err(ValidationError::ExpectedObject {
                    field: format!("xp[{i}]"),
                    found: kind(other),
                });
            }
        };
        let city = inline_field(fields, &["city", "ville", "location"])?;
        let entry = ExperienceEntry {
            company: inline_field(fields, &["company", "entreprise", "employer"])?,
            city: (!city.is_empty()).then_some(city),
            role: inline_field(fields, &["role", "title", "poste", "position"])?,
            dates: inline_field(fields, &["dates", "period", "periode", "date"])?,
            bullets: list_field(
                fields,
                &["bullets", "missions", "tasks", "highlights"],
                LINE_SEPARATORS,
            )?,
        };
        let is_blank = entry.company.is_empty()
            && entry.role.is_empty()
            && entry.dates.is_empty()
            && entry.bullets.is_empty();
        if !is_blank {
            out.push(entry);
        }
    }
    Ok(out)
}

/// Coerces raw CV input into a [`CvDocModel`].
pub fn normalize_cv(raw: &Value) -> Result<CvDocModel, ValidationError> {
    let obj = root_object(raw)?;
    Ok(CvDocModel {
        name: inline_field(obj, &["name", "fullName", "full_name"])?,
        title: inline_field(obj, &["title", "headline"])?,
        contact_line: inline_field(obj, &["contactLine", "contact_line", "contact"])?,
        profile: block_field(obj, &["profile", "summary", "profil"])?,
        skills: normalize_skills(lookup(obj, &["skills", "competences"]))?,
        xp: normalize_experience(lookup(obj, &["xp", "experience", "experiences"]))?,
        education: list_field(obj, &["education", "formation"], LINE_SEPARATORS)?,
        certs: block_field(obj, &["certs", "certifications"])?,
        lang_line: inline_field(obj, &["langLine", "lang_line", "languages", "langues"])?,
        hobbies: list_field(obj, &["hobbies", "interests", "loisirs"], ITEM_SEPARATORS)?,
    })
}

/// Coerces raw cover-letter input into an [`LmModel`].
pub fn normalize_letter(raw: &Value) -> Result<LmModel, ValidationError> {
    let obj = root_object(raw)?;

    let lang_raw = inline_field(obj, &["lang", "language"])?;
    let lang = Lang::from_loose(&lang_raw).unwrap_or_else(|| {
        if !lang_raw.is_empty() {
            log::debug!("Unknown letter language '{}', defaulting to {}", lang_raw, Lang::default());
        }
        Lang::default()
    });

    let company_addr = block_field(obj, &["companyAddr", "company_addr", "companyAddress"])?;
    let body = match lookup(obj, &["body", "paragraphs"]) {
        Some(Value::Array(_)) => text_field(obj, &["body", "paragraphs"], "\n\n")?,
        _ => text_field(obj, &["body", "paragraphs"], "\n")?,
    };

    Ok(LmModel {
        lang,
        name: inline_field(obj, &["name"])?,
        contact_lines: list_field(obj, &["contactLines", "contact_lines", "contact"], LINE_SEPARATORS)?,
        service: inline_field(obj, &["service", "department"])?,
        company_name: inline_field(obj, &["companyName", "company_name", "company"])?,
        company_addr: (!company_addr.is_empty()).then_some(company_addr),
        city: inline_field(obj, &["city"])?,
        date_str: inline_field(obj, &["dateStr", "date_str", "date"])?,
        subject: inline_field(obj, &["subject"])?,
        salutation: inline_field(obj, &["salutation"])?,
        body: clean_text(&body),
        closing: block_field(obj, &["closing"])?,
        signature: inline_field(obj, &["signature"])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_text_collapses_nbsp_and_whitespace() {
        assert_eq!(clean_text("  Hello\u{a0}\u{a0}world \t !  "), "Hello world !");
        assert_eq!(clean_text("a\n\n\n\nb\n\n"), "a\n\nb");
        assert_eq!(clean_inline(" a \n b "), "a b");
    }

    #[test]
    fn missing_fields_become_empty() {
        let model = normalize_cv(&json!({})).unwrap();
        assert_eq!(model, CvDocModel::default());
    }

    #[test]
    fn trims_and_drops_nulls_and_unknown_fields() {
        let model = normalize_cv(&json!({
            "name": "  Jeanne\u{a0}Dupont ",
            "hobbies": ["Escalade", null, "  ", "Échecs"],
            "education": "Master Informatique — 2015\n\nLicence — 2013",
            "favouriteColor": "green"
        }))
        .unwrap();
        assert_eq!(model.name, "Jeanne Dupont");
        assert_eq!(model.hobbies, vec!["Escalade", "Échecs"]);
        assert_eq!(model.education, vec!["Master Informatique — 2015", "Licence — 2013"]);
    }

    #[test]
    fn skills_accept_every_shape() {
        let as_object = normalize_cv(&json!({
            "skills": { "Cloud": ["AWS", "GCP"], "outils": "Git, Docker", "astrology": ["x"] }
        }))
        .unwrap();
        assert_eq!(as_object.skills.get(SkillCategory::Cloud), ["AWS", "GCP"]);
        assert_eq!(as_object.skills.get(SkillCategory::Tools), ["Git", "Docker"]);

        let as_groups = normalize_cv(&json!({
            "skills": [{ "category": "security", "items": ["IAM"] }, "Terraform"]
        }))
        .unwrap();
        assert_eq!(as_groups.skills.get(SkillCategory::Security), ["IAM"]);
        assert_eq!(as_groups.skills.get(SkillCategory::Tools), ["Terraform"]);
    }

    #[test]
    fn experience_entries_are_coerced() {
        let model = normalize_cv(&json!({
            "xp": [
                null,
                {
                    "company": "Acme",
                    "ville": "",
                    "poste": "SRE",
                    "dates": 2021,
                    "missions": "- Built things\n• Ran things"
                }
            ]
        }))
        .unwrap();
        assert_eq!(model.xp.len(), 1);
        let entry = &model.xp[0];
        assert_eq!(entry.role, "SRE");
        assert_eq!(entry.city, None);
        assert_eq!(entry.dates, "2021");
        assert_eq!(entry.bullets, vec!["Built things", "Ran things"]);
    }

    #[test]
    fn signed_figures_keep_their_sign() {
        let model = normalize_cv(&json!({
            "xp": [{
                "company": "Acme",
                "missions": "-30% de coûts cloud\n- Migration vers Kubernetes\n+20% uptime\n*  Astreintes"
            }],
            "hobbies": ["-5°C trail", "– Course", "•Voile"]
        }))
        .unwrap();
        assert_eq!(
            model.xp[0].bullets,
            vec!["-30% de coûts cloud", "Migration vers Kubernetes", "+20% uptime", "Astreintes"]
        );
        assert_eq!(model.hobbies, vec!["-5°C trail", "Course", "Voile"]);
    }

    #[test]
    fn uncoercible_shapes_are_typed_errors() {
        assert!(matches!(
            normalize_cv(&json!({ "name": { "first": "Ada" } })),
            Err(ValidationError::ExpectedString { ref field, .. }) if field == "name"
        ));
        assert!(matches!(
            normalize_cv(&json!({ "xp": ["not an object"] })),
            Err(ValidationError::ExpectedObject { ref field, .. }) if field == "xp[0]"
        ));
        assert!(matches!(normalize_cv(&json!([1, 2])), Err(ValidationError::NotAnObject("array"))));
        assert!(matches!(
            normalize_cv(&json!({ "version": 2 })),
            Err(ValidationError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn letter_normalization() {
        let letter = normalize_letter(&json!({
            "lang": "EN",
            "name": "Ada Lovelace",
            "contactLines": "ada@example.com\n+44 000",
            "companyName": "Analytical Engines Ltd",
            "companyAddr": "",
            "body": ["First paragraph.", "Second   paragraph."],
            "closing": "Yours sincerely,"
        }))
        .unwrap();
        assert_eq!(letter.lang, Lang::En);
        assert_eq!(letter.contact_lines, vec!["ada@example.com", "+44 000"]);
        assert_eq!(letter.company_addr, None);
        assert_eq!(letter.paragraphs(), vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn unknown_letter_language_defaults() {
        let letter = normalize_letter(&json!({ "lang": "klingon" })).unwrap();
        assert_eq!(letter.lang, Lang::Fr);
    }
}

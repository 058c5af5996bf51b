use serde::Serialize;

/// Highest proficiency on the five-dot scale.
pub const MAX_LEVEL: u8 = 5;
const DEFAULT_LEVEL: u8 = 3;

/// One row of the languages section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSkill {
    pub name: String,
    pub level_label: Option<String>,
    /// 1..=5
    pub level: u8,
}

/// Splits a delimited languages line such as
/// `"Français (Natif), Anglais (Courant)"` into rows.
///
/// Items are separated by `,` `;` `|` `•` `·` or newlines outside parentheses.
/// Each item is `Name (Level)`, `Name - Level`, `Name: Level` or just `Name`.
pub fn parse_lang_line(line: &str) -> Vec<LanguageSkill> {
    split_top_level(line)
        .into_iter()
        .filter_map(|item| parse_item(&item))
        .collect()
}

fn split_top_level(line: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in line.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' | ';' | '|' | '•' | '·' | '\n' if depth == 0 => {
                items.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    items.push(current);
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_item(item: &str) -> Option<LanguageSkill> {
    let (name, label) = if let Some(open) = item.find(['(', '[']) {
        let inner = &item[open + 1..];
        let close = inner.find([')', ']']).unwrap_or(inner.len());
        (item[..open].trim(), Some(inner[..close].trim()))
    } else if let Some((name, label)) = item.split_once(" - ") {
        (name.trim(), Some(label.trim()))
    } else if let Some((name, label)) = item.split_once(" – ") {
        (name.trim(), Some(label.trim()))
    } else if let Some((name, label)) = item.split_once(':') {
        (name.trim(), Some(label.trim()))
    } else {
        (item.trim(), None)
    };

    if name.is_empty() {
        return None;
    }
    let label = label.filter(|l| !l.is_empty()).map(str::to_string);
    let level = label.as_deref().map(level_from_label).unwrap_or(DEFAULT_LEVEL);
    Some(LanguageSkill {
        name: name.to_string(),
        level_label: label,
        level,
    })
}

fn fold_accents(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

const LEVEL_WORDS: &[(u8, &[&str])] = &[
    (5, &["natif", "native", "maternel", "mother", "bilingu", "c2"]),
    (4, &["courant", "fluent", "c1", "avance", "advanced", "professionnel", "professional"]),
    (3, &["intermediaire", "intermediate", "b2", "b1", "conversation"]),
    (2, &["notions", "basic", "elementaire", "elementary", "scolaire", "a2"]),
    (1, &["debutant", "beginner", "a1"]),
];

/// Maps a proficiency label (French, English or CEFR) to 1..=5.
///
/// Explicit scores like `4/5` are honored. Unknown labels map to 3.
pub fn level_from_label(label: &str) -> u8 {
    let folded = fold_accents(label.trim());

    if let Some((score, out_of)) = folded.split_once('/')
        && let (Ok(score), Ok(5)) = (score.trim().parse::<u8>(), out_of.trim().parse::<u8>())
    {
        return score.clamp(1, MAX_LEVEL);
    }

    LEVEL_WORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| folded.contains(w)))
        .map(|(level, _)| *level)
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parenthesised_levels() {
        let rows = parse_lang_line("Français (Natif), Anglais (Courant)");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Français");
        assert_eq!(rows[0].level, 5);
        assert_eq!(rows[1].name, "Anglais");
        assert_eq!(rows[1].level_label.as_deref(), Some("Courant"));
        assert_eq!(rows[1].level, 4);
    }

    #[test]
    fn commas_inside_parentheses_do_not_split() {
        let rows = parse_lang_line("English (fluent, C1); Spanish - basic | German: A1");
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["English", "Spanish", "German"]);
        assert_eq!(rows.iter().map(|r| r.level).collect::<Vec<_>>(), vec![4, 2, 1]);
    }

    #[test]
    fn missing_or_unknown_levels_default_to_three() {
        let rows = parse_lang_line("Italien, Portugais (quelque chose)");
        assert!(rows.iter().all(|r| r.level == 3));
        assert!(rows[0].level_label.is_none());
    }

    #[test]
    fn explicit_scores() {
        assert_eq!(level_from_label("4/5"), 4);
        assert_eq!(level_from_label("9/5"), 5);
        assert_eq!(level_from_label("Intermédiaire"), 3);
        assert_eq!(level_from_label("Bilingue"), 5);
    }

    #[test]
    fn empty_line_yields_no_rows() {
        assert!(parse_lang_line("").is_empty());
        assert!(parse_lang_line(" , ; ").is_empty());
    }
}

//! Content-volume estimate and the typography it selects.

use folio_model::CvDocModel;
use std::borrow::Cow;

fn len(s: &str) -> usize {
    s.chars().count()
}

/// Weighted character count over every text field of the model.
///
/// Experience entries carry a fixed overhead for their header lines and each
/// bullet one for its indent and line end.
pub fn content_volume(model: &CvDocModel) -> usize {
    let skills: usize = model.skills.all().map(|s| len(s) + 2).sum();
    let xp: usize = model
        .xp
        .iter()
        .map(|e| {
            let header = len(&e.company)
                + len(&e.role)
                + len(&e.dates)
                + e.city.as_deref().map(len).unwrap_or(0);
            let bullets: usize = e.bullets.iter().map(|b| len(b) + 15).sum();
            header + 40 + bullets
        })
        .sum();
    let education: usize = model.education.iter().map(|l| len(l) + 20).sum();
    let hobbies: usize = model.hobbies.iter().map(|h| len(h) + 2).sum();

    len(&model.profile)
        + skills
        + xp
        + education
        + len(&model.certs)
        + len(&model.lang_line)
        + hobbies
}

/// Sizes the ATS template draws with before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtsTypography {
    pub font_size: f32,
    pub heading_size: f32,
    pub title_size: f32,
    /// Multiple of the font size.
    pub line_height: f32,
    pub margin: f32,
}

const fn typo(font: f32, heading: f32, title: f32, line_height: f32, margin: f32) -> AtsTypography {
    AtsTypography {
        font_size: font,
        heading_size: heading,
        title_size: title,
        line_height,
        margin,
    }
}

const THRESHOLDS: [usize; 7] = [1900, 2200, 2600, 3000, 3400, 3800, 4300];

const BUCKETS: [AtsTypography; 8] = [
    typo(10.5, 13.0, 22.0, 1.35, 42.0),
    typo(10.2, 12.6, 21.0, 1.32, 40.0),
    typo(10.0, 12.2, 20.0, 1.30, 38.0),
    typo(9.7, 11.8, 19.0, 1.27, 36.0),
    typo(9.4, 11.4, 18.0, 1.24, 34.0),
    typo(9.1, 11.0, 17.0, 1.21, 32.0),
    typo(8.8, 10.6, 16.0, 1.18, 30.0),
    typo(8.5, 10.2, 15.0, 1.15, 28.0),
];

/// Denser content gets smaller type and tighter margins.
pub fn ats_typography(volume: usize) -> AtsTypography {
    let bucket = THRESHOLDS.iter().filter(|t| volume >= **t).count();
    BUCKETS[bucket]
}

fn profile_limit(volume: usize) -> Option<usize> {
    if volume >= 4300 {
        Some(420)
    } else if volume >= 3400 {
        Some(480)
    } else {
        None
    }
}

/// Shortens `text` to at most `max` characters plus an ellipsis, cutting at
/// the last whole word.
pub fn truncate_words(text: &str, max: usize) -> Cow<'_, str> {
    if len(text) <= max {
        return Cow::Borrowed(text);
    }
    let cut = text
        .char_indices()
        .nth(max)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    let head = head.trim_end_matches(|c: char| c.is_whitespace() || ",;:-".contains(c));
    Cow::Owned(format!("{head}…"))
}

/// The profile as templates print it.
pub fn truncate_profile(profile: &str, volume: usize) -> Cow<'_, str> {
    match profile_limit(volume) {
        Some(max) => truncate_words(profile, max),
        None => Cow::Borrowed(profile),
    }
}

/// A model ready for rendering, with its volume.
#[derive(Debug, Clone)]
pub struct Prepared<'a> {
    pub model: Cow<'a, CvDocModel>,
    pub volume: usize,
}

pub fn prepare(model: &CvDocModel) -> Prepared<'_> {
    let volume = content_volume(model);
    let model = match truncate_profile(&model.profile, volume) {
        Cow::Borrowed(_) => Cow::Borrowed(model),
        Cow::Owned(profile) => {
            log::debug!(
                "Profile truncated to {} chars at content volume {}",
                len(&profile),
                volume
            );
            let mut owned = model.clone();
            owned.profile = profile;
            Cow::Owned(owned)
        }
    };
    Prepared { model, volume }
}

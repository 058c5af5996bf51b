//! TrueType families read with `ttf-parser`.
//!
//! Faces loaded here are embedded in the output, so any character in their
//! cmap can be drawn.

use folio_style::FontVariant;
use folio_traits::{EmbeddedFace, FaceMetrics, FaceProgram, FontError, FontSource, GlyphMetrics};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Serves one TrueType family from font files or in-memory data.
///
/// A regular face is required. Missing variants reuse the closest face that
/// was loaded: bold italic falls back to bold, then italic, then regular.
#[derive(Debug, Clone)]
pub struct TrueTypeSource {
    family: String,
    faces: [Option<FaceMetrics>; 4],
}

fn slot(variant: FontVariant) -> usize {
    match variant {
        FontVariant::Regular => 0,
        FontVariant::Bold => 1,
        FontVariant::Italic => 2,
        FontVariant::BoldItalic => 3,
    }
}

fn fallbacks(variant: FontVariant) -> &'static [FontVariant] {
    match variant {
        FontVariant::Regular => &[FontVariant::Regular],
        FontVariant::Bold => &[FontVariant::Bold, FontVariant::Regular],
        FontVariant::Italic => &[FontVariant::Italic, FontVariant::Regular],
        FontVariant::BoldItalic => &[
            FontVariant::BoldItalic,
            FontVariant::Bold,
            FontVariant::Italic,
            FontVariant::Regular,
        ],
    }
}

impl TrueTypeSource {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            faces: [None, None, None, None],
        }
    }

    /// Adds `variant` from the font program in `data`.
    pub fn with_face(mut self, variant: FontVariant, data: Vec<u8>) -> Result<Self, FontError> {
        let face = parse_face(&self.family, variant, data, 0)?;
        log::debug!(
            "Loaded {:?} face of '{}' as {}",
            variant,
            self.family,
            face.base_font
        );
        self.faces[slot(variant)] = Some(face);
        Ok(self)
    }

    pub fn with_face_file(
        self,
        variant: FontVariant,
        path: impl AsRef<Path>,
    ) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| FontError::InvalidProgram(path.display().to_string(), e.to_string()))?;
        self.with_face(variant, data)
    }

    /// Looks the family up among the fonts known to `db`.
    #[cfg(feature = "system-fonts")]
    pub fn from_database(db: &fontdb::Database, family: &str) -> Result<Self, FontError> {
        let mut source = Self::new(family);
        for variant in FontVariant::ALL {
            let (weight, style) = match variant {
                FontVariant::Regular => (fontdb::Weight::NORMAL, fontdb::Style::Normal),
                FontVariant::Bold => (fontdb::Weight::BOLD, fontdb::Style::Normal),
                FontVariant::Italic => (fontdb::Weight::NORMAL, fontdb::Style::Italic),
                FontVariant::BoldItalic => (fontdb::Weight::BOLD, fontdb::Style::Italic),
            };
            let query = fontdb::Query {
                families: &[fontdb::Family::Name(family)],
                weight,
                stretch: fontdb::Stretch::Normal,
                style,
            };
            let Some(id) = db.query(&query) else {
                continue;
            };
            let parsed = db.with_face_data(id, |data, index| {
                parse_face(family, variant, data.to_vec(), index)
            });
            match parsed {
                Some(Ok(face)) => source.faces[slot(variant)] = Some(face),
                Some(Err(e)) => log::warn!("Skipping {variant:?} face of '{family}': {e}"),
                None => log::warn!("Font data for {variant:?} face of '{family}' is unreadable"),
            }
        }
        if source.faces[slot(FontVariant::Regular)].is_none() {
            return Err(FontError::MissingFamily(family.to_string()));
        }
        Ok(source)
    }

    /// Looks the family up among installed system fonts.
    #[cfg(feature = "system-fonts")]
    pub fn system(family: &str) -> Result<Self, FontError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Searching {} system font face(s) for '{}'", db.len(), family);
        Self::from_database(&db, family)
    }
}

impl FontSource for TrueTypeSource {
    fn face(&self, family: &str, variant: FontVariant) -> Result<FaceMetrics, FontError> {
        if !family.eq_ignore_ascii_case(&self.family) {
            return Err(FontError::MissingFamily(family.to_string()));
        }
        fallbacks(variant)
            .iter()
            .find_map(|v| self.faces[slot(*v)].clone())
            .ok_or_else(|| FontError::MissingFace {
                family: self.family.clone(),
                variant,
            })
    }

    fn families(&self) -> Vec<String> {
        vec![self.family.clone()]
    }

    fn name(&self) -> &'static str {
        "TrueTypeSource"
    }
}

/// Reads the metrics and cmap of face `index` in `data`, keeping the program
/// for embedding. Metrics are converted to 1000-per-em units.
fn parse_face(
    family: &str,
    variant: FontVariant,
    data: Vec<u8>,
    index: u32,
) -> Result<FaceMetrics, FontError> {
    let invalid = |msg: String| FontError::InvalidProgram(format!("{family} {variant:?}"), msg);
    let face = ttf_parser::Face::parse(&data, index).map_err(|e| invalid(e.to_string()))?;
    if face.tables().glyf.is_none() {
        return Err(invalid("no TrueType outlines (glyf table)".into()));
    }

    let upem = face.units_per_em() as f32;
    let scale = |v: f32| (v * 1000.0 / upem).round();
    let advance = |gid: ttf_parser::GlyphId| {
        scale(face.glyph_hor_advance(gid).unwrap_or(0) as f32) as u16
    };

    let mut glyphs = BTreeMap::new();
    if let Some(cmap) = face.tables().cmap {
        for subtable in cmap.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                if let Some(c) = char::from_u32(cp)
                    && let Some(gid) = subtable.glyph_index(cp)
                    && gid.0 != 0
                {
                    glyphs.entry(c).or_insert(GlyphMetrics {
                        gid: gid.0,
                        advance: advance(gid),
                    });
                }
            });
        }
    }
    if glyphs.is_empty() {
        return Err(invalid("no Unicode cmap".into()));
    }

    let bounds = face.global_bounding_box();
    let bbox = [bounds.x_min, bounds.y_min, bounds.x_max, bounds.y_max]
        .map(|v| scale(v as f32) as i16);
    let ascent = scale(face.ascender() as f32) as i16;
    let descent = scale(face.descender() as f32) as i16;
    let cap_height = face
        .capital_height()
        .map_or(ascent, |h| scale(h as f32) as i16);
    let missing_advance = advance(ttf_parser::GlyphId(0));
    let italic_angle = face.italic_angle();
    let base_font = postscript_name(&face).unwrap_or_else(|| fallback_name(family, variant));

    Ok(FaceMetrics {
        base_font,
        program: FaceProgram::Embedded(Arc::new(EmbeddedFace {
            data: Arc::new(data),
            glyphs,
            missing_advance,
            bbox,
            italic_angle,
            cap_height,
        })),
        ascent,
        descent,
    })
}

fn postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
        .find_map(|n| n.to_string())
        .map(|name| pdf_name(&name))
        .filter(|name| !name.is_empty())
}

fn fallback_name(family: &str, variant: FontVariant) -> String {
    pdf_name(&format!("{family}-{variant:?}"))
}

/// Keeps only characters that are safe in a PDF name.
fn pdf_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A TrueType family commonly installed on Linux hosts.
    const DEJAVU: [&str; 2] = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    ];

    fn dejavu() -> Option<TrueTypeSource> {
        if !Path::new(DEJAVU[0]).exists() {
            eprintln!("DejaVu Sans not installed, skipping");
            return None;
        }
        let source = TrueTypeSource::new("DejaVu Sans")
            .with_face_file(FontVariant::Regular, DEJAVU[0])
            .unwrap();
        Some(match Path::new(DEJAVU[1]).exists() {
            true => source.with_face_file(FontVariant::Bold, DEJAVU[1]).unwrap(),
            false => source,
        })
    }

    fn embedded(face: &FaceMetrics) -> &EmbeddedFace {
        match &face.program {
            FaceProgram::Embedded(e) => e,
            FaceProgram::Standard { .. } => panic!("expected an embedded face"),
        }
    }

    #[test]
    fn garbage_is_not_a_font() {
        let err = TrueTypeSource::new("Broken")
            .with_face(FontVariant::Regular, b"definitely not a font".to_vec())
            .unwrap_err();
        assert!(matches!(err, FontError::InvalidProgram(..)));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = TrueTypeSource::new("Nowhere")
            .with_face_file(FontVariant::Regular, "/nonexistent/folio/font.ttf")
            .unwrap_err();
        assert!(matches!(err, FontError::InvalidProgram(path, _) if path.contains("font.ttf")));
    }

    #[test]
    fn regular_face_is_required() {
        let err = TrueTypeSource::new("Empty").face("Empty", FontVariant::Bold).unwrap_err();
        assert!(matches!(err, FontError::MissingFace { variant: FontVariant::Bold, .. }));
        assert_eq!(
            TrueTypeSource::new("Empty").face("Other", FontVariant::Regular),
            Err(FontError::MissingFamily("Other".into()))
        );
    }

    #[test]
    fn names_are_pdf_safe() {
        assert_eq!(fallback_name("Noto Sans", FontVariant::BoldItalic), "NotoSans-BoldItalic");
        assert_eq!(pdf_name("Open Sans/Light (v2)"), "OpenSansLightv2");
    }

    #[test]
    fn installed_family_covers_extended_latin() {
        let Some(source) = dejavu() else { return };
        let face = source.face("dejavu sans", FontVariant::Regular).unwrap();
        assert_eq!(face.base_font, "DejaVuSans");
        assert!(face.ascent > 0 && face.descent < 0);

        let program = embedded(&face);
        assert!(!program.data.is_empty());
        for c in ['Ł', 'Š', 'ř', 'é', 'Ж'] {
            let glyph = program.glyph(c).unwrap();
            assert!(glyph.gid > 0 && glyph.advance > 0, "{c}");
        }
        assert!(program.bbox[2] > program.bbox[0]);
    }

    #[test]
    fn missing_variants_reuse_loaded_faces() {
        let Some(source) = dejavu() else { return };
        let regular = source.face("DejaVu Sans", FontVariant::Regular).unwrap();
        let italic = source.face("DejaVu Sans", FontVariant::Italic).unwrap();
        assert_eq!(italic.base_font, regular.base_font);
        let bold_italic = source.face("DejaVu Sans", FontVariant::BoldItalic).unwrap();
        let bold = source.face("DejaVu Sans", FontVariant::Bold).unwrap();
        assert_eq!(bold_italic.base_font, bold.base_font);
    }

    #[cfg(feature = "system-fonts")]
    #[test]
    fn empty_database_has_no_families() {
        let db = fontdb::Database::new();
        assert_eq!(
            TrueTypeSource::from_database(&db, "DejaVu Sans").unwrap_err(),
            FontError::MissingFamily("DejaVu Sans".into())
        );
    }

    #[cfg(feature = "system-fonts")]
    #[test]
    fn database_lookup_reads_loaded_data() {
        if !Path::new(DEJAVU[0]).exists() {
            return;
        }
        let mut db = fontdb::Database::new();
        db.load_font_data(std::fs::read(DEJAVU[0]).unwrap());
        let source = TrueTypeSource::from_database(&db, "DejaVu Sans").unwrap();
        let face = source.face("DejaVu Sans", FontVariant::Regular).unwrap();
        assert!(face.is_embedded());
    }
}

use crate::encoding::winansi_code;
use folio_style::FontVariant;
use folio_traits::{FaceMetrics, FaceProgram, FontError, FontSource};

/// The four faces of one family, ready for measurement.
#[derive(Debug, Clone)]
pub struct FontTable {
    family: String,
    faces: [FaceMetrics; 4],
}

/// Advance of `c` in 1000-per-em units. Characters the face lacks measure
/// like the placeholder they are drawn as.
fn advance(face: &FaceMetrics, c: char) -> u16 {
    match &face.program {
        FaceProgram::Standard { widths } => widths[winansi_code(c).unwrap_or(b'?') as usize],
        FaceProgram::Embedded(embedded) => match embedded.glyph(c) {
            Some(glyph) => glyph.advance,
            None if c.is_whitespace() => embedded
                .glyph(' ')
                .map_or(embedded.missing_advance, |g| g.advance),
            None => embedded.missing_advance,
        },
    }
}

fn slot(variant: FontVariant) -> usize {
    match variant {
        FontVariant::Regular => 0,
        FontVariant::Bold => 1,
        FontVariant::Italic => 2,
        FontVariant::BoldItalic => 3,
    }
}

impl FontTable {
    /// Loads every face of `family`. Any missing face fails the whole table.
    pub fn load(source: &dyn FontSource, family: &str) -> Result<Self, FontError> {
        let load = |variant: FontVariant| {
            source.face(family, variant).map_err(|e| match e {
                FontError::MissingFamily(_) if variant != FontVariant::Regular => {
                    FontError::MissingFace {
                        family: family.to_string(),
                        variant,
                    }
                }
                other => other,
            })
        };
        let faces = [
            load(FontVariant::Regular)?,
            load(FontVariant::Bold)?,
            load(FontVariant::Italic)?,
            load(FontVariant::BoldItalic)?,
        ];
        for face in &faces {
            if face.ascent <= 0 || face.descent > 0 {
                return Err(FontError::InvalidMetrics(
                    face.base_font.clone(),
                    format!("ascent {} / descent {}", face.ascent, face.descent),
                ));
            }
        }
        Ok(Self {
            family: family.to_string(),
            faces,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face(&self, variant: FontVariant) -> &FaceMetrics {
        &self.faces[slot(variant)]
    }

    pub fn char_width(&self, c: char, variant: FontVariant, size: f32) -> f32 {
        advance(self.face(variant), c) as f32 * size / 1000.0
    }

    /// Advance width of `text` at `size` points.
    pub fn text_width(&self, text: &str, variant: FontVariant, size: f32) -> f32 {
        let face = self.face(variant);
        let units: u32 = text.chars().map(|c| advance(face, c) as u32).sum();
        units as f32 * size / 1000.0
    }

    /// Whether `variant` has a glyph for `c`.
    pub fn covers(&self, c: char, variant: FontVariant) -> bool {
        match &self.face(variant).program {
            FaceProgram::Standard { .. } => winansi_code(c).is_some(),
            FaceProgram::Embedded(face) => c.is_whitespace() || face.glyph(c).is_some(),
        }
    }

    /// Whether the faces are embedded TrueType programs.
    pub fn is_embedded(&self) -> bool {
        self.faces.iter().all(FaceMetrics::is_embedded)
    }

    pub fn ascent(&self, variant: FontVariant, size: f32) -> f32 {
        self.face(variant).ascent as f32 * size / 1000.0
    }

    /// Positive distance below the baseline.
    pub fn descent(&self, variant: FontVariant, size: f32) -> f32 {
        -(self.face(variant).descent as f32) * size / 1000.0
    }
}

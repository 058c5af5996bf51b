//! Compiled-in AFM metrics for the Helvetica family.
//!
//! Documents reference these faces by name only; viewers supply the glyphs,
//! so nothing is embedded in the output. Only WinAnsi text can be drawn
//! with them; load a TrueType family for anything wider.

use folio_style::FontVariant;
use folio_traits::{FaceMetrics, FaceProgram, FontError, FontSource};
use std::sync::Arc;

pub const HELVETICA: &str = "Helvetica";

const ASCENT: i16 = 718;
const DESCENT: i16 = -207;

/// Advance widths for codes 32..=126.
#[rustfmt::skip]
const REGULAR_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Codes 0x80..=0xBF that are not letters; identical across weights.
#[rustfmt::skip]
const SYMBOLS: &[(u8, u16)] = &[
    (0x80, 556), (0x82, 222), (0x83, 556), (0x84, 333), (0x85, 1000),
    (0x86, 556), (0x87, 556), (0x88, 333), (0x89, 1000), (0x8B, 333),
    (0x91, 222), (0x92, 222), (0x93, 333), (0x94, 333), (0x95, 350),
    (0x96, 556), (0x97, 1000), (0x98, 333), (0x99, 1000), (0x9B, 333),
    (0xA0, 278), (0xA1, 333), (0xA2, 556), (0xA3, 556), (0xA4, 556),
    (0xA5, 556), (0xA6, 260), (0xA7, 556), (0xA8, 333), (0xA9, 737),
    (0xAA, 370), (0xAB, 556), (0xAC, 584), (0xAD, 333), (0xAE, 737),
    (0xAF, 333), (0xB0, 400), (0xB1, 584), (0xB2, 333), (0xB3, 333),
    (0xB4, 333), (0xB5, 556), (0xB6, 537), (0xB7, 278), (0xB8, 333),
    (0xB9, 333), (0xBA, 365), (0xBB, 556), (0xBC, 834), (0xBD, 834),
    (0xBE, 834), (0xBF, 611), (0xD7, 584), (0xF7, 584),
];

/// Accented letters measure like their base letter.
#[rustfmt::skip]
const ACCENTED: &[(u8, u8)] = &[
    (0x8A, b'S'), (0x8E, b'Z'), (0x9A, b's'), (0x9E, b'z'), (0x9F, b'Y'),
    (0xC0, b'A'), (0xC1, b'A'), (0xC2, b'A'), (0xC3, b'A'), (0xC4, b'A'), (0xC5, b'A'),
    (0xC7, b'C'), (0xC8, b'E'), (0xC9, b'E'), (0xCA, b'E'), (0xCB, b'E'),
    (0xCC, b'I'), (0xCD, b'I'), (0xCE, b'I'), (0xCF, b'I'), (0xD0, b'D'), (0xD1, b'N'),
    (0xD2, b'O'), (0xD3, b'O'), (0xD4, b'O'), (0xD5, b'O'), (0xD6, b'O'), (0xD8, b'O'),
    (0xD9, b'U'), (0xDA, b'U'), (0xDB, b'U'), (0xDC, b'U'), (0xDD, b'Y'), (0xDE, b'P'),
    (0xE0, b'a'), (0xE1, b'a'), (0xE2, b'a'), (0xE3, b'a'), (0xE4, b'a'), (0xE5, b'a'),
    (0xE7, b'c'), (0xE8, b'e'), (0xE9, b'e'), (0xEA, b'e'), (0xEB, b'e'),
    (0xEC, b'i'), (0xED, b'i'), (0xEE, b'i'), (0xEF, b'i'), (0xF0, b'o'), (0xF1, b'n'),
    (0xF2, b'o'), (0xF3, b'o'), (0xF4, b'o'), (0xF5, b'o'), (0xF6, b'o'), (0xF8, b'o'),
    (0xF9, b'u'), (0xFA, b'u'), (0xFB, b'u'), (0xFC, b'u'), (0xFD, b'y'), (0xFE, b'p'),
    (0xFF, b'y'),
];

/// Ligature-like letters: (code, regular, bold).
const WIDE_LETTERS: &[(u8, u16, u16)] = &[
    (0x8C, 1000, 1000),
    (0x9C, 944, 944),
    (0xC6, 1000, 1000),
    (0xDF, 611, 611),
    (0xE6, 889, 889),
];

fn build_widths(ascii: &[u16; 95], bold: bool) -> [u16; 256] {
    let mut widths = [0u16; 256];
    for (i, w) in ascii.iter().enumerate() {
        widths[32 + i] = *w;
    }
    for &(code, w) in SYMBOLS {
        widths[code as usize] = w;
    }
    for &(code, base) in ACCENTED {
        widths[code as usize] = widths[base as usize];
    }
    for &(code, regular, heavy) in WIDE_LETTERS {
        widths[code as usize] = if bold { heavy } else { regular };
    }
    // `?` stands in for anything unmappable
    let fallback = widths[b'?' as usize];
    for w in widths.iter_mut().skip(32) {
        if *w == 0 {
            *w = fallback;
        }
    }
    widths
}

fn base_font_name(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "Helvetica",
        FontVariant::Bold => "Helvetica-Bold",
        FontVariant::Italic => "Helvetica-Oblique",
        FontVariant::BoldItalic => "Helvetica-BoldOblique",
    }
}

/// Serves the Helvetica family from compiled-in metrics.
#[derive(Debug, Clone)]
pub struct Base14Source {
    regular: Arc<[u16; 256]>,
    bold: Arc<[u16; 256]>,
}

impl Base14Source {
    pub fn new() -> Self {
        Self {
            regular: Arc::new(build_widths(&REGULAR_ASCII, false)),
            bold: Arc::new(build_widths(&BOLD_ASCII, true)),
        }
    }
}

impl Default for Base14Source {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSource for Base14Source {
    fn face(&self, family: &str, variant: FontVariant) -> Result<FaceMetrics, FontError> {
        if !family.eq_ignore_ascii_case(HELVETICA) {
            return Err(FontError::MissingFamily(family.to_string()));
        }
        let widths = match variant {
            FontVariant::Regular | FontVariant::Italic => Arc::clone(&self.regular),
            FontVariant::Bold | FontVariant::BoldItalic => Arc::clone(&self.bold),
        };
        Ok(FaceMetrics {
            base_font: base_font_name(variant).to_string(),
            program: FaceProgram::Standard { widths },
            ascent: ASCENT,
            descent: DESCENT,
        })
    }

    fn families(&self) -> Vec<String> {
        vec![HELVETICA.to_string()]
    }

    fn name(&self) -> &'static str {
        "Base14Source"
    }
}

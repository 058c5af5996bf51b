use folio_traits::{FaceMetrics, FaceProgram};

/// Unicode characters outside Latin-1 that WinAnsi places in 0x80..=0x9F.
const WINANSI_HIGH: &[(char, u8)] = &[
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// The WinAnsi code for `c`, if it has one.
pub fn winansi_code(c: char) -> Option<u8> {
    let cp = c as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => Some(cp as u8),
        _ => match c {
            '\t' | '\n' | '\r' | '\u{2009}' | '\u{202F}' => Some(b' '),
            '\u{2010}' | '\u{2011}' | '\u{2212}' => Some(b'-'),
            _ => WINANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map(|(_, code)| *code),
        },
    }
}

/// Text encoded for one face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    /// Show-string operand: WinAnsi codes, or big-endian glyph ids for
    /// embedded faces.
    pub bytes: Vec<u8>,
    /// Glyph ids drawn from an embedded face with the character each stands for.
    pub glyphs: Vec<(u16, char)>,
    /// Characters the face cannot draw, in order of appearance.
    pub missing: Vec<char>,
}

/// Encodes `text` for `face`.
///
/// Characters the face has no glyph for are drawn as `?` (standard faces) or
/// `.notdef` (embedded faces) and reported in [`EncodedText::missing`].
pub fn encode_text(face: &FaceMetrics, text: &str) -> EncodedText {
    let mut out = EncodedText::default();
    match &face.program {
        FaceProgram::Standard { .. } => {
            for c in text.chars() {
                let code = winansi_code(c).unwrap_or_else(|| {
                    out.missing.push(c);
                    b'?'
                });
                out.bytes.push(code);
            }
        }
        FaceProgram::Embedded(embedded) => {
            for c in text.chars() {
                let (gid, shown) = match embedded.glyph(c) {
                    Some(glyph) => (glyph.gid, c),
                    None if c.is_whitespace() => (embedded.glyph(' ').map_or(0, |g| g.gid), ' '),
                    None => {
                        out.missing.push(c);
                        (0, c)
                    }
                };
                out.bytes.extend_from_slice(&gid.to_be_bytes());
                if gid != 0 {
                    out.glyphs.push((gid, shown));
                }
            }
        }
    }
    out
}

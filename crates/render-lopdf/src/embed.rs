//! Type0 fonts for embedded TrueType faces.
//!
//! Text is shown with two-byte glyph ids (`Identity-H`), so any glyph in the
//! face can be drawn. `/W` and the ToUnicode map cover only the glyphs a
//! document actually uses; the font program itself is embedded whole.

use folio_traits::{EmbeddedFace, FaceMetrics};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::fmt::Write;

/// bfchar entries per block; the CMap format caps blocks at 100.
const BFCHAR_BLOCK: usize = 100;

/// Adds the font program, descriptor, descendant font and ToUnicode map for
/// `face` and returns the id of the Type0 font.
pub(crate) fn embed_truetype(
    doc: &mut Document,
    face: &FaceMetrics,
    program: &EmbeddedFace,
    drawn: &BTreeMap<u16, char>,
) -> ObjectId {
    let base_font = Object::Name(face.base_font.as_bytes().to_vec());

    let file_id = doc.add_object(Stream::new(
        dictionary! { "Length1" => program.data.len() as i64 },
        program.data.to_vec(),
    ));
    let bbox: Vec<Object> = program.bbox.iter().map(|v| Object::Integer(*v as i64)).collect();
    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => base_font.clone(),
        // nonsymbolic
        "Flags" => 32i64,
        "FontBBox" => bbox,
        "ItalicAngle" => program.italic_angle,
        "Ascent" => face.ascent as i64,
        "Descent" => face.descent as i64,
        "CapHeight" => program.cap_height as i64,
        "StemV" => 80i64,
        "MissingWidth" => program.missing_advance as i64,
        "FontFile2" => file_id,
    });
    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => base_font.clone(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0i64,
        },
        "FontDescriptor" => descriptor_id,
        "DW" => program.missing_advance as i64,
        "W" => width_array(program, drawn),
        "CIDToGIDMap" => "Identity",
    });
    let to_unicode_id = doc.add_object(Stream::new(
        dictionary! {},
        to_unicode_cmap(drawn).into_bytes(),
    ));
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => base_font,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![Object::Reference(cid_font_id)],
        "ToUnicode" => to_unicode_id,
    })
}

/// `/W` entries of the form `first [w1 w2 ...]`, one per run of
/// consecutive glyph ids.
fn width_array(program: &EmbeddedFace, drawn: &BTreeMap<u16, char>) -> Vec<Object> {
    let mut out = Vec::new();
    let mut run: Option<(u16, Vec<Object>)> = None;
    let mut last = 0u16;
    for (&gid, &c) in drawn {
        let width = program.glyph(c).map_or(program.missing_advance, |g| g.advance);
        match run.as_mut() {
            Some((_, widths)) if gid == last.wrapping_add(1) => widths.push((width as i64).into()),
            _ => {
                if let Some((first, widths)) = run.take() {
                    out.push((first as i64).into());
                    out.push(Object::Array(widths));
                }
                run = Some((gid, vec![(width as i64).into()]));
            }
        }
        last = gid;
    }
    if let Some((first, widths)) = run {
        out.push((first as i64).into());
        out.push(Object::Array(widths));
    }
    out
}

/// A ToUnicode CMap from glyph ids to the characters they show.
fn to_unicode_cmap(drawn: &BTreeMap<u16, char>) -> String {
    let entries: Vec<(u16, char)> = drawn.iter().map(|(g, c)| (*g, *c)).collect();
    let mut out = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (Identity) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
    );
    for block in entries.chunks(BFCHAR_BLOCK) {
        let _ = writeln!(out, "{} beginbfchar", block.len());
        for (gid, c) in block {
            let mut units = [0u16; 2];
            let utf16: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{u:04X}"))
                .collect();
            let _ = writeln!(out, "<{gid:04X}> <{utf16}>");
        }
        out.push_str("endbfchar\n");
    }
    out.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\nend\n",
    );
    out
}

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Text of every page joined by newlines, as lopdf decodes it
/// through each font's encoding or ToUnicode map.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    numbers
        .iter()
        .filter_map(|n| doc.extract_text(&[*n]).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

/// BaseFont names referenced from page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Some(page) = doc.get_object(*page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Some(resources) = page.get(b"Resources").ok().and_then(|r| resolve(doc, r)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve(doc, f)) else {
            continue;
        };
        for (_, font) in font_dict.iter() {
            if let Some(font) = resolve(doc, font)
                && let Ok(name) = font.get(b"BaseFont").and_then(Object::as_name)
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// The `/Title` of the trailer's `/Info` dictionary, decoding UTF-16BE
/// text strings.
pub fn info_title(doc: &LopdfDocument) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok().and_then(|i| resolve(doc, i))?;
    let Object::String(bytes, _) = info.get(b"Title").ok()? else {
        return None;
    };
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(utf16) => {
            let units: Vec<u16> = utf16
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).ok()
        }
        None => Some(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Fails unless the extracted text of `$pdf` contains `$text`.
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {{
        let text = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(text.contains($text), "'{}' not found in:\n{}", $text, text);
    }};
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {{
        let pages = $pdf.page_count();
        assert_eq!(pages, $count, "page count");
    }};
}

/// Fails unless some page references a BaseFont containing `$name`.
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $name:expr) => {{
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($name)),
            "no font like '{}' among {:?}",
            $name,
            fonts
        );
    }};
}

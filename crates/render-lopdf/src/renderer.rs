use crate::embed::embed_truetype;
use crate::painter::{GlyphUsage, PageContext};
use folio_layout::{LaidOutDocument, LayoutDocument, LayoutEngine};
use folio_render_core::utils::font_resource_name;
use folio_render_core::{DocumentRenderer, RenderError};
use folio_style::FontVariant;
use folio_traits::FaceProgram;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;

/// Renders layout documents to PDF bytes entirely in memory.
///
/// Output depends only on the input document: no timestamps or random
/// identifiers are written, so equal inputs give byte-identical files.
///
/// Characters the font table cannot draw are shown as placeholders and
/// logged as a warning, or rejected with [`RenderError::MissingGlyphs`]
/// when [`with_strict_glyphs`](Self::with_strict_glyphs) is set.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    engine: LayoutEngine,
    strict_glyphs: bool,
}

impl LopdfRenderer {
    pub fn new(engine: LayoutEngine) -> Self {
        Self {
            engine,
            strict_glyphs: false,
        }
    }

    /// Renderer over the process-wide font table.
    pub fn with_global_fonts() -> Result<Self, RenderError> {
        Ok(Self::new(LayoutEngine::from_global_fonts()?))
    }

    /// Fail instead of drawing placeholders for characters the fonts lack.
    pub fn with_strict_glyphs(mut self, strict: bool) -> Self {
        self.strict_glyphs = strict;
        self
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn render_laid_out(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();

        let width = laid_out.page_size.width;
        let height = laid_out.page_size.height;
        let mut usage = GlyphUsage::default();
        let mut kids: Vec<Object> = Vec::with_capacity(laid_out.pages.len());

        for page in &laid_out.pages {
            let content =
                PageContext::new(height, self.engine.fonts(), &mut usage).paint_page(page);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        self.check_coverage(&usage)?;
        let fonts = self.font_resources(&mut doc, &usage);
        doc.objects
            .insert(resources_id, Object::Dictionary(dictionary! { "Font" => fonts }));

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let info_id = self.write_info(&mut doc, laid_out);
        doc.trailer.set("Info", info_id);

        log::debug!(
            "Rendered {} page(s), {} object(s)",
            laid_out.pages.len(),
            doc.objects.len()
        );

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn check_coverage(&self, usage: &GlyphUsage) -> Result<(), RenderError> {
        if usage.missing.is_empty() {
            return Ok(());
        }
        let family = self.engine.fonts().family().to_string();
        let chars: String = usage.missing.iter().collect();
        if self.strict_glyphs {
            return Err(RenderError::MissingGlyphs { family, chars });
        }
        log::warn!("Font '{family}' has no glyph for {chars:?}; drawn as placeholders");
        Ok(())
    }

    /// The `/Font` resource dictionary. Variants that resolve to the same
    /// embedded face share one font object.
    fn font_resources(&self, doc: &mut Document, usage: &GlyphUsage) -> Dictionary {
        let table = self.engine.fonts();
        let mut embedded: BTreeMap<&str, ObjectId> = BTreeMap::new();
        let mut fonts = Dictionary::new();
        for variant in FontVariant::ALL {
            let face = table.face(variant);
            let font: Object = match &face.program {
                FaceProgram::Standard { .. } => dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => face.base_font.as_str(),
                    "Encoding" => "WinAnsiEncoding",
                }
                .into(),
                FaceProgram::Embedded(program) => {
                    let id = match embedded.get(face.base_font.as_str()) {
                        Some(id) => *id,
                        None => {
                            let drawn: BTreeMap<u16, char> = FontVariant::ALL
                                .iter()
                                .filter(|v| table.face(**v).base_font == face.base_font)
                                .filter_map(|v| usage.drawn.get(v))
                                .flat_map(|glyphs| glyphs.iter().map(|(g, c)| (*g, *c)))
                                .collect();
                            let id = embed_truetype(doc, face, program, &drawn);
                            embedded.insert(face.base_font.as_str(), id);
                            id
                        }
                    };
                    id.into()
                }
            };
            fonts.set(font_resource_name(variant), font);
        }
        fonts
    }

    fn write_info(&self, doc: &mut Document, laid_out: &LaidOutDocument) -> ObjectId {
        let mut info = dictionary! {
            "Producer" => text_string("folio"),
        };
        if !laid_out.info.title.is_empty() {
            info.set("Title", text_string(&laid_out.info.title));
        }
        if !laid_out.info.author.is_empty() {
            info.set("Author", text_string(&laid_out.info.author));
        }
        doc.add_object(info)
    }
}

/// A PDF text string: literal for ASCII, UTF-16BE with a byte order mark
/// otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, doc: &LayoutDocument) -> Result<Vec<u8>, RenderError> {
        let laid_out = self.engine.layout(doc)?;
        self.render_laid_out(&laid_out)
    }

    fn count_pages(&self, bytes: &[u8]) -> Result<usize, RenderError> {
        let doc = Document::load_mem(bytes)?;
        Ok(doc.get_pages().len())
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}

use folio_layout::{
    ElementKind, Glyph, GlyphPaint, GlyphShape, GradientAxis, LaidOutPage, PositionedElement,
    TextStyle,
};
use folio_render_core::utils::{flip_y, font_resource_name, unit_rgb};
use folio_resource::{FontTable, encode_text};
use folio_style::FontVariant;
use folio_style::theme::mix_colors;
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::{BTreeMap, BTreeSet};

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Gradients are painted as this many flat bands.
const GRADIENT_BANDS: usize = 32;

/// Glyphs drawn across a document, gathered while pages are painted.
#[derive(Debug, Default)]
pub(crate) struct GlyphUsage {
    /// Glyph ids drawn from each embedded face, with the character shown.
    pub(crate) drawn: BTreeMap<FontVariant, BTreeMap<u16, char>>,
    /// Characters a face had no glyph for.
    pub(crate) missing: BTreeSet<char>,
}

/// Writes the operations for one page, skipping redundant state changes.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    fonts: &'a FontTable,
    usage: &'a mut GlyphUsage,
    ops: Vec<Operation>,
    font: Option<(FontVariant, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, fonts: &'a FontTable, usage: &'a mut GlyphUsage) -> Self {
        Self {
            page_height,
            fonts,
            usage,
            ops: Vec::new(),
            font: None,
            fill: None,
            stroke: None,
            line_width: None,
        }
    }

    pub(crate) fn paint_page(mut self, page: &LaidOutPage) -> Content {
        for element in &page.elements {
            self.paint(element);
        }
        Content {
            operations: self.ops,
        }
    }

    fn paint(&mut self, el: &PositionedElement) {
        match &el.kind {
            ElementKind::Text {
                text,
                style,
                baseline,
            } => self.draw_text(text, style, el.x, *baseline),
            ElementKind::Fill(color) => {
                self.set_fill_color(*color);
                self.rect(el.x, el.y, el.width, el.height);
                self.op("f", vec![]);
            }
            ElementKind::Gradient { from, to, axis } => {
                self.gradient(el, *from, *to, *axis);
            }
            ElementKind::Frame { color, line_width } => {
                self.set_stroke(*color, *line_width);
                self.rect(el.x, el.y, el.width, el.height);
                self.op("S", vec![]);
            }
            ElementKind::Line { color, line_width } => {
                self.set_stroke(*color, *line_width);
                self.move_to(el.x, el.y);
                self.line_to(el.x + el.width, el.y + el.height);
                self.op("S", vec![]);
            }
            ElementKind::Disc(color) => {
                self.set_fill_color(*color);
                let r = el.width.min(el.height) / 2.0;
                self.circle(el.x + el.width / 2.0, el.y + el.height / 2.0, r);
                self.op("f", vec![]);
            }
            ElementKind::Glyph { glyph, color } => self.draw_glyph(el, *glyph, *color),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, variant: FontVariant, size: f32) {
        if self.font != Some((variant, size)) {
            self.op(
                "Tf",
                vec![Object::Name(font_resource_name(variant).as_bytes().to_vec()), size.into()],
            );
            self.font = Some((variant, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill != Some(color) {
            let [r, g, b] = unit_rgb(color);
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.stroke != Some(color) {
            let [r, g, b] = unit_rgb(color);
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.stroke = Some(color);
        }
        if self.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.line_width = Some(width);
        }
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, x: f32, baseline: f32) {
        if text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(style.font, style.size);
        self.set_fill_color(style.color);
        let y = flip_y(baseline, self.page_height);
        self.op("Td", vec![x.into(), y.into()]);
        let face = self.fonts.face(style.font);
        let encoded = encode_text(face, text);
        self.usage.missing.extend(encoded.missing);
        let format = if face.is_embedded() {
            let drawn = self.usage.drawn.entry(style.font).or_default();
            for (gid, c) in encoded.glyphs {
                drawn.entry(gid).or_insert(c);
            }
            StringFormat::Hexadecimal
        } else {
            StringFormat::Literal
        };
        self.op("Tj", vec![Object::String(encoded.bytes, format)]);
        self.op("ET", vec![]);
    }

    /// Rectangle path from a top-left origin box.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let bottom = flip_y(y + h, self.page_height);
        self.op("re", vec![x.into(), bottom.into(), w.into(), h.into()]);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let y = flip_y(y, self.page_height);
        self.op("m", vec![x.into(), y.into()]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let y = flip_y(y, self.page_height);
        self.op("l", vec![x.into(), y.into()]);
    }

    fn circle(&mut self, cx: f32, cy: f32, r: f32) {
        let cy = flip_y(cy, self.page_height);
        let k = KAPPA * r;
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        self.op("m", vec![(cx + r).into(), cy.into()]);
        for q in quarters {
            self.op("c", q.iter().map(|v| (*v).into()).collect());
        }
        self.op("h", vec![]);
    }

    fn gradient(&mut self, el: &PositionedElement, from: Color, to: Color, axis: GradientAxis) {
        let span = match axis {
            GradientAxis::Vertical => el.height,
            GradientAxis::Horizontal => el.width,
        };
        if span <= 0.0 {
            return;
        }
        let step = span / GRADIENT_BANDS as f32;
        for i in 0..GRADIENT_BANDS {
            let t = i as f32 / (GRADIENT_BANDS - 1) as f32;
            self.set_fill_color(mix_colors(from, to, t));
            let offset = i as f32 * step;
            // bands overlap slightly so viewers show no seams
            let extent = if i + 1 == GRADIENT_BANDS { step } else { step + 0.5 };
            match axis {
                GradientAxis::Vertical => self.rect(el.x, el.y + offset, el.width, extent),
                GradientAxis::Horizontal => self.rect(el.x + offset, el.y, extent, el.height),
            }
            self.op("f", vec![]);
        }
    }

    fn draw_glyph(&mut self, el: &PositionedElement, glyph: Glyph, tint: Color) {
        let (ox, oy, w, h) = (el.x, el.y, el.width, el.height);
        let unit = w.min(h);
        let at = |u: f32, v: f32| (ox + u * w, oy + v * h);
        let color_of = |paint: GlyphPaint| match paint {
            GlyphPaint::Tint => tint,
            GlyphPaint::Fixed(c) => c,
        };

        for shape in glyph.shapes() {
            match shape {
                GlyphShape::Rect { x, y, w: sw, h: sh, paint } => {
                    self.set_fill_color(color_of(paint));
                    let (px, py) = at(x, y);
                    self.rect(px, py, sw * w, sh * h);
                    self.op("f", vec![]);
                }
                GlyphShape::Circle { cx, cy, r, paint } => {
                    self.set_fill_color(color_of(paint));
                    let (px, py) = at(cx, cy);
                    self.circle(px, py, r * unit);
                    self.op("f", vec![]);
                }
                GlyphShape::Ring { cx, cy, r, width, paint } => {
                    self.set_stroke(color_of(paint), width * unit);
                    let (px, py) = at(cx, cy);
                    self.circle(px, py, r * unit);
                    self.op("S", vec![]);
                }
                GlyphShape::Line { from, to, width, paint } => {
                    self.set_stroke(color_of(paint), width * unit);
                    let (x0, y0) = at(from.0, from.1);
                    let (x1, y1) = at(to.0, to.1);
                    self.move_to(x0, y0);
                    self.line_to(x1, y1);
                    self.op("S", vec![]);
                }
                GlyphShape::Polygon { points, paint } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    self.set_fill_color(color_of(paint));
                    let (x0, y0) = at(first.0, first.1);
                    self.move_to(x0, y0);
                    for p in rest {
                        let (px, py) = at(p.0, p.1);
                        self.line_to(px, py);
                    }
                    self.op("h", vec![]);
                    self.op("f", vec![]);
                }
            }
        }
    }
}

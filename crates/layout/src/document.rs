//! The backend-agnostic document tree produced by templates.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and y growing downwards. A [`LayoutDocument`] is a plain value: it is
//! built once and only read afterwards.

use crate::glyph::Glyph;
use folio_style::{FontVariant, TextAlign};
use folio_types::{Color, Insets, Rect, Size, A4_HEIGHT, A4_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub size: Size,
    pub margins: Insets,
}

impl PageSetup {
    pub fn a4(margins: Insets) -> Self {
        Self {
            size: Size::new(A4_WIDTH, A4_HEIGHT),
            margins,
        }
    }

    /// The area the block flow is laid out in.
    pub fn content_box(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            (self.size.width - self.margins.horizontal()).max(0.0),
            (self.size.height - self.margins.vertical()).max(0.0),
        )
    }
}

/// Which pages a decoration is painted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    All,
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// Color changes from top to bottom.
    Vertical,
    /// Color changes from left to right.
    Horizontal,
}

/// Page-level painting, drawn beneath the block flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Rect {
        rect: Rect,
        color: Color,
    },
    /// Approximated with flat bands; there is no alpha blending.
    Gradient {
        rect: Rect,
        from: Color,
        to: Color,
        axis: GradientAxis,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub scope: PageScope,
    pub paint: Paint,
}

impl Decoration {
    pub fn every_page(paint: Paint) -> Self {
        Self {
            scope: PageScope::All,
            paint,
        }
    }

    pub fn first_page(paint: Paint) -> Self {
        Self {
            scope: PageScope::First,
            paint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontVariant,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: FontVariant, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }

    pub fn regular(size: f32, color: Color) -> Self {
        Self::new(FontVariant::Regular, size, color)
    }

    pub fn bold(size: f32, color: Color) -> Self {
        Self::new(FontVariant::Bold, size, color)
    }

    pub fn italic(size: f32, color: Color) -> Self {
        Self::new(FontVariant::Italic, size, color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub align: TextAlign,
    /// Multiplier applied to the largest font size on each line.
    pub line_height: f32,
    pub space_after: f32,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            align: TextAlign::Left,
            line_height: 1.25,
            space_after: 0.0,
        }
    }

    pub fn single(text: impl Into<String>, style: TextStyle) -> Self {
        Self::new(vec![TextRun::new(text, style)])
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn space_after(mut self, space: f32) -> Self {
        self.space_after = space;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub thickness: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
    /// Fraction of the frame width, from the left edge.
    pub length: f32,
}

impl Rule {
    pub fn new(thickness: f32, color: Color) -> Self {
        Self {
            thickness,
            color,
            space_before: 0.0,
            space_after: 0.0,
            length: 1.0,
        }
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn length(mut self, fraction: f32) -> Self {
        self.length = fraction.clamp(0.0, 1.0);
        self
    }
}

/// A glyph in a left gutter, aligned with the first line of `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled {
    pub glyph: Glyph,
    pub color: Color,
    pub size: f32,
    pub gutter: f32,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellWidth {
    Fixed(f32),
    /// Share of the width left after fixed cells and gaps.
    Fill(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub width: CellWidth,
    pub blocks: Vec<Block>,
}

impl Cell {
    pub fn fixed(width: f32, blocks: Vec<Block>) -> Self {
        Self {
            width: CellWidth::Fixed(width),
            blocks,
        }
    }

    pub fn fill(blocks: Vec<Block>) -> Self {
        Self {
            width: CellWidth::Fill(1.0),
            blocks,
        }
    }
}

/// Side-by-side cells that never split across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub gap: f32,
    pub space_after: f32,
}

/// Side-by-side flows that continue independently onto following pages.
/// The flow resumes below the longest column.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    pub columns: Vec<Cell>,
    pub gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Header,
    Contact,
    Profile,
    Skills,
    Experience,
    Education,
    Certifications,
    Languages,
    Interests,
    Sender,
    Recipient,
    Dateline,
    Subject,
    Body,
    Closing,
}

/// Semantic grouping; has no effect on layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBlock {
    pub glyph: Glyph,
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
    pub space_after: f32,
}

/// A row of `total` dots of which the first `filled` are highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub filled: u8,
    pub total: u8,
    pub color: Color,
    pub empty_color: Color,
    pub diameter: f32,
    pub gap: f32,
}

/// A block group with a background, drawn once per page fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub background: Color,
    pub padding: Insets,
    pub space_after: f32,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Rule(Rule),
    Spacer(f32),
    Labeled(Labeled),
    Row(Row),
    Columns(Columns),
    Section(Section),
    Glyph(GlyphBlock),
    Rating(Rating),
    Panel(Panel),
}

impl Block {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Block {
        Block::Paragraph(Paragraph::single(text, style))
    }

    pub fn section(kind: SectionKind, blocks: Vec<Block>) -> Block {
        Block::Section(Section { kind, blocks })
    }

    fn children(&self) -> &[Block] {
        match self {
            Block::Labeled(l) => &l.body,
            Block::Section(s) => &s.blocks,
            Block::Panel(p) => &p.blocks,
            _ => &[],
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Rule> for Block {
    fn from(r: Rule) -> Self {
        Block::Rule(r)
    }
}

/// Depth-first, pre-order traversal.
pub fn walk_blocks<'a>(blocks: &'a [Block], f: &mut dyn FnMut(&'a Block)) {
    for block in blocks {
        f(block);
        let cells = match block {
            Block::Row(row) => row.cells.as_slice(),
            Block::Columns(cols) => cols.columns.as_slice(),
            other => {
                walk_blocks(other.children(), f);
                continue;
            }
        };
        for cell in cells {
            walk_blocks(&cell.blocks, f);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub page: PageSetup,
    pub decorations: Vec<Decoration>,
    pub blocks: Vec<Block>,
    pub info: DocumentInfo,
}

impl LayoutDocument {
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            decorations: Vec::new(),
            blocks: Vec::new(),
            info: DocumentInfo::default(),
        }
    }

    pub fn with_decorations(mut self, decorations: Vec<Decoration>) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_info(mut self, title: impl Into<String>, author: impl Into<String>) -> Self {
        self.info = DocumentInfo {
            title: title.into(),
            author: author.into(),
        };
        self
    }

    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Block)) {
        walk_blocks(&self.blocks, f);
    }

    /// Every text run, in tree order.
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |block| {
            if let Block::Paragraph(p) = block {
                out.extend(p.runs.iter().map(|r| r.text.as_str()));
            }
        });
        out
    }

    /// Section kinds present, in tree order.
    pub fn sections(&self) -> Vec<SectionKind> {
        let mut out = Vec::new();
        self.walk(&mut |block| {
            if let Block::Section(s) = block {
                out.push(s.kind);
            }
        });
        out
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        let mut found = None;
        self.walk(&mut |block| {
            if let Block::Section(s) = block
                && s.kind == kind
                && found.is_none()
            {
                found = Some(s);
            }
        });
        found
    }

    /// Glyphs from labels and glyph blocks, in tree order.
    pub fn glyphs(&self) -> Vec<Glyph> {
        let mut out = Vec::new();
        self.walk(&mut |block| match block {
            Block::Labeled(l) => out.push(l.glyph),
            Block::Glyph(g) => out.push(g.glyph),
            _ => {}
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Color;

    fn sample() -> LayoutDocument {
        let style = TextStyle::regular(10.0, Color::BLACK);
        LayoutDocument::new(PageSetup::a4(Insets::uniform(40.0))).with_blocks(vec![
            Block::section(SectionKind::Header, vec![Block::text("Ada", style)]),
            Block::Columns(Columns {
                gap: 10.0,
                columns: vec![
                    Cell::fixed(
                        120.0,
                        vec![Block::Labeled(Labeled {
                            glyph: Glyph::Pin,
                            color: Color::BLACK,
                            size: 8.0,
                            gutter: 12.0,
                            body: vec![Block::text("London", style)],
                        })],
                    ),
                    Cell::fill(vec![Block::section(
                        SectionKind::Profile,
                        vec![Block::Paragraph(Paragraph::new(vec![
                            TextRun::new("Analyst ", style),
                            TextRun::new("and writer", style),
                        ]))],
                    )]),
                ],
            }),
        ])
    }

    #[test]
    fn text_fragments_follow_tree_order() {
        assert_eq!(
            sample().text_fragments(),
            vec!["Ada", "London", "Analyst ", "and writer"]
        );
    }

    #[test]
    fn sections_and_glyphs_are_found_inside_columns() {
        let doc = sample();
        assert_eq!(doc.sections(), vec![SectionKind::Header, SectionKind::Profile]);
        assert_eq!(doc.glyphs(), vec![Glyph::Pin]);
        assert!(doc.section(SectionKind::Profile).is_some());
        assert!(doc.section(SectionKind::Languages).is_none());
    }

    #[test]
    fn content_box_subtracts_margins() {
        let page = PageSetup::a4(Insets::new(30.0, 20.0, 30.0, 40.0));
        let content = page.content_box();
        assert_eq!(content.x, 40.0);
        assert!((content.width - (A4_WIDTH - 60.0)).abs() < 1e-3);
        assert!((content.height - (A4_HEIGHT - 60.0)).abs() < 1e-3);
    }
}

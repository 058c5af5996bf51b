//! Flows a [`LayoutDocument`] block tree onto pages.
//!
//! Lines, rules, glyphs and ratings move to the next page when they do not
//! fit. Rows are atomic. Columns flow independently and the document resumes
//! below the longest one. Spacers are dropped at the top of a page.

use crate::algorithms::check_child_fit;
use crate::document::{
    Block, CellWidth, Columns, Decoration, GlyphBlock, Labeled, LayoutDocument, PageScope, Paint,
    Panel, Paragraph, Rating, Row, Rule,
};
use crate::glyph::Glyph;
use crate::output::{ElementKind, LaidOutDocument, LaidOutPage, PositionedElement};
use crate::text::break_lines;
use crate::LayoutError;
use folio_resource::FontTable;
use folio_style::{FontVariant, TextAlign};
use folio_types::{Color, Rect};
use std::sync::Arc;

const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    page: usize,
    y: f32,
}

impl Cursor {
    fn later_of(self, other: Cursor) -> Cursor {
        if (other.page, other.y) > (self.page, self.y) {
            other
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: f32,
    width: f32,
}

impl Frame {
    fn inset(self, left: f32, right: f32) -> Frame {
        Frame {
            x: self.x + left,
            width: (self.width - left - right).max(0.0),
        }
    }
}

struct PendingLabel {
    glyph: Glyph,
    color: Color,
    size: f32,
    x: f32,
}

/// Lays out documents against one font table.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    fonts: Arc<FontTable>,
}

impl LayoutEngine {
    pub fn new(fonts: Arc<FontTable>) -> Self {
        Self { fonts }
    }

    /// Uses the process-wide font table.
    pub fn from_global_fonts() -> Result<Self, LayoutError> {
        Ok(Self::new(folio_resource::fonts()?))
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    pub fn layout(&self, doc: &LayoutDocument) -> Result<LaidOutDocument, LayoutError> {
        let content = doc.page.content_box();
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(LayoutError::EmptyContentArea(content.width, content.height));
        }

        let mut flow = Flow {
            fonts: self.fonts.as_ref(),
            decorations: &doc.decorations,
            top: content.y,
            bottom: content.bottom(),
            pages: Vec::new(),
            unbreakable: 0,
            pending_label: None,
        };
        flow.ensure_page(0);
        let frame = Frame {
            x: content.x,
            width: content.width,
        };
        flow.blocks(
            &doc.blocks,
            frame,
            Cursor {
                page: 0,
                y: content.y,
            },
        );

        log::debug!("Laid out '{}' on {} page(s)", doc.info.title, flow.pages.len());
        Ok(LaidOutDocument {
            page_size: doc.page.size,
            pages: flow.pages,
            info: doc.info.clone(),
        })
    }

    /// Height `blocks` would take in a frame of `width`, without page breaks.
    pub fn measure(&self, blocks: &[Block], width: f32) -> f32 {
        Flow::scratch(&self.fonts).measure(blocks, width)
    }
}

struct Flow<'a> {
    fonts: &'a FontTable,
    decorations: &'a [Decoration],
    top: f32,
    bottom: f32,
    pages: Vec<LaidOutPage>,
    /// Depth of atomic containers; page breaks are suppressed while > 0.
    unbreakable: usize,
    pending_label: Option<PendingLabel>,
}

fn decoration_element(paint: &Paint) -> PositionedElement {
    let boxed = |rect: &Rect, kind: ElementKind| PositionedElement {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        kind,
    };
    match paint {
        Paint::Rect { rect, color } => boxed(rect, ElementKind::Fill(*color)),
        Paint::Gradient {
            rect,
            from,
            to,
            axis,
        } => boxed(
            rect,
            ElementKind::Gradient {
                from: *from,
                to: *to,
                axis: *axis,
            },
        ),
        Paint::StrokeRect { rect, color, width } => boxed(
            rect,
            ElementKind::Frame {
                color: *color,
                line_width: *width,
            },
        ),
        Paint::Circle { cx, cy, r, color } => PositionedElement {
            x: cx - r,
            y: cy - r,
            width: 2.0 * r,
            height: 2.0 * r,
            kind: ElementKind::Disc(*color),
        },
        Paint::Line {
            from,
            to,
            color,
            width,
        } => PositionedElement {
            x: from.0,
            y: from.1,
            width: to.0 - from.0,
            height: to.1 - from.1,
            kind: ElementKind::Line {
                color: *color,
                line_width: *width,
            },
        },
    }
}

fn applies_to(decoration: &Decoration, page: usize) -> bool {
    match decoration.scope {
        PageScope::All => true,
        PageScope::First => page == 0,
    }
}

fn cell_widths(cells: &[CellWidth], gap: f32, total: f32) -> Vec<f32> {
    let gaps = gap * cells.len().saturating_sub(1) as f32;
    let fixed: f32 = cells
        .iter()
        .map(|c| match c {
            CellWidth::Fixed(w) => *w,
            CellWidth::Fill(_) => 0.0,
        })
        .sum();
    let weights: f32 = cells
        .iter()
        .map(|c| match c {
            CellWidth::Fill(w) => w.max(0.0),
            CellWidth::Fixed(_) => 0.0,
        })
        .sum();
    let remaining = (total - fixed - gaps).max(0.0);
    cells
        .iter()
        .map(|c| match c {
            CellWidth::Fixed(w) => *w,
            CellWidth::Fill(w) if weights > 0.0 => remaining * w.max(0.0) / weights,
            CellWidth::Fill(_) => 0.0,
        })
        .collect()
}

impl<'a> Flow<'a> {
    fn scratch(fonts: &'a FontTable) -> Self {
        Flow {
            fonts,
            decorations: &[],
            top: 0.0,
            bottom: f32::INFINITY,
            pages: vec![LaidOutPage::default()],
            unbreakable: 1,
            pending_label: None,
        }
    }

    fn measure(&self, blocks: &[Block], width: f32) -> f32 {
        let mut scratch = Flow::scratch(self.fonts);
        scratch
            .blocks(blocks, Frame { x: 0.0, width }, Cursor { page: 0, y: 0.0 })
            .y
    }

    fn ensure_page(&mut self, index: usize) {
        while self.pages.len() <= index {
            let page_index = self.pages.len();
            let elements = self
                .decorations
                .iter()
                .filter(|d| applies_to(d, page_index))
                .map(|d| decoration_element(&d.paint))
                .collect();
            self.pages.push(LaidOutPage { elements });
        }
    }

    fn decoration_count(&self, page: usize) -> usize {
        self.decorations
            .iter()
            .filter(|d| applies_to(d, page))
            .count()
    }

    fn push(&mut self, page: usize, element: PositionedElement) {
        self.ensure_page(page);
        self.pages[page].elements.push(element);
    }

    fn at_top(&self, cursor: Cursor) -> bool {
        cursor.y <= self.top + EPSILON
    }

    /// Where a child of `height` goes: here, or at the top of the next page.
    fn place(&mut self, cursor: Cursor, height: f32) -> Cursor {
        if self.unbreakable > 0 {
            return cursor;
        }
        let analysis = check_child_fit(cursor.y - self.top, height, self.bottom - self.top);
        if analysis.should_break && !self.at_top(cursor) {
            log::debug!(
                "Page break before {:.2}pt item ({:.2}pt left on page {})",
                height,
                analysis.remaining_height,
                cursor.page + 1
            );
            let next = Cursor {
                page: cursor.page + 1,
                y: self.top,
            };
            self.ensure_page(next.page);
            next
        } else {
            cursor
        }
    }

    fn emit_label(&mut self, at: Cursor, line_height: f32) {
        if let Some(label) = self.pending_label.take() {
            let y = at.y + (line_height - label.size).max(0.0) / 2.0;
            self.push(
                at.page,
                PositionedElement {
                    x: label.x,
                    y,
                    width: label.size,
                    height: label.size,
                    kind: ElementKind::Glyph {
                        glyph: label.glyph,
                        color: label.color,
                    },
                },
            );
        }
    }

    fn blocks(&mut self, blocks: &[Block], frame: Frame, mut cursor: Cursor) -> Cursor {
        for block in blocks {
            cursor = self.block(block, frame, cursor);
        }
        cursor
    }

    fn block(&mut self, block: &Block, frame: Frame, cursor: Cursor) -> Cursor {
        match block {
            Block::Paragraph(p) => self.paragraph(p, frame, cursor),
            Block::Rule(r) => self.rule(r, frame, cursor),
            Block::Spacer(h) => {
                if self.unbreakable == 0 && self.at_top(cursor) {
                    cursor
                } else {
                    Cursor {
                        page: cursor.page,
                        y: cursor.y + h.max(0.0),
                    }
                }
            }
            Block::Labeled(l) => self.labeled(l, frame, cursor),
            Block::Row(r) => self.row(r, frame, cursor),
            Block::Columns(c) => self.columns(c, frame, cursor),
            Block::Section(s) => self.blocks(&s.blocks, frame, cursor),
            Block::Glyph(g) => self.glyph(g, frame, cursor),
            Block::Rating(r) => self.rating(r, frame, cursor),
            Block::Panel(p) => self.panel(p, frame, cursor),
        }
    }

    fn paragraph(&mut self, p: &Paragraph, frame: Frame, mut cursor: Cursor) -> Cursor {
        let lines = break_lines(&p.runs, frame.width, self.fonts);
        if lines.is_empty() {
            return cursor;
        }
        for line in &lines {
            let height = line.max_size * p.line_height;
            let at = self.place(cursor, height);
            self.emit_label(at, height);

            let ascent = self.fonts.ascent(FontVariant::Regular, line.max_size);
            let descent = self.fonts.descent(FontVariant::Regular, line.max_size);
            let baseline = at.y + (height - ascent - descent) / 2.0 + ascent;
            let offset = match p.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => ((frame.width - line.width) / 2.0).max(0.0),
                TextAlign::Right => (frame.width - line.width).max(0.0),
            };
            for fragment in &line.fragments {
                let run = &p.runs[fragment.run_index];
                self.push(
                    at.page,
                    PositionedElement {
                        x: frame.x + offset + fragment.x,
                        y: at.y,
                        width: fragment.width,
                        height,
                        kind: ElementKind::Text {
                            text: fragment.text.clone(),
                            style: run.style,
                            baseline,
                        },
                    },
                );
            }
            cursor = Cursor {
                page: at.page,
                y: at.y + height,
            };
        }
        cursor.y += p.space_after;
        cursor
    }

    fn rule(&mut self, r: &Rule, frame: Frame, cursor: Cursor) -> Cursor {
        let height = r.space_before + r.thickness + r.space_after;
        let at = self.place(cursor, height);
        self.push(
            at.page,
            PositionedElement {
                x: frame.x,
                y: at.y + r.space_before,
                width: frame.width * r.length,
                height: r.thickness,
                kind: ElementKind::Fill(r.color),
            },
        );
        Cursor {
            page: at.page,
            y: at.y + height,
        }
    }

    fn labeled(&mut self, l: &Labeled, frame: Frame, cursor: Cursor) -> Cursor {
        self.pending_label = Some(PendingLabel {
            glyph: l.glyph,
            color: l.color,
            size: l.size,
            x: frame.x,
        });
        let end = self.blocks(&l.body, frame.inset(l.gutter, 0.0), cursor);
        self.pending_label = None;
        end
    }

    fn row(&mut self, row: &Row, frame: Frame, cursor: Cursor) -> Cursor {
        let specs: Vec<CellWidth> = row.cells.iter().map(|c| c.width).collect();
        let widths = cell_widths(&specs, row.gap, frame.width);
        let height = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| self.measure(&cell.blocks, *w))
            .fold(0.0f32, f32::max);

        if height > self.bottom - self.top {
            log::warn!(
                "Row of {:.2}pt is taller than the page content area and will overflow",
                height
            );
        }
        let at = self.place(cursor, height);

        self.unbreakable += 1;
        let mut x = frame.x;
        for (cell, width) in row.cells.iter().zip(&widths) {
            self.blocks(&cell.blocks, Frame { x, width: *width }, at);
            x += width + row.gap;
        }
        self.unbreakable -= 1;

        Cursor {
            page: at.page,
            y: at.y + height + row.space_after,
        }
    }

    fn columns(&mut self, cols: &Columns, frame: Frame, cursor: Cursor) -> Cursor {
        let specs: Vec<CellWidth> = cols.columns.iter().map(|c| c.width).collect();
        let widths = cell_widths(&specs, cols.gap, frame.width);
        let mut end = cursor;
        let mut x = frame.x;
        for (column, width) in cols.columns.iter().zip(&widths) {
            let column_end = self.blocks(&column.blocks, Frame { x, width: *width }, cursor);
            end = end.later_of(column_end);
            x += width + cols.gap;
        }
        end
    }

    fn glyph(&mut self, g: &GlyphBlock, frame: Frame, cursor: Cursor) -> Cursor {
        let at = self.place(cursor, g.size);
        self.emit_label(at, g.size);
        let x = match g.align {
            TextAlign::Left => frame.x,
            TextAlign::Center => frame.x + (frame.width - g.size).max(0.0) / 2.0,
            TextAlign::Right => frame.x + (frame.width - g.size).max(0.0),
        };
        self.push(
            at.page,
            PositionedElement {
                x,
                y: at.y,
                width: g.size,
                height: g.size,
                kind: ElementKind::Glyph {
                    glyph: g.glyph,
                    color: g.color,
                },
            },
        );
        Cursor {
            page: at.page,
            y: at.y + g.size + g.space_after,
        }
    }

    fn rating(&mut self, r: &Rating, frame: Frame, cursor: Cursor) -> Cursor {
        let at = self.place(cursor, r.diameter);
        self.emit_label(at, r.diameter);
        for i in 0..r.total {
            let color = if i < r.filled { r.color } else { r.empty_color };
            self.push(
                at.page,
                PositionedElement {
                    x: frame.x + i as f32 * (r.diameter + r.gap),
                    y: at.y,
                    width: r.diameter,
                    height: r.diameter,
                    kind: ElementKind::Disc(color),
                },
            );
        }
        Cursor {
            page: at.page,
            y: at.y + r.diameter,
        }
    }

    fn panel(&mut self, p: &Panel, frame: Frame, cursor: Cursor) -> Cursor {
        let inner = frame.inset(p.padding.left, p.padding.right);
        // the first fragment must hold at least the first child
        let lead = p.padding.top
            + p.blocks
                .first()
                .map(|b| self.measure(std::slice::from_ref(b), inner.width))
                .unwrap_or(0.0);
        let start = self.place(cursor, lead.min(self.bottom - self.top));

        let marks: Vec<usize> = self
            .pages
            .iter()
            .skip(start.page)
            .map(|page| page.elements.len())
            .collect();

        let body_end = self.blocks(
            &p.blocks,
            inner,
            Cursor {
                page: start.page,
                y: start.y + p.padding.top,
            },
        );
        let end_y = body_end.y + p.padding.bottom;

        for page in start.page..=body_end.page {
            let y0 = if page == start.page { start.y } else { self.top };
            let y1 = if page == body_end.page {
                end_y
            } else {
                self.bottom
            };
            let index = marks
                .get(page - start.page)
                .copied()
                .unwrap_or_else(|| self.decoration_count(page));
            self.ensure_page(page);
            let elements = &mut self.pages[page].elements;
            let index = index.min(elements.len());
            elements.insert(
                index,
                PositionedElement {
                    x: frame.x,
                    y: y0,
                    width: frame.width,
                    height: (y1 - y0).max(0.0),
                    kind: ElementKind::Fill(p.background),
                },
            );
        }

        Cursor {
            page: body_end.page,
            y: end_y + p.space_after,
        }
    }
}

//! Block builders shared by the CV templates.
//!
//! Every model string is emitted as its own text run, unchanged; templates
//! only choose styling, ordering and ornaments around them.

use crate::labels::Labels;
use folio_layout::{
    Block, Cell, CellWidth, FlagKind, Glyph, GlyphBlock, Labeled, Paragraph, Rating, Row, Rule,
    SectionKind, TextRun, TextStyle,
};
use folio_model::{CvDocModel, ExperienceEntry, MAX_LEVEL};
use folio_style::{FontVariant, PdfColors, TextAlign};
use folio_types::Color;

/// Unscaled type sizes of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Typo {
    pub body: f32,
    pub small: f32,
    pub heading: f32,
    pub title: f32,
    /// Multiple of the font size.
    pub line_height: f32,
}

impl Typo {
    pub(crate) fn new(body: f32, heading: f32, title: f32, line_height: f32) -> Self {
        Self {
            body,
            small: body * 0.88,
            heading,
            title,
            line_height,
        }
    }

    fn scaled(self, scale: f32) -> Self {
        Self {
            body: self.body * scale,
            small: self.small * scale,
            heading: self.heading * scale,
            title: self.title * scale,
            line_height: self.line_height,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum HeadingStyle {
    /// Uppercase text over a full-width rule.
    Ruled { text: Color, rule: Color },
    /// Small uppercase text, no ornament.
    Quiet { text: Color },
    /// Text after a glyph.
    Glyph { glyph: Glyph, tint: Color, text: Color },
    /// Centered uppercase text under a centered ornament.
    Centered { glyph: Glyph, tint: Color, text: Color },
    /// Bold text with an optional short underline.
    Plain { text: Color, underline: Option<Color> },
}

/// Where experience dates go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DatesAt {
    /// Right-aligned next to the role.
    Right,
    /// On the line under the company.
    Below,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct XpStyle {
    pub bullet: Glyph,
    pub bullet_color: Color,
    pub role: Color,
    pub company: Color,
    pub meta: Color,
    pub dates: DatesAt,
    /// Calendar and pin icons on the meta lines.
    pub icons: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LangStyle {
    pub name: Color,
    pub level: Color,
    pub dot_on: Color,
    pub dot_off: Color,
}

#[derive(Debug, Clone)]
pub(crate) struct Kit<'a> {
    pub model: &'a CvDocModel,
    pub labels: &'static Labels,
    pub colors: PdfColors,
    pub scale: f32,
    /// Already multiplied by `scale`.
    pub typo: Typo,
}

fn contact_glyph(item: &str) -> Glyph {
    let lowered = item.to_lowercase();
    let digits = item.chars().filter(char::is_ascii_digit).count();
    if item.contains('@') {
        Glyph::Mail
    } else if ["http", "www", "linkedin", "github", ".com/"]
        .iter()
        .any(|hint| lowered.contains(hint))
    {
        Glyph::Globe
    } else if digits >= 6 {
        Glyph::Phone
    } else {
        Glyph::Pin
    }
}

impl<'a> Kit<'a> {
    pub(crate) fn new(
        model: &'a CvDocModel,
        labels: &'static Labels,
        colors: PdfColors,
        scale: f32,
        typo: Typo,
    ) -> Self {
        Self {
            model,
            labels,
            colors,
            scale,
            typo: typo.scaled(scale),
        }
    }

    pub(crate) fn s(&self, value: f32) -> f32 {
        value * self.scale
    }

    pub(crate) fn body(&self, color: Color) -> TextStyle {
        TextStyle::regular(self.typo.body, color)
    }

    pub(crate) fn small(&self, color: Color) -> TextStyle {
        TextStyle::regular(self.typo.small, color)
    }

    pub(crate) fn para(&self, runs: Vec<TextRun>) -> Paragraph {
        Paragraph::new(runs).line_height(self.typo.line_height)
    }

    pub(crate) fn line(&self, text: impl Into<String>, style: TextStyle) -> Block {
        Block::Paragraph(self.para(vec![TextRun::new(text, style)]))
    }

    pub(crate) fn gap(&self) -> f32 {
        self.typo.body * 0.6
    }

    /// Items as separate runs joined by `sep`.
    pub(crate) fn joined<S: AsRef<str>>(
        &self,
        items: &[S],
        style: TextStyle,
        sep: &str,
        sep_style: TextStyle,
    ) -> Vec<TextRun> {
        let mut runs = Vec::with_capacity(items.len() * 2);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                runs.push(TextRun::new(sep, sep_style));
            }
            runs.push(TextRun::new(item.as_ref(), style));
        }
        runs
    }

    pub(crate) fn labeled(&self, glyph: Glyph, color: Color, size: f32, body: Vec<Block>) -> Block {
        Block::Labeled(Labeled {
            glyph,
            color,
            size,
            gutter: size + self.s(5.0),
            body,
        })
    }

    pub(crate) fn heading(&self, label: &str, style: HeadingStyle) -> Vec<Block> {
        let size = self.typo.heading;
        match style {
            HeadingStyle::Ruled { text, rule } => vec![
                self.line(label.to_uppercase(), TextStyle::bold(size, text)),
                Block::Rule(Rule::new(self.s(0.7), rule).spacing(self.s(1.5), self.s(4.0))),
            ],
            HeadingStyle::Quiet { text } => vec![
                Block::Paragraph(
                    self.para(vec![TextRun::new(label.to_uppercase(), TextStyle::bold(size * 0.82, text))])
                        .space_after(self.s(5.0)),
                ),
            ],
            HeadingStyle::Glyph { glyph, tint, text } => vec![
                self.labeled(
                    glyph,
                    tint,
                    size * 0.8,
                    vec![Block::Paragraph(
                        self.para(vec![TextRun::new(label, TextStyle::bold(size, text))])
                            .space_after(self.s(4.0)),
                    )],
                ),
            ],
            HeadingStyle::Centered { glyph, tint, text } => vec![
                Block::Glyph(GlyphBlock {
                    glyph,
                    color: tint,
                    size: size * 0.6,
                    align: TextAlign::Center,
                    space_after: self.s(2.0),
                }),
                Block::Paragraph(
                    self.para(vec![TextRun::new(label.to_uppercase(), TextStyle::bold(size, text))])
                        .align(TextAlign::Center)
                        .space_after(self.s(5.0)),
                ),
            ],
            HeadingStyle::Plain { text, underline } => {
                let mut blocks = vec![self.line(label, TextStyle::bold(size, text))];
                match underline {
                    Some(color) => blocks.push(Block::Rule(
                        Rule::new(self.s(1.5), color)
                            .spacing(self.s(1.0), self.s(5.0))
                            .length(0.18),
                    )),
                    None => blocks.push(Block::Spacer(self.s(3.0))),
                }
                blocks
            }
        }
    }

    /// A titled section; `None` when the body is empty.
    ///
    /// The heading is kept on the same page as the first body block.
    pub(crate) fn section(
        &self,
        kind: SectionKind,
        label: &str,
        heading: HeadingStyle,
        body: Vec<Block>,
    ) -> Option<Block> {
        let mut body = body.into_iter();
        let first = body.next()?;
        let mut lead = self.heading(label, heading);
        lead.push(first);
        let mut blocks = vec![Block::Row(Row {
            cells: vec![Cell::fill(lead)],
            gap: 0.0,
            space_after: 0.0,
        })];
        blocks.extend(body);
        blocks.push(Block::Spacer(self.gap() * 1.4));
        Some(Block::section(kind, blocks))
    }

    pub(crate) fn profile(&self, color: Color) -> Vec<Block> {
        if self.model.profile.is_empty() {
            return Vec::new();
        }
        vec![self.line(self.model.profile.as_str(), self.body(color))]
    }

    /// One line per category: `Category: a · b · c`.
    pub(crate) fn skills_inline(&self, label: Color, text: Color) -> Vec<Block> {
        self.model
            .skills
            .non_empty()
            .map(|(category, items)| {
                let mut runs = vec![TextRun::new(
                    format!("{}{}", self.labels.category(category), self.labels.label_sep),
                    TextStyle::bold(self.typo.body, label),
                )];
                runs.extend(self.joined(items, self.body(text), " · ", self.body(label)));
                Block::Paragraph(self.para(runs).space_after(self.s(2.5)))
            })
            .collect()
    }

    /// Category title on its own line, items below.
    pub(crate) fn skills_grouped(&self, label: Color, text: Color, sep: Color) -> Vec<Block> {
        self.model
            .skills
            .non_empty()
            .flat_map(|(category, items)| {
                [
                    self.line(
                        self.labels.category(category).to_uppercase(),
                        TextStyle::bold(self.typo.small * 0.92, label),
                    ),
                    Block::Paragraph(
                        self.para(self.joined(items, self.small(text), " · ", self.small(sep)))
                            .space_after(self.s(5.0)),
                    ),
                ]
            })
            .collect()
    }

    fn xp_header(&self, entry: &ExperienceEntry, style: &XpStyle) -> Vec<Block> {
        let mut head = Vec::new();
        if !entry.role.is_empty() {
            head.push(self.line(
                entry.role.as_str(),
                TextStyle::bold(self.typo.body * 1.05, style.role),
            ));
        }

        let mut place = Vec::new();
        if !entry.company.is_empty() {
            place.push(TextRun::new(entry.company.as_str(), TextStyle::bold(self.typo.small, style.company)));
        }
        if let Some(city) = entry.city.as_deref().filter(|c| !c.is_empty()) {
            if !place.is_empty() {
                place.push(TextRun::new(" · ", self.small(style.meta)));
            }
            place.push(TextRun::new(city, self.small(style.meta)));
        }
        if !place.is_empty() {
            let line = Block::Paragraph(self.para(place));
            head.push(if style.icons {
                self.labeled(Glyph::Pin, style.company, self.typo.small * 0.85, vec![line])
            } else {
                line
            });
        }

        if style.dates == DatesAt::Below && !entry.dates.is_empty() {
            let line = self.line(
                entry.dates.as_str(),
                TextStyle::italic(self.typo.small, style.meta),
            );
            head.push(if style.icons {
                self.labeled(Glyph::Calendar, style.company, self.typo.small * 0.85, vec![line])
            } else {
                line
            });
        }
        head
    }

    pub(crate) fn experience(&self, style: XpStyle) -> Vec<Block> {
        let mut blocks = Vec::new();
        for (i, entry) in self.model.xp.iter().enumerate() {
            if i > 0 {
                blocks.push(Block::Spacer(self.gap()));
            }
            let head = self.xp_header(entry, &style);
            let mut cells = vec![Cell::fill(head)];
            if style.dates == DatesAt::Right && !entry.dates.is_empty() {
                cells.push(Cell {
                    width: CellWidth::Fixed(self.s(96.0)),
                    blocks: vec![Block::Paragraph(
                        self.para(vec![TextRun::new(
                            entry.dates.as_str(),
                            TextStyle::italic(self.typo.small, style.meta),
                        )])
                        .align(TextAlign::Right),
                    )],
                });
            }
            blocks.push(Block::Row(Row {
                cells,
                gap: self.s(8.0),
                space_after: self.s(2.0),
            }));

            let size = self.typo.body * 0.5;
            for bullet in &entry.bullets {
                blocks.push(self.labeled(
                    style.bullet,
                    style.bullet_color,
                    size,
                    vec![Block::Paragraph(
                        self.para(vec![TextRun::new(bullet.as_str(), self.body(self.colors.ink()))])
                            .space_after(self.s(1.5)),
                    )],
                ));
            }
        }
        blocks
    }

    /// One line per entry, optionally behind a glyph.
    pub(crate) fn lines<S: AsRef<str>>(
        &self,
        items: &[S],
        glyph: Option<(Glyph, Color)>,
        text: Color,
    ) -> Vec<Block> {
        items
            .iter()
            .map(|item| {
                let line = Block::Paragraph(
                    self.para(vec![TextRun::new(item.as_ref(), self.body(text))])
                        .space_after(self.s(2.0)),
                );
                match glyph {
                    Some((glyph, color)) => self.labeled(glyph, color, self.typo.body * 0.8, vec![line]),
                    None => line,
                }
            })
            .collect()
    }

    pub(crate) fn education(&self, glyph: Option<(Glyph, Color)>, text: Color) -> Vec<Block> {
        self.lines(&self.model.education, glyph, text)
    }

    pub(crate) fn certifications(&self, glyph: Option<(Glyph, Color)>, text: Color) -> Vec<Block> {
        self.lines(&self.model.cert_lines(), glyph, text)
    }

    /// Flag, name (and level label), five-dot rating.
    pub(crate) fn languages(&self, style: LangStyle) -> Vec<Block> {
        let flag = self.typo.body * 1.3;
        let dot = self.s(5.0);
        let dot_gap = self.s(2.5);
        let total = MAX_LEVEL;
        let rating_width = dot * total as f32 + dot_gap * (total - 1) as f32;

        self.model
            .languages()
            .into_iter()
            .map(|lang| {
                let mut runs = vec![TextRun::new(lang.name.clone(), TextStyle::bold(self.typo.small, style.name))];
                if let Some(label) = lang.level_label.as_deref() {
                    runs.push(TextRun::new(" · ", self.small(style.level)));
                    runs.push(TextRun::new(label, self.small(style.level)));
                }
                Block::Row(Row {
                    cells: vec![
                        Cell::fixed(
                            flag,
                            vec![Block::Glyph(GlyphBlock {
                                glyph: Glyph::Flag(FlagKind::for_language(&lang.name)),
                                color: style.name,
                                size: flag,
                                align: TextAlign::Left,
                                space_after: 0.0,
                            })],
                        ),
                        Cell::fill(vec![Block::Paragraph(self.para(runs))]),
                        Cell::fixed(
                            rating_width,
                            vec![
                                Block::Spacer((flag - dot) / 2.0),
                                Block::Rating(Rating {
                                    filled: lang.level.min(total),
                                    total,
                                    color: style.dot_on,
                                    empty_color: style.dot_off,
                                    diameter: dot,
                                    gap: dot_gap,
                                }),
                            ],
                        ),
                    ],
                    gap: self.s(6.0),
                    space_after: self.s(3.0),
                })
            })
            .collect()
    }

    /// Hobbies on one line, or one per line behind a dot.
    pub(crate) fn interests(&self, inline: bool, text: Color, accent: Color) -> Vec<Block> {
        let hobbies = &self.model.hobbies;
        if hobbies.is_empty() {
            return Vec::new();
        }
        if inline {
            vec![Block::Paragraph(self.para(self.joined(hobbies, self.body(text), " · ", self.body(accent))))]
        } else {
            self.lines(hobbies, Some((Glyph::Dot, accent)), text)
        }
    }

    /// Contact items on one line separated by `|`.
    pub(crate) fn contact_inline(&self, text: Color, sep: Color, align: TextAlign) -> Vec<Block> {
        let items = self.model.contact_items();
        if items.is_empty() {
            return Vec::new();
        }
        vec![Block::Paragraph(
            self.para(self.joined(&items, self.small(text), "  |  ", self.small(sep)))
                .align(align),
        )]
    }

    /// One contact item per line with a matching icon.
    pub(crate) fn contact_icons(&self, text: Color, icon: Color) -> Vec<Block> {
        self.model
            .contact_items()
            .into_iter()
            .map(|item| {
                self.labeled(
                    contact_glyph(item),
                    icon,
                    self.typo.small,
                    vec![Block::Paragraph(
                        self.para(vec![TextRun::new(item, self.small(text))])
                            .space_after(self.s(2.5)),
                    )],
                )
            })
            .collect()
    }

    /// Height of [`Kit::name_block`] when neither line wraps.
    pub(crate) fn name_block_height(&self) -> f32 {
        let mut height = 0.0;
        if !self.model.name.is_empty() {
            height += self.typo.title * 1.15 + self.s(2.0);
        }
        if !self.model.title.is_empty() {
            height += self.typo.heading * self.typo.line_height + self.s(4.0);
        }
        height
    }

    /// Spacer that moves the flow from `top` to just below a band ending at `band`.
    pub(crate) fn clear_band(&self, top: f32, band: f32) -> Block {
        Block::Spacer((band - top - self.name_block_height()).max(0.0) + self.s(16.0))
    }

    /// Name in the title size, then the job title.
    pub(crate) fn name_block(&self, name: Color, title: Color, align: TextAlign) -> Vec<Block> {
        let mut blocks = Vec::new();
        if !self.model.name.is_empty() {
            blocks.push(Block::Paragraph(
                Paragraph::new(vec![TextRun::new(
                    self.model.name.as_str(),
                    TextStyle::bold(self.typo.title, name),
                )])
                .line_height(1.15)
                .align(align)
                .space_after(self.s(2.0)),
            ));
        }
        if !self.model.title.is_empty() {
            blocks.push(Block::Paragraph(
                self.para(vec![TextRun::new(
                    self.model.title.as_str(),
                    TextStyle::new(FontVariant::Regular, self.typo.heading, title),
                )])
                .align(align)
                .space_after(self.s(4.0)),
            ));
        }
        blocks
    }
}

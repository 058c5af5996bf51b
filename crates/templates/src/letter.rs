//! The cover letter: sender, recipient, dateline, subject, body, closing.

use crate::hint::LayoutHint;
use crate::labels::Labels;
use folio_layout::{
    Block, Decoration, Insets, LayoutDocument, PageSetup, Paint, Paragraph, Rect, SectionKind,
    TextRun, TextStyle,
};
use folio_model::{Lang, LmModel};
use folio_style::{PdfColors, TextAlign};
use folio_types::A4_WIDTH;

const BODY_SIZE: f32 = 10.5;
const LINE_HEIGHT: f32 = 1.4;

struct LetterStyle {
    scale: f32,
    colors: PdfColors,
}

impl LetterStyle {
    fn s(&self, value: f32) -> f32 {
        value * self.scale
    }

    fn regular(&self) -> TextStyle {
        TextStyle::regular(self.s(BODY_SIZE), self.colors.ink())
    }

    fn bold(&self) -> TextStyle {
        TextStyle::bold(self.s(BODY_SIZE), self.colors.ink())
    }

    fn muted(&self) -> TextStyle {
        TextStyle::regular(self.s(BODY_SIZE * 0.92), self.colors.muted())
    }

    fn para(&self, runs: Vec<TextRun>, space_after: f32) -> Block {
        Block::Paragraph(
            Paragraph::new(runs)
                .line_height(LINE_HEIGHT)
                .space_after(self.s(space_after)),
        )
    }

    fn right(&self, runs: Vec<TextRun>, space_after: f32) -> Block {
        Block::Paragraph(
            Paragraph::new(runs)
                .line_height(LINE_HEIGHT)
                .align(TextAlign::Right)
                .space_after(self.s(space_after)),
        )
    }
}

fn section(kind: SectionKind, blocks: Vec<Block>, after: f32) -> Option<Block> {
    if blocks.is_empty() {
        return None;
    }
    let mut blocks = blocks;
    blocks.push(Block::Spacer(after));
    Some(Block::section(kind, blocks))
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}

/// Lays out a cover letter at `scale` (before the hint is applied).
pub fn build_letter_document(
    model: &LmModel,
    colors: &PdfColors,
    hint: LayoutHint,
    scale: f64,
) -> LayoutDocument {
    let st = LetterStyle {
        scale: hint.apply(scale),
        colors: *colors,
    };
    let labels = Labels::for_lang(model.lang);

    let mut sender = Vec::new();
    if let Some(name) = non_empty(&model.name) {
        sender.push(st.para(
            vec![TextRun::new(name, TextStyle::bold(st.s(BODY_SIZE * 1.25), colors.brand_dark()))],
            2.0,
        ));
    }
    for line in &model.contact_lines {
        sender.push(st.para(vec![TextRun::new(line.as_str(), st.muted())], 0.0));
    }

    let mut recipient = Vec::new();
    if let Some(service) = non_empty(&model.service) {
        recipient.push(st.right(vec![TextRun::new(service, st.regular())], 0.0));
    }
    if let Some(company) = non_empty(&model.company_name) {
        recipient.push(st.right(vec![TextRun::new(company, st.bold())], 0.0));
    }
    for line in model.company_addr_lines() {
        recipient.push(st.right(vec![TextRun::new(line, st.regular())], 0.0));
    }

    let mut dateline = Vec::new();
    match (non_empty(&model.city), non_empty(&model.date_str)) {
        (Some(city), Some(date)) => {
            let joint = match model.lang {
                Lang::Fr => ", le ",
                Lang::En => ", ",
            };
            dateline.push(st.right(
                vec![
                    TextRun::new(city, st.regular()),
                    TextRun::new(joint, st.regular()),
                    TextRun::new(date, st.regular()),
                ],
                0.0,
            ));
        }
        (Some(only), None) | (None, Some(only)) => {
            dateline.push(st.right(vec![TextRun::new(only, st.regular())], 0.0));
        }
        (None, None) => {}
    }

    let mut subject = Vec::new();
    if let Some(text) = non_empty(&model.subject) {
        subject.push(st.para(
            vec![
                TextRun::new(format!("{} ", labels.subject), st.bold()),
                TextRun::new(text, st.bold()),
            ],
            0.0,
        ));
    }

    let mut body = Vec::new();
    if let Some(salutation) = non_empty(&model.salutation) {
        body.push(st.para(vec![TextRun::new(salutation, st.regular())], 10.0));
    }
    for paragraph in model.paragraphs() {
        body.push(Block::Paragraph(
            Paragraph::new(vec![TextRun::new(paragraph, st.regular())])
                .line_height(LINE_HEIGHT)
                .space_after(st.s(9.0)),
        ));
    }

    let mut closing = Vec::new();
    if let Some(text) = non_empty(&model.closing) {
        closing.push(st.para(vec![TextRun::new(text, st.regular())], 18.0));
    }
    if let Some(signature) = non_empty(&model.signature) {
        closing.push(st.para(vec![TextRun::new(signature, st.bold())], 0.0));
    }

    let blocks: Vec<Block> = [
        section(SectionKind::Sender, sender, st.s(18.0)),
        section(SectionKind::Recipient, recipient, st.s(18.0)),
        section(SectionKind::Dateline, dateline, st.s(22.0)),
        section(SectionKind::Subject, subject, st.s(16.0)),
        section(SectionKind::Body, body, st.s(8.0)),
        section(SectionKind::Closing, closing, 0.0),
    ]
    .into_iter()
    .flatten()
    .collect();

    let margins = Insets::new(st.s(58.0), st.s(60.0), st.s(54.0), st.s(60.0));
    let title = match non_empty(&model.subject) {
        Some(subject) => subject.to_string(),
        None => "Cover letter".to_string(),
    };
    LayoutDocument::new(PageSetup::a4(margins))
        .with_decorations(vec![Decoration::first_page(Paint::Rect {
            rect: Rect::new(0.0, 0.0, A4_WIDTH, st.s(6.0)),
            color: colors.brand(),
        })])
        .with_blocks(blocks)
        .with_info(title, model.name.as_str())
}

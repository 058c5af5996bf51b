//! One renderer per [`TemplateId`](crate::TemplateId).

mod ats;
mod classic;
mod creative;
mod elegant;
mod minimalist;
mod modern;
mod pro_max;
mod tech;

use crate::id::TemplateId;
use crate::kit::{Kit, Typo};
use crate::labels::Labels;
use folio_layout::{Block, Decoration, Insets, LayoutDocument, PageSetup, SectionKind};
use folio_model::CvDocModel;
use folio_style::PdfColors;

/// Inputs shared by every renderer.
#[derive(Debug, Clone)]
pub(crate) struct Context<'a> {
    pub model: &'a CvDocModel,
    pub labels: &'static Labels,
    pub colors: PdfColors,
    /// Effective scale, hint already applied.
    pub scale: f32,
    pub volume: usize,
}

impl<'a> Context<'a> {
    pub(crate) fn kit(&self, typo: Typo) -> Kit<'a> {
        Kit::new(self.model, self.labels, self.colors, self.scale, typo)
    }
}

pub(crate) fn render(id: TemplateId, ctx: &Context<'_>) -> LayoutDocument {
    match id {
        TemplateId::Ats => ats::render(ctx),
        TemplateId::Classic => classic::render(ctx),
        TemplateId::Modern => modern::render(ctx),
        TemplateId::Minimalist => minimalist::render(ctx),
        TemplateId::Creative => creative::render(ctx),
        TemplateId::Elegant => elegant::render(ctx),
        TemplateId::Tech => tech::render(ctx),
        TemplateId::ProMax => pro_max::render(ctx),
    }
}

/// Wraps laid-out blocks into an A4 document titled after the candidate.
fn document(
    model: &CvDocModel,
    margins: Insets,
    decorations: Vec<Decoration>,
    blocks: Vec<Block>,
) -> LayoutDocument {
    let title = if model.name.is_empty() {
        "Curriculum vitae".to_string()
    } else {
        model.name.clone()
    };
    LayoutDocument::new(PageSetup::a4(margins))
        .with_decorations(decorations)
        .with_blocks(blocks)
        .with_info(title, model.name.as_str())
}

/// A section with no heading; `None` when empty.
fn bare_section(kind: SectionKind, blocks: Vec<Block>) -> Option<Block> {
    if blocks.is_empty() {
        None
    } else {
        Some(Block::section(kind, blocks))
    }
}

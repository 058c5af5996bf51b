//! Dark header band, chevron headings, skills and languages in panels.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{Block, Decoration, Glyph, Insets, LayoutDocument, Paint, Panel, Rect, SectionKind};
use folio_style::TextAlign;
use folio_types::{Color, A4_WIDTH};

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.5, 11.5, 24.0, 1.3));
    let c = kit.colors;
    let labels = kit.labels;
    let margin = kit.s(36.0);
    let band = kit.s(112.0);
    let heading = HeadingStyle::Glyph {
        glyph: Glyph::Chevron,
        tint: c.brand(),
        text: c.ink(),
    };

    let panel = |blocks: Vec<Block>| -> Vec<Block> {
        if blocks.is_empty() {
            return blocks;
        }
        vec![Block::Panel(Panel {
            background: c.bg_soft(),
            padding: Insets::symmetric(kit.s(6.0), kit.s(8.0)),
            space_after: 0.0,
            blocks,
        })]
    };

    let mut header: Vec<Block> = kit.name_block(Color::WHITE, c.brand_tint(0.6), TextAlign::Left);
    header.extend(bare_section(
        SectionKind::Contact,
        kit.contact_inline(c.brand_tint(0.8), c.brand(), TextAlign::Left),
    ));
    let mut blocks: Vec<Block> = bare_section(SectionKind::Header, header).into_iter().collect();
    // the contact line sits inside the band too
    let contact_height = if kit.model.contact_items().is_empty() {
        0.0
    } else {
        kit.typo.small * kit.typo.line_height
    };
    blocks.push(kit.clear_band(margin + contact_height, band));

    let xp = XpStyle {
        bullet: Glyph::Chevron,
        bullet_color: c.brand(),
        role: c.ink(),
        company: c.brand(),
        meta: c.muted(),
        dates: DatesAt::Right,
        icons: false,
    };
    let langs = LangStyle {
        name: c.ink(),
        level: c.muted(),
        dot_on: c.brand(),
        dot_off: c.border(),
    };

    blocks.extend(
        [
            kit.section(SectionKind::Profile, labels.profile, heading, kit.profile(c.ink())),
            kit.section(
                SectionKind::Skills,
                labels.skills,
                heading,
                panel(kit.skills_grouped(c.brand_dark(), c.ink(), c.muted())),
            ),
            kit.section(SectionKind::Experience, labels.experience, heading, kit.experience(xp)),
            kit.section(
                SectionKind::Education,
                labels.education,
                heading,
                kit.education(Some((Glyph::Chevron, c.brand())), c.ink()),
            ),
            kit.section(
                SectionKind::Certifications,
                labels.certifications,
                heading,
                kit.certifications(Some((Glyph::Chevron, c.brand())), c.ink()),
            ),
            kit.section(
                SectionKind::Languages,
                labels.languages,
                heading,
                panel(kit.languages(langs)),
            ),
            kit.section(
                SectionKind::Interests,
                labels.interests,
                heading,
                kit.interests(true, c.ink(), c.brand()),
            ),
        ]
        .into_iter()
        .flatten(),
    );

    let decorations = vec![
        Decoration::first_page(Paint::Rect {
            rect: Rect::new(0.0, 0.0, A4_WIDTH, band),
            color: c.ink(),
        }),
        Decoration::first_page(Paint::Rect {
            rect: Rect::new(0.0, band, A4_WIDTH, kit.s(4.0)),
            color: c.brand(),
        }),
    ];

    document(kit.model, Insets::uniform(margin), decorations, blocks)
}

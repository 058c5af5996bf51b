//! Framed page, centered ornaments.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{
    Block, Decoration, Glyph, GlyphBlock, Insets, LayoutDocument, Paint, Rect, SectionKind,
};
use folio_style::TextAlign;
use folio_types::{A4_HEIGHT, A4_WIDTH};

fn frame(inset: f32) -> Rect {
    Rect::new(inset, inset, A4_WIDTH - 2.0 * inset, A4_HEIGHT - 2.0 * inset)
}

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.8, 11.0, 25.0, 1.35));
    let c = kit.colors;
    let labels = kit.labels;
    let heading = HeadingStyle::Centered {
        glyph: Glyph::Diamond,
        tint: c.brand(),
        text: c.brand_dark(),
    };

    let mut header = vec![Block::Glyph(GlyphBlock {
        glyph: Glyph::Diamond,
        color: c.brand(),
        size: kit.s(10.0),
        align: TextAlign::Center,
        space_after: kit.s(6.0),
    })];
    header.extend(kit.name_block(c.brand_dark(), c.muted(), TextAlign::Center));
    header.extend(bare_section(
        SectionKind::Contact,
        kit.contact_inline(c.muted(), c.brand(), TextAlign::Center),
    ));
    header.push(Block::Spacer(kit.s(12.0)));

    let xp = XpStyle {
        bullet: Glyph::Diamond,
        bullet_color: c.brand(),
        role: c.brand_dark(),
        company: c.ink(),
        meta: c.muted(),
        dates: DatesAt::Right,
        icons: false,
    };
    let langs = LangStyle {
        name: c.ink(),
        level: c.muted(),
        dot_on: c.brand(),
        dot_off: c.hair(),
    };

    let mut blocks = vec![Block::section(SectionKind::Header, header)];
    blocks.extend(
        [
            kit.section(SectionKind::Profile, labels.profile, heading, kit.profile(c.ink())),
            kit.section(SectionKind::Experience, labels.experience, heading, kit.experience(xp)),
            kit.section(
                SectionKind::Skills,
                labels.skills,
                heading,
                kit.skills_grouped(c.brand_dark(), c.ink(), c.brand()),
            ),
            kit.section(
                SectionKind::Education,
                labels.education,
                heading,
                kit.education(Some((Glyph::Diamond, c.brand())), c.ink()),
            ),
            kit.section(
                SectionKind::Certifications,
                labels.certifications,
                heading,
                kit.certifications(Some((Glyph::Diamond, c.brand())), c.ink()),
            ),
            kit.section(SectionKind::Languages, labels.languages, heading, kit.languages(langs)),
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
        Decoration::every_page(Paint::StrokeRect {
            rect: frame(kit.s(20.0)),
            color: c.brand(),
            width: kit.s(1.2),
        }),
        Decoration::every_page(Paint::StrokeRect {
            rect: frame(kit.s(25.0)),
            color: c.hair(),
            width: kit.s(0.5),
        }),
    ];

    document(kit.model, Insets::uniform(kit.s(54.0)), decorations, blocks)
}

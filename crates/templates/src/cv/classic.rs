//! Centered header between hairlines, dates right-aligned.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{Block, Decoration, Glyph, Insets, LayoutDocument, Paint, Rule, SectionKind};
use folio_style::TextAlign;
use folio_types::A4_WIDTH;

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(10.0, 12.0, 24.0, 1.3));
    let c = kit.colors;
    let labels = kit.labels;
    let margin = kit.s(44.0);
    let heading = HeadingStyle::Ruled {
        text: c.ink(),
        rule: c.hair(),
    };

    let mut header = vec![Block::Rule(
        Rule::new(kit.s(0.6), c.hair()).spacing(0.0, kit.s(8.0)),
    )];
    header.extend(kit.name_block(c.ink(), c.muted(), TextAlign::Center));
    header.extend(bare_section(
        SectionKind::Contact,
        kit.contact_inline(c.muted(), c.hair(), TextAlign::Center),
    ));
    header.push(Block::Rule(
        Rule::new(kit.s(0.6), c.hair()).spacing(kit.s(6.0), kit.s(10.0)),
    ));

    let xp = XpStyle {
        bullet: Glyph::Dash,
        bullet_color: c.muted(),
        role: c.ink(),
        company: c.ink(),
        meta: c.muted(),
        dates: DatesAt::Right,
        icons: false,
    };
    let langs = LangStyle {
        name: c.ink(),
        level: c.muted(),
        dot_on: c.ink(),
        dot_off: c.border(),
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
                kit.skills_inline(c.ink(), c.ink()),
            ),
            kit.section(SectionKind::Education, labels.education, heading, kit.education(None, c.ink())),
            kit.section(
                SectionKind::Certifications,
                labels.certifications,
                heading,
                kit.certifications(None, c.ink()),
            ),
            kit.section(SectionKind::Languages, labels.languages, heading, kit.languages(langs)),
            kit.section(
                SectionKind::Interests,
                labels.interests,
                heading,
                kit.interests(true, c.ink(), c.muted()),
            ),
        ]
        .into_iter()
        .flatten(),
    );

    // brand hairline along the top edge of every page
    let top = kit.s(20.0);
    let decorations = vec![Decoration::every_page(Paint::Line {
        from: (margin, top),
        to: (A4_WIDTH - margin, top),
        color: c.brand(),
        width: kit.s(1.0),
    })];

    document(kit.model, Insets::uniform(margin), decorations, blocks)
}

//! Quiet headings and generous whitespace.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{Block, Glyph, Insets, LayoutDocument, Rule, SectionKind};
use folio_style::TextAlign;

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.8, 10.5, 26.0, 1.4));
    let c = kit.colors;
    let labels = kit.labels;
    let heading = HeadingStyle::Quiet { text: c.muted() };

    let mut header = kit.name_block(c.ink(), c.muted(), TextAlign::Left);
    header.extend(bare_section(
        SectionKind::Contact,
        kit.contact_inline(c.muted(), c.border(), TextAlign::Left),
    ));
    header.push(Block::Rule(
        Rule::new(kit.s(2.0), c.brand())
            .spacing(kit.s(10.0), kit.s(18.0))
            .length(0.08),
    ));

    let xp = XpStyle {
        bullet: Glyph::Dash,
        bullet_color: c.border(),
        role: c.ink(),
        company: c.muted(),
        meta: c.muted(),
        dates: DatesAt::Below,
        icons: false,
    };
    let langs = LangStyle {
        name: c.ink(),
        level: c.muted(),
        dot_on: c.muted(),
        dot_off: c.border(),
    };

    let mut blocks = vec![Block::section(SectionKind::Header, header)];
    for section in [
        kit.section(SectionKind::Profile, labels.profile, heading, kit.profile(c.ink())),
        kit.section(SectionKind::Experience, labels.experience, heading, kit.experience(xp)),
        kit.section(
            SectionKind::Skills,
            labels.skills,
            heading,
            kit.skills_inline(c.muted(), c.ink()),
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
            kit.interests(true, c.ink(), c.border()),
        ),
    ]
    .into_iter()
    .flatten()
    {
        blocks.push(section);
        blocks.push(Block::Spacer(kit.s(6.0)));
    }

    document(
        kit.model,
        Insets::symmetric(kit.s(60.0), kit.s(64.0)),
        Vec::new(),
        blocks,
    )
}

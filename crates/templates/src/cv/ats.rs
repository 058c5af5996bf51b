//! Single-column layout sized from the content volume.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use crate::volume::ats_typography;
use folio_layout::{Block, Glyph, Insets, LayoutDocument, Rule, SectionKind};
use folio_style::TextAlign;

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let sizes = ats_typography(ctx.volume);
    let kit = ctx.kit(Typo::new(
        sizes.font_size,
        sizes.heading_size,
        sizes.title_size,
        sizes.line_height,
    ));
    let c = kit.colors;
    let labels = kit.labels;
    let heading = HeadingStyle::Ruled {
        text: c.brand_dark(),
        rule: c.brand(),
    };

    let mut header = kit.name_block(c.ink(), c.brand(), TextAlign::Left);
    header.extend(bare_section(
        SectionKind::Contact,
        kit.contact_inline(c.muted(), c.hair(), TextAlign::Left),
    ));
    header.push(Block::Rule(
        Rule::new(kit.s(1.2), c.brand()).spacing(kit.s(4.0), kit.s(8.0)),
    ));

    let xp = XpStyle {
        bullet: Glyph::Dot,
        bullet_color: c.brand(),
        role: c.ink(),
        company: c.brand_dark(),
        meta: c.muted(),
        dates: DatesAt::Below,
        icons: false,
    };
    let langs = LangStyle {
        name: c.ink(),
        level: c.muted(),
        dot_on: c.brand(),
        dot_off: c.border(),
    };

    let mut blocks = vec![Block::section(SectionKind::Header, header)];
    blocks.extend(
        [
            kit.section(SectionKind::Profile, labels.profile, heading, kit.profile(c.ink())),
            kit.section(
                SectionKind::Skills,
                labels.skills,
                heading,
                kit.skills_inline(c.brand_dark(), c.ink()),
            ),
            kit.section(SectionKind::Experience, labels.experience, heading, kit.experience(xp)),
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
                kit.interests(true, c.ink(), c.brand()),
            ),
        ]
        .into_iter()
        .flatten(),
    );

    document(kit.model, Insets::uniform(kit.s(sizes.margin)), Vec::new(), blocks)
}

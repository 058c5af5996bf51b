//! Dense two-column layout: gradient sidebar with identity and skills,
//! one icon per section heading in the main column.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{
    Block, Cell, Columns, Decoration, GlyphBlock, GradientAxis, Glyph, Insets, LayoutDocument,
    Paint, Rect, SectionKind,
};
use folio_style::TextAlign;
use folio_types::{Color, A4_HEIGHT};

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.5, 11.5, 22.0, 1.3));
    let c = kit.colors;
    let labels = kit.labels;
    let margin = kit.s(30.0);
    let sidebar = kit.s(170.0);
    let gap = kit.s(24.0);

    let tint = c.brand_tint(0.7);
    let side_heading = HeadingStyle::Plain {
        text: Color::WHITE,
        underline: Some(tint),
    };
    let main_heading = |glyph| HeadingStyle::Glyph {
        glyph,
        tint: c.brand(),
        text: c.brand_dark(),
    };

    let mut side = vec![Block::Glyph(GlyphBlock {
        glyph: Glyph::User,
        color: Color::WHITE,
        size: kit.s(34.0),
        align: TextAlign::Center,
        space_after: kit.s(8.0),
    })];
    side.extend(bare_section(
        SectionKind::Header,
        kit.name_block(Color::WHITE, tint, TextAlign::Center),
    ));
    side.push(Block::Spacer(kit.s(6.0)));
    side.extend(
        [
            kit.section(
                SectionKind::Contact,
                labels.contact,
                side_heading,
                kit.contact_icons(Color::WHITE, tint),
            ),
            kit.section(
                SectionKind::Languages,
                labels.languages,
                HeadingStyle::Glyph {
                    glyph: Glyph::Globe,
                    tint,
                    text: Color::WHITE,
                },
                kit.languages(LangStyle {
                    name: Color::WHITE,
                    level: tint,
                    dot_on: Color::WHITE,
                    dot_off: c.brand_tint(0.3),
                }),
            ),
            kit.section(
                SectionKind::Skills,
                labels.skills,
                side_heading,
                kit.skills_grouped(tint, Color::WHITE, tint),
            ),
            kit.section(
                SectionKind::Interests,
                labels.interests,
                side_heading,
                kit.interests(false, Color::WHITE, tint),
            ),
        ]
        .into_iter()
        .flatten(),
    );

    let xp = XpStyle {
        bullet: Glyph::Square,
        bullet_color: c.brand(),
        role: c.ink(),
        company: c.brand(),
        meta: c.muted(),
        dates: DatesAt::Right,
        icons: true,
    };
    let main: Vec<Block> = [
        kit.section(
            SectionKind::Profile,
            labels.profile,
            main_heading(Glyph::User),
            kit.profile(c.ink()),
        ),
        kit.section(
            SectionKind::Experience,
            labels.experience,
            main_heading(Glyph::Calendar),
            kit.experience(xp),
        ),
        kit.section(
            SectionKind::Education,
            labels.education,
            main_heading(Glyph::Cap),
            kit.education(None, c.ink()),
        ),
        kit.section(
            SectionKind::Certifications,
            labels.certifications,
            main_heading(Glyph::Medal),
            kit.certifications(Some((Glyph::Medal, c.brand())), c.ink()),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let decorations = vec![Decoration::every_page(Paint::Gradient {
        rect: Rect::new(0.0, 0.0, margin + sidebar + gap / 2.0, A4_HEIGHT),
        from: c.brand_dark(),
        to: c.brand(),
        axis: GradientAxis::Vertical,
    })];

    let blocks = vec![Block::Columns(Columns {
        columns: vec![Cell::fixed(sidebar, side), Cell::fill(main)],
        gap,
    })];
    document(kit.model, Insets::uniform(margin), decorations, blocks)
}

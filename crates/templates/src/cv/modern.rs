//! Gradient sidebar with contact, skills and languages; story on the right.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{
    Block, Cell, Columns, Decoration, GradientAxis, Glyph, Insets, LayoutDocument, Paint, Rect,
    SectionKind,
};
use folio_style::TextAlign;
use folio_types::{Color, A4_HEIGHT};

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.6, 11.5, 24.0, 1.3));
    let c = kit.colors;
    let labels = kit.labels;
    let margin = kit.s(30.0);
    let sidebar = kit.s(158.0);
    let gap = kit.s(26.0);

    let tint = c.brand_tint(0.7);
    let side_heading = HeadingStyle::Plain {
        text: Color::WHITE,
        underline: Some(tint),
    };
    let main_heading = HeadingStyle::Plain {
        text: c.brand_dark(),
        underline: Some(c.brand()),
    };

    let side: Vec<Block> = [
        kit.section(
            SectionKind::Contact,
            labels.contact,
            side_heading,
            kit.contact_icons(Color::WHITE, tint),
        ),
        kit.section(
            SectionKind::Skills,
            labels.skills,
            side_heading,
            kit.skills_grouped(tint, Color::WHITE, tint),
        ),
        kit.section(
            SectionKind::Languages,
            labels.languages,
            side_heading,
            kit.languages(LangStyle {
                name: Color::WHITE,
                level: tint,
                dot_on: Color::WHITE,
                dot_off: c.brand_tint(0.3),
            }),
        ),
        kit.section(
            SectionKind::Interests,
            labels.interests,
            side_heading,
            kit.interests(false, Color::WHITE, tint),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let xp = XpStyle {
        bullet: Glyph::Dot,
        bullet_color: c.brand(),
        role: c.ink(),
        company: c.brand(),
        meta: c.muted(),
        dates: DatesAt::Below,
        icons: true,
    };
    let mut main: Vec<Block> = bare_section(
        SectionKind::Header,
        kit.name_block(c.brand_dark(), c.brand(), TextAlign::Left),
    )
    .into_iter()
    .collect();
    main.push(Block::Spacer(kit.s(8.0)));
    main.extend(
        [
            kit.section(SectionKind::Profile, labels.profile, main_heading, kit.profile(c.ink())),
            kit.section(SectionKind::Experience, labels.experience, main_heading, kit.experience(xp)),
            kit.section(
                SectionKind::Education,
                labels.education,
                main_heading,
                kit.education(Some((Glyph::Cap, c.brand())), c.ink()),
            ),
            kit.section(
                SectionKind::Certifications,
                labels.certifications,
                main_heading,
                kit.certifications(Some((Glyph::Medal, c.brand())), c.ink()),
            ),
        ]
        .into_iter()
        .flatten(),
    );

    let band = Rect::new(0.0, 0.0, margin + sidebar + gap / 2.0, A4_HEIGHT);
    let decorations = vec![Decoration::every_page(Paint::Gradient {
        rect: band,
        from: c.brand(),
        to: c.brand_dark(),
        axis: GradientAxis::Vertical,
    })];

    let blocks = vec![Block::Columns(Columns {
        columns: vec![Cell::fixed(sidebar, side), Cell::fill(main)],
        gap,
    })];
    document(kit.model, Insets::uniform(margin), decorations, blocks)
}

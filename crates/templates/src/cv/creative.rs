//! Colored header band on the first page, tinted sidebar on the right.

use super::{bare_section, document, Context};
use crate::kit::{DatesAt, HeadingStyle, LangStyle, Typo, XpStyle};
use folio_layout::{
    Block, Cell, Columns, Decoration, GradientAxis, Glyph, Insets, LayoutDocument, Paint, Panel,
    Rect, SectionKind,
};
use folio_style::TextAlign;
use folio_types::{Color, A4_WIDTH};

pub(super) fn render(ctx: &Context<'_>) -> LayoutDocument {
    let kit = ctx.kit(Typo::new(9.6, 11.5, 26.0, 1.3));
    let c = kit.colors;
    let labels = kit.labels;
    let margin = kit.s(36.0);
    let band = kit.s(128.0);
    let sidebar = kit.s(160.0);

    let heading = HeadingStyle::Glyph {
        glyph: Glyph::Dot,
        tint: c.brand(),
        text: c.brand_dark(),
    };
    let side_heading = HeadingStyle::Quiet { text: c.brand_dark() };

    let mut blocks: Vec<Block> = bare_section(
        SectionKind::Header,
        kit.name_block(Color::WHITE, c.brand_tint(0.75), TextAlign::Left),
    )
    .into_iter()
    .collect();
    blocks.push(kit.clear_band(margin, band));

    let xp = XpStyle {
        bullet: Glyph::Dot,
        bullet_color: c.brand(),
        role: c.ink(),
        company: c.brand(),
        meta: c.muted(),
        dates: DatesAt::Below,
        icons: false,
    };
    let main: Vec<Block> = [
        kit.section(SectionKind::Profile, labels.profile, heading, kit.profile(c.ink())),
        kit.section(SectionKind::Experience, labels.experience, heading, kit.experience(xp)),
        kit.section(
            SectionKind::Education,
            labels.education,
            heading,
            kit.education(Some((Glyph::Cap, c.brand())), c.ink()),
        ),
        kit.section(
            SectionKind::Certifications,
            labels.certifications,
            heading,
            kit.certifications(Some((Glyph::Medal, c.brand())), c.ink()),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let side: Vec<Block> = [
        kit.section(
            SectionKind::Contact,
            labels.contact,
            side_heading,
            kit.contact_icons(c.ink(), c.brand()),
        ),
        kit.section(
            SectionKind::Skills,
            labels.skills,
            side_heading,
            kit.skills_grouped(c.brand_dark(), c.ink(), c.muted()),
        ),
        kit.section(
            SectionKind::Languages,
            labels.languages,
            side_heading,
            kit.languages(LangStyle {
                name: c.ink(),
                level: c.muted(),
                dot_on: c.brand(),
                dot_off: c.border(),
            }),
        ),
        kit.section(
            SectionKind::Interests,
            labels.interests,
            side_heading,
            kit.interests(false, c.ink(), c.brand()),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut columns = vec![Cell::fill(main)];
    if !side.is_empty() {
        columns.push(Cell::fixed(
            sidebar,
            vec![Block::Panel(Panel {
                background: c.bg_soft(),
                padding: Insets::uniform(kit.s(10.0)),
                space_after: 0.0,
                blocks: side,
            })],
        ));
    }
    blocks.push(Block::Columns(Columns {
        columns,
        gap: kit.s(22.0),
    }));

    let decorations = vec![
        Decoration::first_page(Paint::Gradient {
            rect: Rect::new(0.0, 0.0, A4_WIDTH, band),
            from: c.brand_dark(),
            to: c.brand(),
            axis: GradientAxis::Horizontal,
        }),
        Decoration::first_page(Paint::Circle {
            cx: A4_WIDTH - kit.s(70.0),
            cy: kit.s(34.0),
            r: kit.s(46.0),
            color: c.brand_tint(0.25),
        }),
        Decoration::first_page(Paint::Circle {
            cx: A4_WIDTH - kit.s(150.0),
            cy: band - kit.s(12.0),
            r: kit.s(22.0),
            color: c.brand_tint(0.4),
        }),
    ];

    document(kit.model, Insets::uniform(margin), decorations, blocks)
}

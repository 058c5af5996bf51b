//! Vector icons and flags.
//!
//! Every glyph is a list of primitives inside a unit box (`0..1` on both
//! axes, y down). The renderer scales the box to the glyph size.

use folio_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Fr,
    En,
    Es,
    De,
    It,
    Pt,
    Ar,
    Zh,
    Generic,
}

impl FlagKind {
    const TABLE: &'static [(&'static [&'static str], FlagKind)] = &[
        (&["fran", "french"], FlagKind::Fr),
        (&["angl", "engl"], FlagKind::En),
        (&["espa", "spani", "castil"], FlagKind::Es),
        (&["allem", "germ", "deutsch"], FlagKind::De),
        (&["ital"], FlagKind::It),
        (&["portu"], FlagKind::Pt),
        (&["arab"], FlagKind::Ar),
        (&["chin", "mandar"], FlagKind::Zh),
    ];

    /// Picks a flag by matching substrings of a language name.
    pub fn for_language(name: &str) -> FlagKind {
        let lowered = name.to_lowercase();
        Self::TABLE
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
            .map(|(_, flag)| *flag)
            .unwrap_or(FlagKind::Generic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Calendar,
    Pin,
    Cap,
    Medal,
    Globe,
    User,
    Mail,
    Phone,
    Dot,
    Square,
    Diamond,
    Dash,
    Chevron,
    Flag(FlagKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphPaint {
    /// The color the glyph is drawn with.
    Tint,
    Fixed(Color),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlyphShape {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        paint: GlyphPaint,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        paint: GlyphPaint,
    },
    /// Stroked circle.
    Ring {
        cx: f32,
        cy: f32,
        r: f32,
        width: f32,
        paint: GlyphPaint,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        paint: GlyphPaint,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        paint: GlyphPaint,
    },
}

use GlyphPaint::{Fixed, Tint};

const WHITE: GlyphPaint = Fixed(Color::WHITE);

fn rect(x: f32, y: f32, w: f32, h: f32, paint: GlyphPaint) -> GlyphShape {
    GlyphShape::Rect { x, y, w, h, paint }
}

fn circle(cx: f32, cy: f32, r: f32, paint: GlyphPaint) -> GlyphShape {
    GlyphShape::Circle { cx, cy, r, paint }
}

fn line(from: (f32, f32), to: (f32, f32), width: f32, paint: GlyphPaint) -> GlyphShape {
    GlyphShape::Line {
        from,
        to,
        width,
        paint,
    }
}

fn polygon(points: &[(f32, f32)], paint: GlyphPaint) -> GlyphShape {
    GlyphShape::Polygon {
        points: points.to_vec(),
        paint,
    }
}

fn star(cx: f32, cy: f32, outer: f32, paint: GlyphPaint) -> GlyphShape {
    let inner = outer * 0.4;
    let points = (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect();
    GlyphShape::Polygon { points, paint }
}

/// Flags are drawn in a 3:2 band centered vertically in the unit box.
const FLAG_TOP: f32 = 1.0 / 6.0;
const FLAG_H: f32 = 2.0 / 3.0;

fn vertical_tricolor(colors: [Color; 3]) -> Vec<GlyphShape> {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| rect(i as f32 / 3.0, FLAG_TOP, 1.0 / 3.0, FLAG_H, Fixed(*c)))
        .collect()
}

fn horizontal_bands(bands: &[(Color, f32)]) -> Vec<GlyphShape> {
    let total: f32 = bands.iter().map(|(_, w)| w).sum();
    let mut y = FLAG_TOP;
    bands
        .iter()
        .map(|(c, w)| {
            let h = FLAG_H * w / total;
            let shape = rect(0.0, y, 1.0, h, Fixed(*c));
            y += h;
            shape
        })
        .collect()
}

fn flag_shapes(flag: FlagKind) -> Vec<GlyphShape> {
    let bottom = FLAG_TOP + FLAG_H;
    match flag {
        FlagKind::Fr => vertical_tricolor([
            Color::rgb(0, 85, 164),
            Color::WHITE,
            Color::rgb(239, 65, 53),
        ]),
        FlagKind::It => vertical_tricolor([
            Color::rgb(0, 146, 70),
            Color::WHITE,
            Color::rgb(206, 43, 55),
        ]),
        FlagKind::De => horizontal_bands(&[
            (Color::BLACK, 1.0),
            (Color::rgb(221, 0, 0), 1.0),
            (Color::rgb(255, 206, 0), 1.0),
        ]),
        FlagKind::Es => horizontal_bands(&[
            (Color::rgb(170, 21, 27), 1.0),
            (Color::rgb(241, 191, 0), 2.0),
            (Color::rgb(170, 21, 27), 1.0),
        ]),
        FlagKind::En => {
            let red = Fixed(Color::rgb(200, 16, 46));
            vec![
                rect(0.0, FLAG_TOP, 1.0, FLAG_H, Fixed(Color::rgb(1, 33, 105))),
                line((0.0, FLAG_TOP), (1.0, bottom), 0.12, WHITE),
                line((0.0, bottom), (1.0, FLAG_TOP), 0.12, WHITE),
                line((0.0, FLAG_TOP), (1.0, bottom), 0.04, red),
                line((0.0, bottom), (1.0, FLAG_TOP), 0.04, red),
                rect(0.0, 0.5 - 0.1, 1.0, 0.2, WHITE),
                rect(0.4, FLAG_TOP, 0.2, FLAG_H, WHITE),
                rect(0.0, 0.5 - 0.06, 1.0, 0.12, red),
                rect(0.44, FLAG_TOP, 0.12, FLAG_H, red),
            ]
        }
        FlagKind::Pt => vec![
            rect(0.0, FLAG_TOP, 0.4, FLAG_H, Fixed(Color::rgb(0, 102, 0))),
            rect(0.4, FLAG_TOP, 0.6, FLAG_H, Fixed(Color::rgb(255, 0, 0))),
            circle(0.4, 0.5, 0.14, Fixed(Color::rgb(255, 204, 0))),
        ],
        FlagKind::Ar => vec![
            rect(0.0, FLAG_TOP, 1.0, FLAG_H, Fixed(Color::rgb(0, 122, 61))),
            line((0.25, 0.62), (0.75, 0.62), 0.05, WHITE),
            circle(0.5, 0.42, 0.08, WHITE),
        ],
        FlagKind::Zh => vec![
            rect(0.0, FLAG_TOP, 1.0, FLAG_H, Fixed(Color::rgb(222, 41, 16))),
            star(0.22, 0.36, 0.13, Fixed(Color::rgb(255, 222, 0))),
        ],
        FlagKind::Generic => vec![
            rect(0.0, FLAG_TOP, 1.0, FLAG_H, Fixed(Color::rgb(226, 232, 240))),
            GlyphShape::Ring {
                cx: 0.5,
                cy: 0.5,
                r: 0.2,
                width: 0.06,
                paint: Tint,
            },
            line((0.3, 0.5), (0.7, 0.5), 0.04, Tint),
        ],
    }
}

impl Glyph {
    pub fn shapes(&self) -> Vec<GlyphShape> {
        match self {
            Glyph::Calendar => vec![
                rect(0.1, 0.18, 0.8, 0.72, Tint),
                rect(0.18, 0.42, 0.64, 0.4, WHITE),
                rect(0.27, 0.06, 0.1, 0.2, Tint),
                rect(0.63, 0.06, 0.1, 0.2, Tint),
                rect(0.26, 0.5, 0.12, 0.1, Tint),
                rect(0.44, 0.5, 0.12, 0.1, Tint),
                rect(0.62, 0.5, 0.12, 0.1, Tint),
                rect(0.26, 0.66, 0.12, 0.1, Tint),
            ],
            Glyph::Pin => vec![
                circle(0.5, 0.38, 0.3, Tint),
                polygon(&[(0.24, 0.52), (0.76, 0.52), (0.5, 0.96)], Tint),
                circle(0.5, 0.38, 0.11, WHITE),
            ],
            Glyph::Cap => vec![
                polygon(&[(0.5, 0.15), (1.0, 0.4), (0.5, 0.65), (0.0, 0.4)], Tint),
                rect(0.25, 0.5, 0.5, 0.25, Tint),
                line((0.88, 0.45), (0.88, 0.82), 0.06, Tint),
            ],
            Glyph::Medal => vec![
                polygon(&[(0.28, 0.0), (0.44, 0.0), (0.56, 0.42), (0.4, 0.42)], Tint),
                polygon(&[(0.56, 0.0), (0.72, 0.0), (0.6, 0.42), (0.44, 0.42)], Tint),
                circle(0.5, 0.66, 0.3, Tint),
                circle(0.5, 0.66, 0.14, WHITE),
            ],
            Glyph::Globe => vec![
                GlyphShape::Ring {
                    cx: 0.5,
                    cy: 0.5,
                    r: 0.42,
                    width: 0.08,
                    paint: Tint,
                },
                line((0.08, 0.5), (0.92, 0.5), 0.06, Tint),
                line((0.5, 0.08), (0.5, 0.92), 0.06, Tint),
                line((0.2, 0.28), (0.8, 0.28), 0.05, Tint),
                line((0.2, 0.72), (0.8, 0.72), 0.05, Tint),
            ],
            Glyph::User => vec![
                circle(0.5, 0.3, 0.2, Tint),
                polygon(
                    &[(0.12, 0.95), (0.2, 0.62), (0.5, 0.55), (0.8, 0.62), (0.88, 0.95)],
                    Tint,
                ),
            ],
            Glyph::Mail => vec![
                rect(0.05, 0.2, 0.9, 0.6, Tint),
                polygon(&[(0.1, 0.25), (0.9, 0.25), (0.5, 0.55)], WHITE),
            ],
            Glyph::Phone => vec![
                rect(0.28, 0.05, 0.44, 0.9, Tint),
                rect(0.34, 0.15, 0.32, 0.6, WHITE),
                circle(0.5, 0.85, 0.05, WHITE),
            ],
            Glyph::Dot => vec![circle(0.5, 0.5, 0.25, Tint)],
            Glyph::Square => vec![rect(0.3, 0.3, 0.4, 0.4, Tint)],
            Glyph::Diamond => vec![polygon(&[(0.5, 0.2), (0.8, 0.5), (0.5, 0.8), (0.2, 0.5)], Tint)],
            Glyph::Dash => vec![rect(0.15, 0.45, 0.7, 0.1, Tint)],
            Glyph::Chevron => vec![polygon(
                &[(0.25, 0.15), (0.45, 0.15), (0.8, 0.5), (0.45, 0.85), (0.25, 0.85), (0.6, 0.5)],
                Tint,
            )],
            Glyph::Flag(flag) => flag_shapes(*flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_lookup_matches_substrings() {
        assert_eq!(FlagKind::for_language("Français"), FlagKind::Fr);
        assert_eq!(FlagKind::for_language("ANGLAIS"), FlagKind::En);
        assert_eq!(FlagKind::for_language("English"), FlagKind::En);
        assert_eq!(FlagKind::for_language("Español"), FlagKind::Es);
        assert_eq!(FlagKind::for_language("Allemand"), FlagKind::De);
        assert_eq!(FlagKind::for_language("Italiano"), FlagKind::It);
        assert_eq!(FlagKind::for_language("Portugais"), FlagKind::Pt);
        assert_eq!(FlagKind::for_language("Arabe"), FlagKind::Ar);
        assert_eq!(FlagKind::for_language("Mandarin"), FlagKind::Zh);
        assert_eq!(FlagKind::for_language("Klingon"), FlagKind::Generic);
    }

    #[test]
    fn shapes_stay_inside_the_unit_box() {
        let glyphs = [
            Glyph::Calendar,
            Glyph::Pin,
            Glyph::Cap,
            Glyph::Medal,
            Glyph::Globe,
            Glyph::User,
            Glyph::Chevron,
            Glyph::Flag(FlagKind::En),
            Glyph::Flag(FlagKind::Zh),
        ];
        let inside = |v: f32| (-0.001..=1.001).contains(&v);
        for glyph in glyphs {
            for shape in glyph.shapes() {
                let ok = match shape {
                    GlyphShape::Rect { x, y, w, h, .. } => {
                        inside(x) && inside(y) && inside(x + w) && inside(y + h)
                    }
                    GlyphShape::Circle { cx, cy, r, .. } | GlyphShape::Ring { cx, cy, r, .. } => {
                        inside(cx - r) && inside(cx + r) && inside(cy - r) && inside(cy + r)
                    }
                    GlyphShape::Line { from, to, .. } => {
                        inside(from.0) && inside(from.1) && inside(to.0) && inside(to.1)
                    }
                    GlyphShape::Polygon { points, .. } => {
                        points.iter().all(|(x, y)| inside(*x) && inside(*y))
                    }
                };
                assert!(ok, "{glyph:?} leaves the unit box");
            }
        }
    }
}

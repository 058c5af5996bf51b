//! Brand-color theme derivation.
//!
//! A document theme is derived from a single brand color. Only `brand` and
//! `brand_dark` depend on the input; the neutral palette is fixed.

use folio_types::Color;
use serde::Serialize;

/// Used whenever the supplied brand color cannot be understood.
pub const DEFAULT_BRAND: &str = "#2563eb";

/// How much each channel of the brand color is reduced to obtain `brand_dark`.
pub const BRAND_DARKEN_AMOUNT: i32 = 40;

const INK: Color = Color::rgb(0x0f, 0x17, 0x2a);
const MUTED: Color = Color::rgb(0x47, 0x55, 0x69);
const BORDER: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const BG_SOFT: Color = Color::rgb(0xf1, 0xf5, 0xf9);
const HAIR: Color = Color::rgb(0xcb, 0xd5, 0xe1);

/// Normalizes a user supplied hex color to lowercase `#rrggbb`.
///
/// Adds a missing `#` and expands `#rgb` shorthand. Anything that still isn't
/// six hex digits falls back to [`DEFAULT_BRAND`]; this is never an error.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let mut hex = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };

    if hex.len() == 4 && hex.is_ascii() {
        let expanded: String = hex[1..].chars().flat_map(|c| [c, c]).collect();
        hex = format!("#{expanded}");
    }

    if is_six_digit_hex(&hex) {
        hex.to_ascii_lowercase()
    } else {
        log::warn!("Invalid brand color '{}', using default {}", input, DEFAULT_BRAND);
        DEFAULT_BRAND.to_string()
    }
}

fn is_six_digit_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_normalized(hex: &str) -> Color {
    let normalized = normalize_hex(hex);
    // normalize_hex only ever returns valid six-digit colors
    Color::parse_hex(&normalized).unwrap_or(Color::rgb(0x25, 0x63, 0xeb))
}

/// Subtracts `amount` from every channel, clamping to `[0, 255]`.
pub fn darken_color(color: Color, amount: i32) -> Color {
    let channel = |c: u8| (c as i32 - amount).clamp(0, 255) as u8;
    Color::rgb(channel(color.r), channel(color.g), channel(color.b))
}

/// Hex form of [`darken_color`]; invalid input is normalized first.
pub fn darken(hex: &str, amount: i32) -> String {
    darken_color(parse_normalized(hex), amount).to_hex()
}

/// Linear interpolation between two colors; `t` is clamped to `[0, 1]`.
pub fn mix_colors(a: Color, b: Color, t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8;
    Color::rgb(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Hex form of [`mix_colors`].
pub fn mix(a: &str, b: &str, t: f32) -> String {
    mix_colors(parse_normalized(a), parse_normalized(b), t).to_hex()
}

/// The palette every template draws with.
///
/// `brand_dark` is always derived from `brand`; there is no way to set it
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfColors {
    brand: Color,
    brand_dark: Color,
    ink: Color,
    muted: Color,
    border: Color,
    bg_soft: Color,
    hair: Color,
}

impl PdfColors {
    pub fn brand(&self) -> Color {
        self.brand
    }

    pub fn brand_dark(&self) -> Color {
        self.brand_dark
    }

    pub fn ink(&self) -> Color {
        self.ink
    }

    pub fn muted(&self) -> Color {
        self.muted
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn bg_soft(&self) -> Color {
        self.bg_soft
    }

    pub fn hair(&self) -> Color {
        self.hair
    }

    /// `brand` blended towards white; used for tinted panels.
    pub fn brand_tint(&self, t: f32) -> Color {
        mix_colors(self.brand, Color::WHITE, t)
    }
}

impl Default for PdfColors {
    fn default() -> Self {
        make_colors(DEFAULT_BRAND)
    }
}

/// Expands one brand color into the full document palette.
pub fn make_colors(brand_hex: &str) -> PdfColors {
    let brand = parse_normalized(brand_hex);
    PdfColors {
        brand,
        brand_dark: darken_color(brand, BRAND_DARKEN_AMOUNT),
        ink: INK,
        muted: MUTED,
        border: BORDER,
        bg_soft: BG_SOFT,
        hair: HAIR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_hash_and_expands_shorthand() {
        assert_eq!(normalize_hex("2563EB"), "#2563eb");
        assert_eq!(normalize_hex("#abc"), "#aabbcc");
        assert_eq!(normalize_hex("f0a"), "#ff00aa");
        assert_eq!(normalize_hex("  #101010  "), "#101010");
    }

    #[test]
    fn invalid_input_falls_back_to_default() {
        for bad in ["", "#12", "blue", "#gggggg", "#1234567", "#ééé"] {
            assert_eq!(normalize_hex(bad), DEFAULT_BRAND, "input {bad:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["#abc", "ABCDEF", "nonsense", "#0F172A", "123"] {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn darken_clamps_every_channel() {
        assert_eq!(darken("#101010", 40), "#000000");
        assert_eq!(darken("#ffffff", -40), "#ffffff");
        assert_eq!(darken("#ff8000", 16), "#ef7000");
        let twice = darken(&darken("#050505", 200), 200);
        assert_eq!(twice, "#000000");
    }

    #[test]
    fn mix_interpolates_channels() {
        assert_eq!(mix("#000000", "#ffffff", 0.0), "#000000");
        assert_eq!(mix("#000000", "#ffffff", 1.0), "#ffffff");
        assert_eq!(mix("#000000", "#ffffff", 0.5), "#808080");
        assert_eq!(mix("#000000", "#ffffff", 7.0), "#ffffff");
    }

    #[test]
    fn palette_constants_do_not_depend_on_brand() {
        let a = make_colors("#2563eb");
        let b = make_colors("#e11d48");
        assert_ne!(a.brand(), b.brand());
        assert_eq!(a.ink().to_hex(), "#0f172a");
        assert_eq!(a.muted(), b.muted());
        assert_eq!(a.border().to_hex(), "#e2e8f0");
        assert_eq!(a.bg_soft().to_hex(), "#f1f5f9");
        assert_eq!(a.hair().to_hex(), "#cbd5e1");
    }

    #[test]
    fn dark_brand_is_clamped_not_wrapped() {
        let colors = make_colors("#101010");
        assert_eq!(colors.brand_dark(), Color::rgb(0, 0, 0));
    }

    #[test]
    fn invalid_brand_uses_default_palette() {
        assert_eq!(make_colors("not a color"), PdfColors::default());
    }
}

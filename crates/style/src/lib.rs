pub mod font;
pub mod text;
pub mod theme;

pub use font::{FontStyle, FontVariant, FontWeight};
pub use text::TextAlign;
pub use theme::{darken, make_colors, mix, normalize_hex, PdfColors, DEFAULT_BRAND};

use folio_style::FontVariant;
use folio_types::Color;

/// Page resource name a face is registered under.
pub fn font_resource_name(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "F1",
        FontVariant::Bold => "F2",
        FontVariant::Italic => "F3",
        FontVariant::BoldItalic => "F4",
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Color channels in the `0..=1` range PDF operators expect.
pub fn unit_rgb(color: Color) -> [f32; 3] {
    color.to_unit_rgb()
}

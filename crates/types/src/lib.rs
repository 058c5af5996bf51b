pub mod color;
pub mod geometry;

pub use color::{Color, ColorError};
pub use geometry::{Insets, Rect, Size};

/// A4 portrait width in PDF points.
pub const A4_WIDTH: f32 = 595.28;
/// A4 portrait height in PDF points.
pub const A4_HEIGHT: f32 = 841.89;

//! Core rendering abstractions.
//!
//! - [`DocumentRenderer`]: turns a `LayoutDocument` into bytes and counts the
//!   pages of rendered output
//! - [`RenderError`]: the error type every backend reports
//! - [`utils`]: coordinate and resource-name helpers shared by backends

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;

//! PDF renderer using lopdf.
//!
//! Documents are laid out by `folio-layout` and written in one pass to an
//! in-memory buffer. Standard faces are referenced by name with WinAnsi
//! encoding; TrueType faces are embedded as Type0 fonts so any character
//! they cover can be drawn.

mod embed;
mod painter;
mod renderer;

pub use renderer::LopdfRenderer;

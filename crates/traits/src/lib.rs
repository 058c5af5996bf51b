pub mod executor;
pub mod font;

pub use executor::{Executor, SyncExecutor};
pub use font::{EmbeddedFace, FaceMetrics, FaceProgram, FontError, FontSource, GlyphMetrics};

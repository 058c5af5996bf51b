//! Document generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent configuration, or a JSON [`GenerationConfig`]
//! - [`DocumentPipeline`]: fits a CV and its cover letter and merges them
//!
//! ```ignore
//! use folio::{PipelineBuilder, TemplateId};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_template(TemplateId::Modern)
//!     .with_brand("#0f766e")
//!     .build()?;
//!
//! let bundle = pipeline.generate_bundle(&cv, Some(&letter))?;
//! ```

mod builder;
mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::GenerationConfig;
pub use orchestrator::{Bundle, DocumentPipeline};

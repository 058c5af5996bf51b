//! Document models consumed by the renderers.
//!
//! - [`CvDocModel`] and [`LmModel`] are the canonical, fully typed models.
//! - [`normalize_cv`] / [`normalize_letter`] coerce loosely shaped JSON into them.
//! - [`parse_lang_line`] interprets the free-form languages line.

mod cv;
mod error;
mod lang;
mod languages;
mod letter;
pub mod normalize;

pub use cv::{CvDocModel, ExperienceEntry, SkillCategory, Skills};
pub use error::ValidationError;
pub use lang::Lang;
pub use languages::{level_from_label, parse_lang_line, LanguageSkill, MAX_LEVEL};
pub use letter::LmModel;
pub use normalize::{normalize_cv, normalize_letter, SCHEMA_VERSION};

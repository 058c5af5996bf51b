//! Font resources for the folio pipeline.
//!
//! - [`Base14Source`]: compiled-in metrics for the Helvetica family
//! - [`TrueTypeSource`]: TrueType families that are embedded in the output
//! - [`FontTable`]: the four faces of one family, with width measurement
//! - [`FontCache`] / [`fonts`]: lazy, load-once access to the table
//! - [`encode_text`]: turns text into the show-string bytes of a face

mod base14;
mod cache;
mod encoding;
mod table;
mod truetype;

pub use base14::{Base14Source, HELVETICA};
pub use cache::{FontCache, fonts};
pub use encoding::{EncodedText, encode_text, winansi_code};
pub use table::FontTable;
pub use truetype::TrueTypeSource;

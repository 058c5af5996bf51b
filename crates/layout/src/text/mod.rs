pub mod wrapper;

pub use wrapper::{break_lines, LineFragment, LineLayout};

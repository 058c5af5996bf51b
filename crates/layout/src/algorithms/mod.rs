pub mod pagination;

pub use pagination::{check_child_fit, BreakAnalysis};

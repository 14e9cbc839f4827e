pub mod formatter;

pub use formatter::{format_matches, print_analysis};

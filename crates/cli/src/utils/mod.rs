pub mod parser;

pub use parser::{parse_location, resolve_offset, Location};

//! Field-to-setter mapping and snippet rendering

pub mod matcher;
pub mod mode;
pub mod render;

pub use matcher::{build_field_map, match_setters};
pub use mode::{fluent_marker_state, has_only_fluent_setters, select_mode};
pub use render::{render, DeclarationStyle, RenderOptions};

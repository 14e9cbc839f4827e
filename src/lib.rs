//! Umbrella crate for the workspace integration tests.
//!
//! Everything lives in [`o2ox_core`]; this crate only re-exports it so the
//! tests under `tests/` can exercise the public API the way a host would.
pub use o2ox_core::*;

//! Shared types and helpers for the Steam library locator.
//!
//! Holds the on-disk layout of a Steam installation and the registry keys
//! used to find one, so the engine and the command-line front end agree on
//! where everything lives.

pub mod constants;
pub mod fs;

pub use constants::*;
pub use fs::{MAX_MANIFEST_BYTES, read_text_with_limit};

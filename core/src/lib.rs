//! Steamfinder Core - Steam installation and game library locator
//!
//! This crate answers three questions for programs that need to cooperate
//! with a local Steam install: is Steam installed, where are its library
//! folders, and which games are installed where.
//!
//! # Architecture
//!
//! - [`InstallResolver`] - Pluggable lookup of the Steam install path (the
//!   Windows registry, or well-known home directories elsewhere)
//! - [`library`] - Manifest parsing, library folder discovery, and game indexing
//! - [`Locator`] - Lookup engine with tiered caching ([`MemoryMode`])
//! - [`config`] - Persistent options (`config.toml`)

pub mod config;
pub mod error;
pub mod library;
pub mod locator;
pub mod resolver;
#[cfg(test)]
pub mod test_utils;

pub use config::{Config, LocatorOptions, LogLevel, MemoryMode};
pub use error::{LocateError, ResolveError};
pub use library::AppRecord;
pub use locator::{Locator, UNKNOWN_APP_ID};
pub use resolver::{FixedResolver, InstallResolver, platform_resolver};

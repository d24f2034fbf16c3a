//! Steam library management
//!
//! Reads the files the Steam client keeps on disk: the library folder list
//! (`steamapps/libraryfolders.vdf`) and one manifest per installed app
//! (`steamapps/appmanifest_<id>.acf`).

mod folders;
pub mod manifest;
mod scanning;

use std::path::PathBuf;

use serde::Serialize;

pub use folders::{library_list_path, parse_library_folders, read_library_folders};
pub use scanning::{app_dir, parse_app_manifest, scan_library};

/// An installed Steam app.
///
/// The default value (empty id, no name, no location) is the "not found"
/// record returned by lookups when errors are suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppRecord {
    /// Steam app id, taken from the manifest file name
    pub id: String,
    /// Display name from the manifest's `name` field
    pub name: Option<String>,
    /// `<library>/steamapps/common/<installdir>`
    pub location: Option<PathBuf>,
}

impl AppRecord {
    /// Returns `true` for the zero-valued "not found" record.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

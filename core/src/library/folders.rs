//! Library folder discovery
//!
//! Steam keeps every content root it knows about in
//! `<install>/steamapps/libraryfolders.vdf`, one `"path"` entry per library.

use std::io;
use std::path::{Path, PathBuf};

use steamfinder_shared::{
    LIBRARY_FOLDERS_FILE, MAX_MANIFEST_BYTES, STEAMAPPS_DIR, read_text_with_limit,
};

use super::manifest::find_field;

/// Returns `<install>/steamapps/libraryfolders.vdf`.
pub fn library_list_path(install_dir: &Path) -> PathBuf {
    install_dir.join(STEAMAPPS_DIR).join(LIBRARY_FOLDERS_FILE)
}

/// Reads the library list of the install at `install_dir`.
///
/// See [`parse_library_folders`] for which entries are kept.
pub fn read_library_folders(install_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let text = read_text_with_limit(&library_list_path(install_dir), MAX_MANIFEST_BYTES)?;
    Ok(parse_library_folders(&text))
}

/// Extracts library directories from library list text.
///
/// Entries keep file order. Directories that no longer exist (an unplugged
/// drive, a deleted folder) are skipped.
pub fn parse_library_folders(text: &str) -> Vec<PathBuf> {
    let mut lines = text.lines();
    let mut libraries = Vec::new();

    while let Some(path) = find_field(&mut lines, "path") {
        let path = PathBuf::from(path);
        if path.is_dir() {
            libraries.push(path);
        } else {
            tracing::warn!("Skipping missing Steam library: {}", path.display());
        }
    }

    libraries
}

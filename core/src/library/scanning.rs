//! App manifest scanning
//!
//! Every installed app has `<library>/steamapps/appmanifest_<id>.acf`
//! naming its display name and its folder under `steamapps/common`.

use std::path::{Path, PathBuf};

use steamfinder_shared::{
    COMMON_DIR, MAX_MANIFEST_BYTES, STEAMAPPS_DIR, app_id_from_manifest_name, read_text_with_limit,
};

use super::AppRecord;
use super::manifest::find_fields;

/// Returns `<library>/steamapps/common/<folder>`.
pub fn app_dir(library: &Path, folder: &str) -> PathBuf {
    library.join(STEAMAPPS_DIR).join(COMMON_DIR).join(folder)
}

/// Builds a record from one manifest's text.
///
/// Missing fields leave the matching attribute unset; a partial record is
/// still a valid catalog entry.
pub fn parse_app_manifest(id: String, library: &Path, text: &str) -> AppRecord {
    let [name, installdir] = find_fields(&mut text.lines(), ["name", "installdir"]);
    AppRecord {
        id,
        name: name.map(str::to_string),
        location: installdir.map(|dir| app_dir(library, dir)),
    }
}

/// Returns every app with a manifest in `library`, ordered by file name.
///
/// A library without a readable `steamapps` directory has no apps.
/// Unreadable manifests are skipped.
pub fn scan_library(library: &Path) -> Vec<AppRecord> {
    let manifest_dir = library.join(STEAMAPPS_DIR);
    let Ok(entries) = std::fs::read_dir(&manifest_dir) else {
        tracing::debug!("No steamapps directory in {}", library.display());
        return vec![];
    };

    let mut manifests: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_name = entry.file_name();
            let id = app_id_from_manifest_name(file_name.to_str()?)?.to_string();
            let path = entry.path();
            path.is_file().then_some((id, path))
        })
        .collect();
    manifests.sort_by(|a, b| a.1.cmp(&b.1));

    manifests
        .into_iter()
        .filter_map(|(id, path)| match read_text_with_limit(&path, MAX_MANIFEST_BYTES) {
            Ok(text) => Some(parse_app_manifest(id, library, &text)),
            Err(e) => {
                tracing::warn!("Skipping unreadable manifest {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

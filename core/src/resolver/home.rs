//! Home directory resolver for hosts without a registry

use std::path::PathBuf;

use super::InstallResolver;
use crate::error::ResolveError;

/// Answers the Steam install path from the client's default locations.
///
/// Only the `InstallPath` value of the Steam key is known; every other
/// query, including per-app uninstall entries, answers `None`.
#[derive(Debug, Clone, Default)]
pub struct HomeDirResolver {
    candidates: Vec<PathBuf>,
}

impl HomeDirResolver {
    /// Check the standard install locations under the user's home directory.
    pub fn from_home() -> Self {
        let candidates = directories::BaseDirs::new()
            .map(|dirs| {
                let home = dirs.home_dir();
                vec![
                    home.join(".steam").join("steam"),
                    home.join(".local").join("share").join("Steam"),
                    home.join("Library")
                        .join("Application Support")
                        .join("Steam"),
                ]
            })
            .unwrap_or_default();
        Self { candidates }
    }

    /// Check an explicit list of directories, in order.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }
}

impl InstallResolver for HomeDirResolver {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        if value_name != steamfinder_shared::INSTALL_PATH_VALUE
            || key_path != steamfinder_shared::steam_key()
        {
            return Ok(None);
        }

        Ok(self
            .candidates
            .iter()
            .find(|dir| dir.is_dir())
            .map(|dir| dir.to_string_lossy().into_owned()))
    }
}

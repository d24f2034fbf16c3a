//! Shared test utilities for locator tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use steamfinder_shared::app_manifest_file_name;
use tempfile::TempDir;

use crate::error::ResolveError;
use crate::resolver::{FixedResolver, InstallResolver};

// ============================================================================
// Fake Steam install
// ============================================================================

/// A Steam install laid out in a temporary directory.
///
/// The install itself lives at `<temp>/Steam` and doubles as the first
/// library, as it does for a real Steam client.
pub struct SteamFixture {
    temp_dir: TempDir,
    install_dir: PathBuf,
}

impl SteamFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let install_dir = temp_dir.path().join("Steam");
        fs::create_dir_all(install_dir.join("steamapps").join("common"))
            .expect("failed to create steamapps");
        Self {
            temp_dir,
            install_dir,
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Create an empty library directory named `name`.
    pub fn add_library(&self, name: &str) -> PathBuf {
        let library = self.temp_dir.path().join(name);
        fs::create_dir_all(library.join("steamapps").join("common"))
            .expect("failed to create library");
        library
    }

    /// A library path that does not exist on disk.
    pub fn missing_library(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `libraryfolders.vdf` listing `libraries` in order.
    pub fn write_library_list(&self, libraries: &[&Path]) {
        let mut text = String::from("\"libraryfolders\"\n{\n");
        for (i, library) in libraries.iter().enumerate() {
            text.push_str(&format!("\t\"{}\"\n\t{{\n", i));
            text.push_str(&format!("\t\t\"path\"\t\t\"{}\"\n", library.display()));
            text.push_str("\t\t\"label\"\t\t\"\"\n");
            text.push_str(&format!("\t\t\"contentid\"\t\t\"{}\"\n\t}}\n", 1000 + i));
        }
        text.push_str("}\n");
        let steamapps = self.install_dir.join("steamapps");
        fs::write(steamapps.join("libraryfolders.vdf"), text)
            .expect("failed to write libraryfolders.vdf");
    }

    /// Write an app manifest and create its install folder.
    pub fn add_app(&self, library: &Path, id: &str, name: &str, installdir: &str) {
        let manifest = [
            "\"AppState\"\n{\n".to_string(),
            format!("\t\"appid\"\t\t\"{id}\"\n"),
            "\t\"Universe\"\t\t\"1\"\n".to_string(),
            format!("\t\"name\"\t\t\"{name}\"\n"),
            "\t\"StateFlags\"\t\t\"4\"\n".to_string(),
            format!("\t\"installdir\"\t\t\"{installdir}\"\n"),
            "\t\"UserConfig\"\n\t{\n\t\t\"language\"\t\t\"english\"\n\t}\n}\n".to_string(),
        ]
        .concat();
        let steamapps = library.join("steamapps");
        fs::create_dir_all(steamapps.join("common").join(installdir))
            .expect("failed to create app dir");
        fs::write(steamapps.join(app_manifest_file_name(id)), manifest)
            .expect("failed to write app manifest");
    }

    /// Resolver reporting this fixture as the Steam install.
    pub fn resolver(&self) -> CountingResolver {
        CountingResolver::new(FixedResolver::steam_install(&self.install_dir))
    }
}

// ============================================================================
// Resolver doubles
// ============================================================================

/// Counts every query before delegating to a [`FixedResolver`].
pub struct CountingResolver {
    inner: FixedResolver,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new(inner: FixedResolver) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InstallResolver for CountingResolver {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(value_name, key_path)
    }
}

/// Fails every query with an I/O error of the given kind.
pub struct FailingResolver(pub io::ErrorKind);

impl InstallResolver for FailingResolver {
    fn resolve(&self, _value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        let err = io::Error::new(self.0, "resolver failure");
        let err = ResolveError::from_io(key_path, err)
            .expect("FailingResolver needs an error kind other than NotFound");
        Err(err)
    }
}

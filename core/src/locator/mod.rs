//! Lookup engine
//!
//! [`Locator`] answers install, library, and game queries, resolving each
//! answer lazily and reusing it according to its [`MemoryMode`]:
//!
//! | Mode    | Install path / libraries | Game catalog          |
//! |---------|--------------------------|-----------------------|
//! | Full    | resolved once            | indexed once          |
//! | Partial | resolved once            | re-indexed per query  |
//! | None    | re-resolved per query    | re-indexed per query  |
//!
//! Game lookups have two strategies. With indexing enabled they scan the
//! catalog built from app manifests. Without it, folder lookups check each
//! library's `steamapps/common` directly and id lookups read the app's
//! uninstall entry through the resolver; name lookups need the catalog and
//! are unavailable.
//!
//! # Concurrency
//!
//! Every query takes `&mut self`, because even reads fill the cache. A
//! locator shared between threads has to sit behind a lock.


use std::path::{Path, PathBuf};

use steamfinder_shared::{
    DISPLAY_NAME_VALUE, INSTALL_LOCATION_VALUE, INSTALL_PATH_VALUE, steam_key, uninstall_key,
};

use crate::config::{LocatorOptions, MemoryMode};
use crate::error::*;
use crate::library::{self, AppRecord};
use crate::resolver::{InstallResolver, platform_resolver};

/// Id reported for games found on disk without reading their manifest.
pub const UNKNOWN_APP_ID: &str = "0";

/// Everything a locator has learned so far.
#[derive(Debug, Default)]
struct SessionState {
    installed: Option<bool>,
    install_path: Option<PathBuf>,
    libraries: Option<Vec<PathBuf>>,
    catalog: Vec<AppRecord>,
    indexed: bool,
}

/// Finds the Steam install, its libraries, and the games in them.
///
/// # Example
///
/// ```no_run
/// use steamfinder_core::{Locator, LocatorOptions};
///
/// let mut locator = Locator::with_platform_resolver(LocatorOptions::default());
/// if locator.is_installed()? {
///     let game = locator.find_by_id("250900")?;
///     println!("{:?}", game.location);
/// }
/// # Ok::<(), steamfinder_core::LocateError>(())
/// ```
pub struct Locator<R = Box<dyn InstallResolver>> {
    options: LocatorOptions,
    resolver: R,
    state: SessionState,
}

impl Locator<Box<dyn InstallResolver>> {
    /// Create a locator backed by the resolver for the current platform.
    pub fn with_platform_resolver(options: LocatorOptions) -> Self {
        Self::new(options, platform_resolver())
    }
}

impl<R: InstallResolver> Locator<R> {
    /// Create a locator with empty state. Nothing is read until the first query.
    pub fn new(options: LocatorOptions, resolver: R) -> Self {
        Self {
            options,
            resolver,
            state: SessionState::default(),
        }
    }

    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Forget every cached answer; the next query starts from the resolver.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }

    /// Returns whether Steam is installed.
    ///
    /// Steam counts as installed when the resolver knows its install path and
    /// that directory exists. Resolver failures other than permission denied
    /// count as "not installed".
    ///
    /// # Errors
    ///
    /// [`LocateError::PermissionDenied`] if the resolver was refused access.
    pub fn is_installed(&mut self) -> Result<bool, LocateError> {
        if self.options.memory == MemoryMode::None {
            self.state.installed = None;
        }
        if let Some(installed) = self.state.installed {
            tracing::debug!("Using cached install check: {}", installed);
            return Ok(installed);
        }

        let installed = match self.resolver.resolve(INSTALL_PATH_VALUE, steam_key()) {
            Ok(Some(path)) => Path::new(&path).is_dir(),
            Ok(None) => false,
            Err(ResolveError::PermissionDenied { key }) => {
                return Err(LocateError::PermissionDenied { key });
            }
            Err(e) => {
                tracing::warn!("Treating Steam as not installed: {}", e);
                false
            }
        };

        self.state.installed = Some(installed);
        Ok(installed)
    }

    /// Returns the Steam install directory.
    ///
    /// Returns `Ok(None)` instead of [`LocateError::NotFound`] when errors
    /// are suppressed.
    ///
    /// # Errors
    ///
    /// - [`LocateError::NotFound`] if Steam is not installed, including when
    ///   an earlier [`is_installed`](Self::is_installed) said so
    /// - [`LocateError::PermissionDenied`] / [`LocateError::Unexpected`] from
    ///   the resolver
    pub fn install_location(&mut self) -> Result<Option<PathBuf>, LocateError> {
        if self.options.memory == MemoryMode::None {
            self.state.installed = None;
            self.state.install_path = None;
        }
        if self.state.installed == Some(false) {
            return self.missing(STEAM_NOT_INSTALLED);
        }
        if let Some(path) = &self.state.install_path
            && path.is_dir()
        {
            tracing::debug!("Using cached install path: {}", path.display());
            return Ok(Some(path.clone()));
        }

        let Some(path) = self.resolver.resolve(INSTALL_PATH_VALUE, steam_key())? else {
            return self.missing(STEAM_NOT_INSTALLED);
        };
        let path = PathBuf::from(path);
        if !path.is_dir() {
            tracing::debug!("Steam install path does not exist: {}", path.display());
            return self.missing(STEAM_NOT_INSTALLED);
        }

        self.state.install_path = Some(path.clone());
        Ok(Some(path))
    }

    /// Returns every existing library directory, in library list order.
    ///
    /// Returns an empty list instead of [`LocateError::NotFound`] when errors
    /// are suppressed.
    ///
    /// # Errors
    ///
    /// - [`LocateError::NotFound`] if Steam or its library list is missing
    /// - [`LocateError::Unexpected`] if the library list cannot be read
    pub fn library_locations(&mut self) -> Result<&[PathBuf], LocateError> {
        if self.options.memory == MemoryMode::None {
            self.state.installed = None;
            self.state.install_path = None;
            self.state.libraries = None;
        }

        if self.state.libraries.is_none() {
            let Some(install) = self.install_location()? else {
                return Ok(&[]);
            };
            let libraries = self.read_libraries(&install)?;
            tracing::debug!("Found {} Steam libraries", libraries.len());
            self.state.libraries = Some(libraries);
        }

        Ok(self.state.libraries.as_deref().unwrap_or_default())
    }

    /// Rebuilds the game catalog from every library's app manifests.
    ///
    /// Does nothing when indexing is disabled. Catalog order is library
    /// order, then manifest file name order; duplicate ids are kept.
    ///
    /// # Errors
    ///
    /// [`LocateError::InvalidOperation`] when no library exists, unless
    /// errors are suppressed, in which case the catalog is left empty.
    /// Errors from [`library_locations`](Self::library_locations) pass through.
    pub fn index_games(&mut self) -> Result<(), LocateError> {
        if !self.options.index_library {
            tracing::debug!("Indexing disabled, skipping game scan");
            return Ok(());
        }

        self.state.catalog.clear();
        self.state.indexed = false;

        let libraries = self.library_locations()?.to_vec();
        if libraries.is_empty() {
            if self.options.suppress_errors {
                return Ok(());
            }
            return Err(LocateError::InvalidOperation(NO_LIBRARIES_TO_INDEX));
        }

        for dir in &libraries {
            self.state.catalog.extend(library::scan_library(dir));
        }
        self.state.indexed = self.options.memory == MemoryMode::Full;

        tracing::info!(
            "Indexed {} games across {} libraries",
            self.state.catalog.len(),
            libraries.len()
        );
        Ok(())
    }

    /// Returns every indexed game.
    ///
    /// # Errors
    ///
    /// [`LocateError::InvalidOperation`] when indexing is disabled; otherwise
    /// as [`index_games`](Self::index_games).
    pub fn all_games(&mut self) -> Result<&[AppRecord], LocateError> {
        if !self.options.index_library {
            return Err(LocateError::InvalidOperation(ALL_GAMES_NEEDS_INDEX));
        }
        self.ensure_indexed()?;
        Ok(&self.state.catalog)
    }

    /// Finds a game by its folder under `steamapps/common`.
    ///
    /// Indexed lookups return the first catalog entry whose location ends
    /// with `folder` (a plain string suffix). Unindexed lookups return the
    /// first library holding `steamapps/common/<folder>`, with the folder as
    /// the name and the placeholder id `"0"`, since the real id lives in a
    /// manifest that was not read.
    ///
    /// Returns [`AppRecord::default()`] instead of [`LocateError::NotFound`]
    /// when errors are suppressed.
    pub fn find_by_folder(&mut self, folder: &str) -> Result<AppRecord, LocateError> {
        let found = self.try_find_by_folder(folder)?;
        self.or_empty_record(found, GAME_NOT_FOUND)
    }

    /// Finds a game by its Steam app id.
    ///
    /// Indexed lookups compare catalog ids. Unindexed lookups read the app's
    /// uninstall entry (`InstallLocation`, `DisplayName`) through the resolver.
    ///
    /// Returns [`AppRecord::default()`] instead of [`LocateError::NotFound`]
    /// when errors are suppressed.
    pub fn find_by_id(&mut self, id: &str) -> Result<AppRecord, LocateError> {
        let message = if self.options.index_library {
            GAME_NOT_FOUND
        } else {
            GAME_NOT_IN_REGISTRY
        };
        let found = self.try_find_by_id(id)?;
        self.or_empty_record(found, message)
    }

    /// Finds a game by its display name (exact match).
    ///
    /// Returns [`AppRecord::default()`] instead of [`LocateError::NotFound`]
    /// when errors are suppressed.
    ///
    /// # Errors
    ///
    /// [`LocateError::InvalidOperation`] when indexing is disabled, whether
    /// or not errors are suppressed.
    pub fn find_by_name(&mut self, name: &str) -> Result<AppRecord, LocateError> {
        let found = self.try_find_by_name(name)?;
        self.or_empty_record(found, GAME_NOT_FOUND)
    }

    /// Like [`find_by_folder`](Self::find_by_folder), reporting a miss as `None`.
    pub fn try_find_by_folder(&mut self, folder: &str) -> Result<Option<AppRecord>, LocateError> {
        if self.options.index_library {
            self.find_indexed(|game| {
                game.location
                    .as_ref()
                    .is_some_and(|location| location.to_string_lossy().ends_with(folder))
            })
        } else {
            self.find_folder_on_disk(folder)
        }
    }

    /// Like [`find_by_id`](Self::find_by_id), reporting a miss as `None`.
    pub fn try_find_by_id(&mut self, id: &str) -> Result<Option<AppRecord>, LocateError> {
        if self.options.index_library {
            self.find_indexed(|game| game.id == id)
        } else {
            self.find_id_in_registry(id)
        }
    }

    /// Like [`find_by_name`](Self::find_by_name), reporting a miss as `None`.
    pub fn try_find_by_name(&mut self, name: &str) -> Result<Option<AppRecord>, LocateError> {
        if !self.options.index_library {
            return Err(LocateError::InvalidOperation(NAME_LOOKUP_NEEDS_INDEX));
        }
        self.find_indexed(|game| game.name.as_deref() == Some(name))
    }

    fn ensure_indexed(&mut self) -> Result<(), LocateError> {
        if self.state.indexed && self.options.memory == MemoryMode::Full {
            tracing::debug!("Using cached game catalog");
            return Ok(());
        }
        self.index_games()
    }

    fn find_indexed(
        &mut self,
        matches: impl Fn(&AppRecord) -> bool,
    ) -> Result<Option<AppRecord>, LocateError> {
        self.ensure_indexed()?;
        let found = self.state.catalog.iter().find(|game| matches(*game));
        Ok(found.cloned())
    }

    fn find_folder_on_disk(&mut self, folder: &str) -> Result<Option<AppRecord>, LocateError> {
        let suppress = self.options.suppress_errors;
        let libraries = self.library_locations()?;
        if libraries.is_empty() {
            if suppress {
                return Ok(None);
            }
            return Err(LocateError::InvalidOperation(NO_LIBRARIES_TO_SEARCH));
        }

        Ok(libraries
            .iter()
            .map(|dir| library::app_dir(dir, folder))
            .find(|dir| dir.is_dir())
            .map(|location| AppRecord {
                id: UNKNOWN_APP_ID.to_string(),
                name: Some(folder.to_string()),
                location: Some(location),
            }))
    }

    fn find_id_in_registry(&self, id: &str) -> Result<Option<AppRecord>, LocateError> {
        let key = uninstall_key(id);
        let Some(location) = self.resolver.resolve(INSTALL_LOCATION_VALUE, &key)? else {
            tracing::debug!("No uninstall entry for app {}", id);
            return Ok(None);
        };
        let name = self.resolver.resolve(DISPLAY_NAME_VALUE, &key)?;

        Ok(Some(AppRecord {
            id: id.to_string(),
            name,
            location: Some(PathBuf::from(location)),
        }))
    }

    fn missing<T>(&self, message: &str) -> Result<Option<T>, LocateError> {
        if self.options.suppress_errors {
            Ok(None)
        } else {
            Err(LocateError::NotFound(message.to_string()))
        }
    }

    fn or_empty_record(
        &self,
        found: Option<AppRecord>,
        message: &str,
    ) -> Result<AppRecord, LocateError> {
        match found {
            Some(game) => Ok(game),
            None => self.missing(message).map(Option::unwrap_or_default),
        }
    }

    fn read_libraries(&self, install: &Path) -> Result<Vec<PathBuf>, LocateError> {
        match library::read_library_folders(install) {
            Ok(libraries) => Ok(libraries),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let list = library::library_list_path(install);
                tracing::warn!("Steam library list missing: {}", list.display());
                self.missing(&format!("Steam library list not found: {}", list.display()))
                    .map(Option::unwrap_or_default)
            }
            Err(e) => Err(LocateError::Unexpected(e)),
        }
    }
}

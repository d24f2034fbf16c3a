//! Install path resolution
//!
//! The Steam client records where it lives in the Windows registry. This
//! module hides that behind [`InstallResolver`] so the rest of the crate can
//! be tested with an in-memory [`FixedResolver`] and run on hosts without a
//! registry.

#[cfg(not(target_os = "windows"))]
mod home;
#[cfg(target_os = "windows")]
mod registry;

use std::path::Path;

use hashbrown::HashMap;

use crate::error::ResolveError;

#[cfg(not(target_os = "windows"))]
pub use home::HomeDirResolver;
#[cfg(target_os = "windows")]
pub use registry::RegistryResolver;

/// Reads string values from a key/value store such as the Windows registry.
///
/// # Contract
///
/// - A missing key or value is `Ok(None)`, never an error.
/// - Access denied is [`ResolveError::PermissionDenied`].
/// - Anything else is [`ResolveError::Unexpected`] and is passed to the
///   caller unchanged.
pub trait InstallResolver: Send + Sync {
    /// Read `value_name` from the key at `key_path`.
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError>;
}

impl<R: InstallResolver + ?Sized> InstallResolver for Box<R> {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        (**self).resolve(value_name, key_path)
    }
}

impl<R: InstallResolver + ?Sized> InstallResolver for &R {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        (**self).resolve(value_name, key_path)
    }
}

/// In-memory resolver answering from a fixed table.
///
/// Used for configured install overrides and in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    values: HashMap<(String, String), String>,
}

impl FixedResolver {
    /// Create an empty resolver; every query answers `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that reports `install_dir` as the Steam install path.
    pub fn steam_install(install_dir: &Path) -> Self {
        Self::new().with_value(
            steamfinder_shared::steam_key(),
            steamfinder_shared::INSTALL_PATH_VALUE,
            install_dir.to_string_lossy(),
        )
    }

    /// Add a value, replacing any previous one for the same key and name.
    pub fn with_value(
        mut self,
        key_path: impl Into<String>,
        value_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.values
            .insert((key_path.into(), value_name.into()), value.into());
        self
    }
}

impl InstallResolver for FixedResolver {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        Ok(self
            .values
            .get(&(key_path.to_string(), value_name.to_string()))
            .cloned())
    }
}

/// Returns the resolver for the current platform.
///
/// Windows reads the registry. Other platforms check the directories the
/// Steam client installs to by default.
pub fn platform_resolver() -> Box<dyn InstallResolver> {
    #[cfg(target_os = "windows")]
    {
        Box::new(RegistryResolver)
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(HomeDirResolver::from_home())
    }
}

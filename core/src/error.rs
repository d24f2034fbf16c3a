//! Error taxonomy for install resolution and lookups

use std::io;

use thiserror::Error;

/// Failure reported by an [`InstallResolver`](crate::InstallResolver).
///
/// A missing key or value is not an error; resolvers return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The caller lacks the rights to read the key.
    #[error("access denied reading {key}")]
    PermissionDenied { key: String },

    /// Anything else the backing store reported.
    #[error("failed to read {key}: {source}")]
    Unexpected {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// Classify an I/O failure from the backing store.
    ///
    /// Returns `None` for "not found", which resolvers report as an absent value.
    pub fn from_io(key: &str, err: io::Error) -> Option<Self> {
        match err.kind() {
            io::ErrorKind::NotFound => None,
            io::ErrorKind::PermissionDenied => Some(Self::PermissionDenied {
                key: key.to_string(),
            }),
            _ => Some(Self::Unexpected {
                key: key.to_string(),
                source: err,
            }),
        }
    }
}

/// Failure returned by [`Locator`](crate::Locator) operations.
///
/// Only [`LocateError::NotFound`] is affected by
/// [`LocatorOptions::suppress_errors`](crate::LocatorOptions); every other
/// variant always reaches the caller.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The install, a library, or an app is absent.
    #[error("{0}")]
    NotFound(String),

    /// The resolver was denied access.
    #[error("access denied reading {key}")]
    PermissionDenied { key: String },

    /// The operation is not available under the current options.
    #[error("{0}")]
    InvalidOperation(&'static str),

    /// Unexpected I/O or resolver failure.
    #[error("unexpected failure: {0}")]
    Unexpected(#[source] io::Error),
}

impl From<ResolveError> for LocateError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::PermissionDenied { key } => Self::PermissionDenied { key },
            ResolveError::Unexpected { source, .. } => Self::Unexpected(source),
        }
    }
}

impl LocateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub(crate) const STEAM_NOT_INSTALLED: &str = "Steam is not installed.";
pub(crate) const GAME_NOT_FOUND: &str =
    "Game not found in Steam library. Please ensure the game is installed and try again.";
pub(crate) const GAME_NOT_IN_REGISTRY: &str = concat!(
    "Game not found in Steam Library. Please ensure the game is installed and try again. ",
    "Sometimes Steam does not correctly update the registry, use a different search or ",
    "enable indexing to resolve these cases."
);
pub(crate) const NO_LIBRARIES_TO_INDEX: &str = "Cannot index library with no libraries present.";
pub(crate) const NO_LIBRARIES_TO_SEARCH: &str = "Cannot search for games in no libraries.";
pub(crate) const NAME_LOOKUP_NEEDS_INDEX: &str = concat!(
    "Unable to locate by game name when indexing is disabled. ",
    "Either enable indexing, or search by folder name / Steam App ID."
);
pub(crate) const ALL_GAMES_NEEDS_INDEX: &str =
    "Unable to return all games when indexing is disabled. Enable indexing to use this function.";

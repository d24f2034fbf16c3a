//! Filesystem layout and registry locations of a Steam installation.

/// Directory under an install or library root holding manifests and games.
pub const STEAMAPPS_DIR: &str = "steamapps";

/// Directory under `steamapps` where app content is installed.
pub const COMMON_DIR: &str = "common";

/// Library list file, relative to `<install>/steamapps`.
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

/// File name prefix of a per-app manifest (`appmanifest_<id>.acf`).
pub const APP_MANIFEST_PREFIX: &str = "appmanifest_";

/// File extension of a per-app manifest.
pub const APP_MANIFEST_EXTENSION: &str = "acf";

/// Registry value holding the Steam install directory.
pub const INSTALL_PATH_VALUE: &str = "InstallPath";

/// Uninstall-entry value holding an app's install directory.
pub const INSTALL_LOCATION_VALUE: &str = "InstallLocation";

/// Uninstall-entry value holding an app's display name.
pub const DISPLAY_NAME_VALUE: &str = "DisplayName";

/// Steam key on 64-bit Windows (32-bit view).
pub const STEAM_KEY_64: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\Valve\Steam";

/// Steam key on 32-bit Windows.
pub const STEAM_KEY_32: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Valve\Steam";

/// Parent key of per-app uninstall entries.
pub const UNINSTALL_KEY: &str =
    r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall";

/// Returns the Steam registry key for the current host.
///
/// 64-bit hosts keep Steam under `Wow6432Node`. A 32-bit process running on
/// a 64-bit OS is detected through `PROCESSOR_ARCHITECTURE`.
pub fn steam_key() -> &'static str {
    let is_64_bit = cfg!(target_pointer_width = "64")
        || std::env::var("PROCESSOR_ARCHITECTURE").is_ok_and(|arch| arch == "AMD64");
    if is_64_bit {
        STEAM_KEY_64
    } else {
        STEAM_KEY_32
    }
}

/// Returns the uninstall key Steam writes for a single app.
pub fn uninstall_key(app_id: &str) -> String {
    format!(r"{}\Steam App {}", UNINSTALL_KEY, app_id)
}

/// Returns the manifest file name for an app id.
pub fn app_manifest_file_name(app_id: &str) -> String {
    format!("{}{}.{}", APP_MANIFEST_PREFIX, app_id, APP_MANIFEST_EXTENSION)
}

/// Extracts the app id from a manifest file name.
///
/// Returns `None` unless the name is `appmanifest_<id>.acf`.
pub fn app_id_from_manifest_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(APP_MANIFEST_PREFIX)?
        .strip_suffix(APP_MANIFEST_EXTENSION)?
        .strip_suffix('.')
}

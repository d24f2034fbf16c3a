//! Windows registry resolver

use winreg::RegKey;
use winreg::enums::*;

use super::InstallResolver;
use crate::error::ResolveError;

/// Reads values from the Windows registry.
///
/// Key paths carry their hive as the first component, e.g.
/// `HKEY_LOCAL_MACHINE\SOFTWARE\Valve\Steam`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryResolver;

fn split_hive(key_path: &str) -> Option<(RegKey, &str)> {
    let (hive, subkey) = key_path.split_once('\\').unwrap_or((key_path, ""));
    let hkey = match hive.to_ascii_uppercase().as_str() {
        "HKEY_LOCAL_MACHINE" | "HKLM" => HKEY_LOCAL_MACHINE,
        "HKEY_CURRENT_USER" | "HKCU" => HKEY_CURRENT_USER,
        "HKEY_CLASSES_ROOT" | "HKCR" => HKEY_CLASSES_ROOT,
        "HKEY_USERS" | "HKU" => HKEY_USERS,
        _ => return None,
    };
    Some((RegKey::predef(hkey), subkey))
}

impl InstallResolver for RegistryResolver {
    fn resolve(&self, value_name: &str, key_path: &str) -> Result<Option<String>, ResolveError> {
        let Some((hive, subkey)) = split_hive(key_path) else {
            tracing::warn!("Unknown registry hive in {}", key_path);
            return Ok(None);
        };

        let key = match hive.open_subkey(subkey) {
            Ok(key) => key,
            Err(e) => return ResolveError::from_io(key_path, e).map_or(Ok(None), Err),
        };

        match key.get_value::<String, _>(value_name) {
            Ok(value) => Ok(Some(value)),
            Err(e) => ResolveError::from_io(key_path, e).map_or(Ok(None), Err),
        }
    }
}

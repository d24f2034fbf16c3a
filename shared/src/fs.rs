//! Filesystem helpers shared by the locator and its tools.

use std::io;
use std::path::Path;

/// Maximum size of a library list or app manifest read into memory.
pub const MAX_MANIFEST_BYTES: u64 = 1024 * 1024; // 1 MiB

/// Read a text file into memory with a size cap.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_text_with_limit(path: &Path, max_bytes: u64) -> io::Result<String> {
    let len = std::fs::metadata(path)?.len();
    if len > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                len,
                max_bytes
            ),
        ));
    }
    let bytes = std::fs::read(path)?;
    tracing::trace!(path = %path.display(), len, "read manifest text");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

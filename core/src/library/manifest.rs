//! Line scanner for Steam's key-value manifest files
//!
//! Both `libraryfolders.vdf` and `appmanifest_*.acf` use the same text
//! layout:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"         "250900"
//!     "name"          "The Binding of Isaac: Rebirth"
//!     "installdir"    "The Binding of Isaac Rebirth"
//! }
//! ```
//!
//! Only `"<key>"  "<value>"` lines matter; braces and block names are skipped.
//! Scans move forward through the lines and never revisit a line.
//!
//! A line is recognized by substring containment of the quoted key, not by
//! comparing tokens. A value that is itself the quoted key name (an app named
//! `installdir`, say) will therefore match too. Manifests are assumed
//! well-formed. Escape sequences are not interpreted.

/// Returns the value on `line` if the line carries `"<field>"`.
///
/// The value is the second double-quoted token on the line. A line that
/// names the key but has no value token yields `None`.
pub fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let bytes = line.as_bytes();
    let found = line.match_indices(field).any(|(start, _)| {
        let end = start + field.len();
        start > 0 && bytes[start - 1] == b'"' && bytes.get(end) == Some(&b'"')
    });
    if !found {
        return None;
    }
    // ["<indent>", key, "<gap>", value, ...]
    line.split('"').nth(3)
}

/// Advances `lines` past the next line carrying `field` and returns its value.
///
/// Lines naming the field without a value are skipped. Running out of
/// lines yields `None`.
pub fn find_field<'a, I>(lines: &mut I, field: &str) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines.find_map(|line| field_value(line, field))
}

/// Scans forward until every field in `fields` has a value, or input ends.
///
/// A field seen again before the others are all found takes the later value.
/// Scanning stops at the first line where every field is known, leaving the
/// rest of `lines` unread.
pub fn find_fields<'a, I, const N: usize>(
    lines: &mut I,
    fields: [&str; N],
) -> [Option<&'a str>; N]
where
    I: Iterator<Item = &'a str>,
{
    let mut found = [None; N];
    for line in lines {
        for (slot, field) in found.iter_mut().zip(fields) {
            if let Some(value) = field_value(line, field) {
                *slot = Some(value);
            }
        }
        if found.iter().all(Option::is_some) {
            break;
        }
    }
    found
}

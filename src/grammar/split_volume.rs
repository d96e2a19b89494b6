//! Volume prefix detection for Windows paths.

use crate::types::Format;

/// True if the path starts with a drive letter such as `C:` or `a:`.
pub fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Length of a leading `\\host\share` prefix, if any.
///
/// `\\.\` device paths and `\\host\\` are rejected.
fn unc_volume_len(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 5
        || bytes[0] != b'\\'
        || bytes[1] != b'\\'
        || bytes[2] == b'\\'
        || bytes[2] == b'.'
    {
        return None;
    }
    let host_end = (3..bytes.len() - 1).find(|&n| bytes[n] == b'\\')?;
    let share_start = host_end + 1;
    if bytes[share_start] == b'\\' || bytes[share_start] == b'.' {
        return None;
    }
    let share_end = bytes[share_start..]
        .iter()
        .position(|&c| c == b'\\')
        .map_or(bytes.len(), |n| share_start + n);
    Some(share_end)
}

/// True if the path starts with a UNC `\\host\share` volume.
pub(crate) fn has_unc_prefix(path: &str) -> bool {
    unc_volume_len(path.as_bytes()).is_some()
}

impl Format {
    /// Split a path into its volume prefix and the remainder.
    ///
    /// Only `Windows` paths carry a volume. The remainder keeps its leading
    /// separator. Without a volume the whole path is returned as remainder.
    pub fn split_volume(self, path: &str) -> (&str, &str) {
        if self != Format::Windows {
            return ("", path);
        }
        if has_drive_prefix(path) {
            return path.split_at(2);
        }
        match unc_volume_len(path.as_bytes()) {
            Some(n) => path.split_at(n),
            None => ("", path),
        }
    }
}

//! Windows extended-length path handling.

use std::borrow::Cow;

/// Strip the Windows extended-length prefix `\\?\` so the volume rules apply.
///
/// `\\?\C:\x` becomes `C:\x` and `\\?\UNC\host\share\x` becomes `\\host\share\x`.
pub fn strip_extended_prefix(path: &str) -> Cow<'_, str> {
    let Some(rest) = path.strip_prefix(r"\\?\") else {
        return Cow::Borrowed(path);
    };
    match rest.get(..4) {
        Some(unc) if unc.eq_ignore_ascii_case(r"UNC\") => Cow::Owned(format!(r"\\{}", &rest[4..])),
        _ => Cow::Borrowed(rest),
    }
}

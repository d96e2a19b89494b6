//! Windows to Unix translation.

use crate::constants::{UNC_PATH_VAR, VOLUME_PATH_SUFFIX};
use crate::error::TranslateError;
use crate::grammar::has_drive_prefix;
use crate::translator::Translator;
use crate::types::{Format, Translation};

/// Append a Windows remainder to a Unix mount point. Drive-relative
/// remainders (`C:foo`) are anchored at the mount point.
fn join_mount(mount_point: &str, rest: &str) -> String {
    format!("{}/{}", mount_point, rest.replace('\\', "/"))
}

impl Translator {
    pub(super) fn windows_to_unix(&self, cleaned: &str) -> Result<Translation, TranslateError> {
        let (volume, rest) = Format::Windows.split_volume(cleaned);

        let unix = if volume.is_empty() {
            rest.replace('\\', "/")
        } else if has_drive_prefix(volume) {
            let letter = volume
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or_default();
            let mount_point =
                self.mounts()
                    .volume(letter)
                    .ok_or_else(|| TranslateError::UnmappedVolume {
                        volume: format!("{letter}:"),
                        variable: format!("{letter}{VOLUME_PATH_SUFFIX}"),
                    })?;
            join_mount(mount_point, rest)
        } else {
            let (entry, rest) = self.mounts().unc_for_windows(cleaned).ok_or_else(|| {
                TranslateError::UnmappedVolume {
                    volume: volume.to_string(),
                    variable: UNC_PATH_VAR.to_string(),
                }
            })?;
            join_mount(&entry.mount_point, rest)
        };

        let mut unix = Format::Unix.clean(&unix);
        if self.options().absolute && !unix.starts_with('/') {
            unix = self.resolve_or_keep(&unix);
        }
        Ok(Translation::new(unix))
    }
}

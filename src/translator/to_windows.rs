//! Unix to Windows translation.

use crate::error::TranslateError;
use crate::grammar::has_unc_prefix;
use crate::mounts::WindowsVolume;
use crate::translator::Translator;
use crate::types::{Format, RelativePaths, Translation};

/// Put a Unix remainder under a Windows volume or directory.
///
/// A UNC share root stays bare (`\\host\share`), matching `clean`.
fn join_volume(volume: &str, rest: &str) -> String {
    let rest = rest.trim_start_matches('/').replace('/', "\\");
    if rest.is_empty() && has_unc_prefix(volume) {
        return Format::Windows.clean(volume);
    }
    Format::Windows.clean(&format!("{volume}\\{rest}"))
}

impl Translator {
    pub(super) fn unix_to_windows(
        &self,
        cleaned: &str,
        depth: u8,
    ) -> Result<Translation, TranslateError> {
        if cleaned.starts_with('/') {
            self.absolute_to_windows(cleaned)
        } else {
            self.relative_to_windows(cleaned, depth)
        }
    }

    fn absolute_to_windows(&self, cleaned: &str) -> Result<Translation, TranslateError> {
        let mut resolved = self.resolve_or_keep(cleaned);
        if !resolved.starts_with('/') {
            resolved = cleaned.to_string();
        }

        match self.mounts().volume_for_unix(&resolved) {
            Some((WindowsVolume::Drive(letter), rest)) => {
                Ok(Translation::new(join_volume(&format!("{letter}:"), rest)))
            }
            Some((WindowsVolume::Unc(prefix), rest)) => {
                Ok(Translation::new(join_volume(prefix, rest)))
            }
            None => match self.mounts().rootfs.as_deref() {
                Some(rootfs) if self.options().allow_rootfs_fallback => {
                    log::debug!("No mount point for {}, using rootfs {}", resolved, rootfs);
                    Ok(Translation {
                        path: join_volume(rootfs, &resolved),
                        rootfs_fallback: true,
                    })
                }
                _ => Err(TranslateError::NoMountMatch(resolved)),
            },
        }
    }

    fn relative_to_windows(
        &self,
        cleaned: &str,
        depth: u8,
    ) -> Result<Translation, TranslateError> {
        let relative = || Translation::new(Format::Windows.clean(&cleaned.replace('/', "\\")));
        if self.options().relative == RelativePaths::Preserve {
            return Ok(relative());
        }

        let absolute = self.resolve_or_keep(cleaned);
        let translated = self.translate_at(Format::Unix, Format::Windows, &absolute, depth + 1)?;
        // A path inside the rootfs has no relative Windows form.
        if translated.rootfs_fallback || self.options().absolute {
            Ok(translated)
        } else {
            Ok(relative())
        }
    }
}

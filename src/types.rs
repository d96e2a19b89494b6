//! Type definitions shared by the grammar and the translator.

/// Addressing convention of a path string.
///
/// - `Windows`: `\` separator, optional drive (`C:`) or UNC (`\\host\share`) volume prefix.
/// - `Unix`: `/` separator, no volume prefix. A leading `/` anchors the path at the root.
/// - `Any`: a plain file name with no separator, valid verbatim in both conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Windows,
    Unix,
    Any,
}

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub path: String,
    /// True when the path only exists in the WSL virtual rootfs and was
    /// prefixed with `WSL_ROOTFS_PATH`. Such paths are read-only from Windows.
    pub rootfs_fallback: bool,
}

impl Translation {
    pub fn new(path: String) -> Self {
        Self {
            path,
            rootfs_fallback: false,
        }
    }
}

/// How Unix relative paths are handled when translating to Windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelativePaths {
    /// Resolve against the current directory and translate the absolute form.
    #[default]
    Resolve,
    /// Keep relative paths relative, only swapping separators.
    Preserve,
}

/// Options for a [`crate::Translator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Fall back to `WSL_ROOTFS_PATH` for Unix paths outside every mount point.
    pub allow_rootfs_fallback: bool,
    /// Prefer absolute output where a relative path could be resolved.
    pub absolute: bool,
    pub relative: RelativePaths,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            allow_rootfs_fallback: true,
            absolute: false,
            relative: RelativePaths::Resolve,
        }
    }
}

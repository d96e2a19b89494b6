//! Errors returned by path translation.

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A drive or UNC volume has no mount point in the mount table.
    #[error("volume {volume} is not mapped (set {variable})")]
    UnmappedVolume { volume: String, variable: String },
    /// An absolute Unix path lies outside every mount point and rootfs fallback is off.
    #[error("no mount point found for path: {0}")]
    NoMountMatch(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("failed to read input: {0}")]
    InputRead(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateErrorKind {
    UnmappedVolume,
    NoMountMatch,
    InvalidPath,
    InputRead,
}

impl TranslateError {
    pub fn kind(&self) -> TranslateErrorKind {
        match self {
            TranslateError::UnmappedVolume { .. } => TranslateErrorKind::UnmappedVolume,
            TranslateError::NoMountMatch(_) => TranslateErrorKind::NoMountMatch,
            TranslateError::InvalidPath(_) => TranslateErrorKind::InvalidPath,
            TranslateError::InputRead(_) => TranslateErrorKind::InputRead,
        }
    }
}

//! Environment variable names read when building a mount table.

/// Suffix of per-drive mount variables, e.g. `C_VOLUME_PATH=/mnt/c`.
pub const VOLUME_PATH_SUFFIX: &str = "_VOLUME_PATH";

/// Semicolon-separated `\\host\share=/mount/point` pairs.
pub const UNC_PATH_VAR: &str = "WSL_UNC_PATH";

/// Windows path of the distribution rootfs, used for paths that live only in WSL.
pub const ROOTFS_PATH_VAR: &str = "WSL_ROOTFS_PATH";

/// Maximum number of nested translations performed for one input path.
pub const MAX_TRANSLATE_DEPTH: u8 = 1;

/// Default number of paths translated concurrently by the CLI.
pub const DEFAULT_CONCURRENCY: usize = 16;

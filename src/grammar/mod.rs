//! Format-aware lexical operations on path strings. Nothing here reads the
//! environment or the filesystem.

mod clean;
mod elements;
mod separator;
mod split_volume;

pub use split_volume::has_drive_prefix;
pub(crate) use split_volume::has_unc_prefix;

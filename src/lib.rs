//! WSL path translation - convert file paths between Windows and Unix formats.

pub mod constants;
pub mod error;
pub mod grammar;
pub mod mounts;
pub mod resolver;
pub mod translator;
pub mod types;
pub mod utils;

pub use error::{TranslateError, TranslateErrorKind};
pub use mounts::{load_mount_table, save_mount_table, MountTable, UncMount};
pub use resolver::{FsResolver, LexicalResolver, Resolve};
pub use translator::Translator;
pub use types::{Format, RelativePaths, TranslateOptions, Translation};

//! Cross-format path translation.

mod to_unix;
mod to_windows;

use std::borrow::Cow;

use crate::constants::MAX_TRANSLATE_DEPTH;
use crate::error::TranslateError;
use crate::mounts::MountTable;
use crate::resolver::{LexicalResolver, Resolve};
use crate::types::{Format, TranslateOptions, Translation};
use crate::utils::strip_extended_prefix;

/// Translates paths between formats using an immutable [`MountTable`].
///
/// A translator holds no mutable state, so one instance can be shared
/// across threads and tasks.
pub struct Translator {
    mounts: MountTable,
    options: TranslateOptions,
    resolver: Box<dyn Resolve>,
}

impl Translator {
    /// Create a translator that never touches the filesystem.
    pub fn new(mounts: MountTable, options: TranslateOptions) -> Self {
        Self {
            mounts,
            options,
            resolver: Box::new(LexicalResolver),
        }
    }

    pub fn with_resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn mounts(&self) -> &MountTable {
        &self.mounts
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Translate `path`, read as `source`, into `target` format.
    pub fn translate(
        &self,
        source: Format,
        target: Format,
        path: &str,
    ) -> Result<Translation, TranslateError> {
        self.translate_at(source, target, path, 0)
    }

    /// Detect the format of `path` and translate it to the other one.
    /// Plain file names come back cleaned.
    pub fn translate_auto(&self, path: &str) -> Result<Translation, TranslateError> {
        let source = Format::identify(path);
        self.translate(source, source.opposite(), path)
    }

    fn translate_at(
        &self,
        source: Format,
        target: Format,
        path: &str,
        depth: u8,
    ) -> Result<Translation, TranslateError> {
        let path = match source {
            Format::Windows => strip_extended_prefix(path),
            _ => Cow::Borrowed(path),
        };
        let cleaned = source.clean(&path);
        if depth > MAX_TRANSLATE_DEPTH {
            return Err(TranslateError::InvalidPath(cleaned));
        }
        log::debug!("Translating {:?} path {} to {:?}", source, cleaned, target);

        match (source, target) {
            (Format::Windows, Format::Unix) => self.windows_to_unix(&cleaned),
            (Format::Unix, Format::Windows) => self.unix_to_windows(&cleaned, depth),
            _ => Ok(Translation::new(cleaned)),
        }
    }

    /// Resolve through the injected resolver, keeping `path` on failure.
    fn resolve_or_keep(&self, path: &str) -> String {
        match self.resolver.resolve(path) {
            Ok(resolved) => Format::Unix.clean(&resolved),
            Err(e) => {
                log::debug!("Could not resolve {}: {}", path, e);
                path.to_string()
            }
        }
    }
}

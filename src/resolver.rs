//! Absolute-path resolution for Unix paths.
//!
//! The translator never touches the filesystem itself; it asks a [`Resolve`]
//! implementation to turn a path into an absolute, symlink-free one.

use std::io;
use std::path::{Path, PathBuf};

pub trait Resolve: Send + Sync {
    /// Resolve a Unix path. Errors are not fatal; the caller keeps the
    /// unresolved path.
    fn resolve(&self, path: &str) -> io::Result<String>;
}

/// Returns paths unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalResolver;

impl Resolve for LexicalResolver {
    fn resolve(&self, path: &str) -> io::Result<String> {
        Ok(path.to_string())
    }
}

/// Follows symlinks for the longest existing leading part of a path and
/// appends the rest verbatim. Relative paths are anchored at the current
/// directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver;

impl Resolve for FsResolver {
    fn resolve(&self, path: &str) -> io::Result<String> {
        let base = if path.starts_with('/') {
            PathBuf::from("/")
        } else {
            std::env::current_dir()?
        };
        let mut resolved = std::fs::canonicalize(&base)?;
        let mut parts = path.split('/').filter(|p| !p.is_empty()).peekable();

        while let Some(part) = parts.peek() {
            match std::fs::canonicalize(resolved.join(part)) {
                Ok(next) => {
                    resolved = next;
                    parts.next();
                }
                Err(_) => break,
            }
        }
        for part in parts {
            resolved.push(part);
        }
        path_to_string(&resolved)
    }
}

fn path_to_string(path: &Path) -> io::Result<String> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("path is not valid UTF-8: {}", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_resolver_is_identity() {
        assert_eq!(LexicalResolver.resolve("a/b").unwrap(), "a/b");
    }

    #[test]
    fn keeps_missing_tail() {
        let dir = tempfile::tempdir().unwrap();
        let root = std::fs::canonicalize(dir.path()).unwrap();
        let input = format!("{}/missing/file.txt", dir.path().display());
        let expected = format!("{}/missing/file.txt", root.display());
        assert_eq!(FsResolver.resolve(&input).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let root = std::fs::canonicalize(dir.path()).unwrap();
        std::fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let input = format!("{}/link/new", root.display());
        let expected = format!("{}/real/new", root.display());
        assert_eq!(FsResolver.resolve(&input).unwrap(), expected);
    }
}

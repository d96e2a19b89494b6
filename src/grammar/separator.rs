//! Separator rules and format detection.

use crate::grammar::has_drive_prefix;
use crate::types::Format;

impl Format {
    /// Directory separator written when joining elements.
    pub fn separator(self) -> char {
        match self {
            Format::Windows => '\\',
            Format::Unix | Format::Any => '/',
        }
    }

    pub fn is_separator(self, c: char) -> bool {
        match self {
            Format::Windows => c == '\\',
            Format::Unix => c == '/',
            Format::Any => c == '/' || c == '\\',
        }
    }

    /// Detect the format of a path from its first separator.
    ///
    /// A path without separators is `Windows` when it carries a drive prefix
    /// (`D:foo.dat` is relative to the current directory of drive `D:`),
    /// otherwise `Any`.
    pub fn identify(path: &str) -> Format {
        for c in path.chars() {
            match c {
                '\\' => return Format::Windows,
                '/' => return Format::Unix,
                _ => {}
            }
        }
        if has_drive_prefix(path) {
            Format::Windows
        } else {
            Format::Any
        }
    }

    /// The opposite convention, used when no target format is forced.
    pub fn opposite(self) -> Format {
        match self {
            Format::Windows => Format::Unix,
            Format::Unix => Format::Windows,
            Format::Any => Format::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_per_format() {
        assert_eq!(Format::Windows.separator(), '\\');
        assert_eq!(Format::Unix.separator(), '/');
        assert_eq!(Format::Any.separator(), '/');
    }

    #[test]
    fn any_accepts_both_separators() {
        assert!(Format::Any.is_separator('/'));
        assert!(Format::Any.is_separator('\\'));
        assert!(!Format::Unix.is_separator('\\'));
        assert!(!Format::Windows.is_separator('/'));
    }

    #[test]
    fn identifies_by_first_separator() {
        assert_eq!(Format::identify(r"C:\Windows"), Format::Windows);
        assert_eq!(Format::identify("/etc/hosts"), Format::Unix);
        assert_eq!(Format::identify(r"dir/with\mixed"), Format::Unix);
        assert_eq!(Format::identify(r"dir\with/mixed"), Format::Windows);
    }

    #[test]
    fn drive_relative_name_is_windows() {
        assert_eq!(Format::identify("D:foo.dat"), Format::Windows);
    }

    #[test]
    fn bare_file_name_is_any() {
        assert_eq!(Format::identify("foo.txt"), Format::Any);
        assert_eq!(Format::identify(""), Format::Any);
        assert_eq!(Format::identify("1:foo"), Format::Any);
    }
}

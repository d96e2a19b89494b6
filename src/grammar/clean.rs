//! Lexical path cleaning.

use crate::grammar::split_volume::has_unc_prefix;
use crate::types::Format;

impl Format {
    /// Return the shortest lexically equivalent path.
    ///
    /// Works like `filepath.Clean` for an arbitrary separator:
    ///
    /// 1. Runs of separators collapse to one.
    /// 2. `.` elements are dropped.
    /// 3. A `..` removes the non-`..` element before it.
    /// 4. A `..` directly after the root is dropped (`/..` is `/`).
    ///
    /// The volume prefix is kept as is. The result ends in a separator only
    /// for a root such as `/` or `C:\`, and an empty result becomes `.`.
    pub fn clean(self, path: &str) -> String {
        let (volume, rest) = self.split_volume(path);
        if rest.is_empty() {
            // UNC volumes are always absolute.
            if has_unc_prefix(volume) {
                return volume.to_string();
            }
            return format!("{volume}.");
        }

        // A single pass over a stack reaches the same fixed point as
        // repeatedly removing `x/..` pairs.
        let mut kept: Vec<&str> = Vec::new();
        for element in self.elements(rest) {
            match element {
                "." => {}
                ".." => match kept.last() {
                    Some(&"") => {}
                    Some(&prev) if prev != ".." => {
                        kept.pop();
                    }
                    _ => kept.push(".."),
                },
                _ => kept.push(element),
            }
        }

        let sep = self.separator().to_string();
        match kept.as_slice() {
            [] => format!("{volume}."),
            [""] => format!("{volume}{sep}"),
            _ => format!("{volume}{}", kept.join(sep.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discards_parent_above_root() {
        assert_eq!(Format::Unix.clean("/a/../../b"), "/b");
        assert_eq!(Format::Unix.clean("/.."), "/");
        assert_eq!(Format::Windows.clean(r"C:\..\x"), r"C:\x");
    }

    #[test]
    fn empty_and_volume_only() {
        assert_eq!(Format::Unix.clean(""), ".");
        assert_eq!(Format::Windows.clean("C:"), "C:.");
        assert_eq!(Format::Windows.clean("C:\\"), "C:\\");
        assert_eq!(Format::Windows.clean(r"\\host\share"), r"\\host\share");
        assert_eq!(Format::Windows.clean(r"\\host\share\"), r"\\host\share\");
    }

    #[test]
    fn collapses_separators_and_dots() {
        assert_eq!(Format::Unix.clean("//usr/./local//bin/"), "/usr/local/bin");
        assert_eq!(Format::Windows.clean(r"C:\\Users\.\me\\"), r"C:\Users\me");
        assert_eq!(Format::Unix.clean("./"), ".");
    }

    #[test]
    fn relative_parents_are_kept() {
        assert_eq!(Format::Unix.clean("../../a"), "../../a");
        assert_eq!(Format::Unix.clean("a/../../b"), "../b");
        assert_eq!(Format::Unix.clean("a/b/c/../../.."), ".");
        assert_eq!(Format::Windows.clean(r"C:..\foo"), r"C:..\foo");
    }

    #[test]
    fn bare_file_name_is_unchanged() {
        assert_eq!(Format::Any.clean("foo.txt"), "foo.txt");
    }

    #[test]
    fn clean_is_idempotent() {
        let cases = [
            (Format::Unix, "/a/../../b"),
            (Format::Unix, "a//b/./../c/"),
            (Format::Unix, ""),
            (Format::Unix, "../x/.."),
            (Format::Windows, "C:"),
            (Format::Windows, r"C:\\x\..\y"),
            (Format::Windows, r"\\host\share"),
            (Format::Windows, r"\\host\share\a\..\.."),
            (Format::Windows, r"\\.\pipe\name"),
            (Format::Windows, r"x\..\C:y"),
            (Format::Any, r"a\b/../c"),
            (Format::Any, "foo.txt"),
        ];
        for (format, path) in cases {
            let once = format.clean(path);
            assert_eq!(format.clean(&once), once, "not idempotent for {:?} {}", format, path);
        }
    }
}

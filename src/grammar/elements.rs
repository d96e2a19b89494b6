//! Element tokenization.

use crate::types::Format;

impl Format {
    /// Split a path on this format's separator.
    ///
    /// Runs of separators never produce empty elements, except for a single
    /// leading `""` which marks a rooted path.
    pub fn elements(self, path: &str) -> Vec<&str> {
        if path.is_empty() {
            return Vec::new();
        }
        let mut parts = path.split(|c| self.is_separator(c));
        let mut elements: Vec<&str> = parts.next().into_iter().collect();
        elements.extend(parts.filter(|p| !p.is_empty()));
        elements
    }
}

//! Id-short path tracking for error attribution.

use std::fmt;

/// Dot-joined chain of idShorts from the traversal root to the current
/// element.
///
/// The path exists purely for diagnostics; the codec never resolves elements
/// through it. It is an append-only accumulator passed by value down the
/// recursion, so every error carries the exact location at the point of
/// failure and no state leaks between independent codec calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdShortPath(String);

impl IdShortPath {
    /// Creates a path rooted at the given idShort.
    pub fn root(id_short: &str) -> Self {
        IdShortPath(id_short.to_string())
    }

    /// Returns the path extended by one named segment.
    pub fn child(&self, id_short: &str) -> Self {
        if self.0.is_empty() {
            IdShortPath(id_short.to_string())
        } else {
            IdShortPath(format!("{}.{}", self.0, id_short))
        }
    }

    /// Returns the path extended by a positional segment.
    ///
    /// Used for positional-list members without an idShort.
    pub fn index(&self, index: usize) -> Self {
        self.child(&index.to_string())
    }

    /// Returns the rendered dot-separated path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdShortPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_joins_with_dot() {
        let path = IdShortPath::root("Measurements").child("Temp");
        assert_eq!(path.as_str(), "Measurements.Temp");
    }

    #[test]
    fn test_child_of_empty_has_no_leading_dot() {
        let path = IdShortPath::default().child("Temp");
        assert_eq!(path.as_str(), "Temp");
    }

    #[test]
    fn test_index_segment() {
        let path = IdShortPath::root("Items").index(2);
        assert_eq!(path.as_str(), "Items.2");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = IdShortPath::root("A");
        let _ = parent.child("B");
        assert_eq!(parent.as_str(), "A");
    }
}

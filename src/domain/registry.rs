//! Bookkeeping of filenames opened during a scope.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Set of filenames observed as opened.
///
/// Names, not handles: opening the same path twice records it once.
/// Names compare byte for byte, so `a.txt/` is not `a.txt`. Iteration is in
/// byte order, which keeps error reports stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenRegistry {
    names: BTreeSet<OsString>,
}

impl OpenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &Path) {
        self.names.insert(name.as_os_str().to_os_string());
    }

    /// Remove `name`, reporting whether it had been recorded.
    pub fn take(&mut self, name: &Path) -> bool {
        self.names.remove(name.as_os_str())
    }

    pub fn contains(&self, name: &Path) -> bool {
        self.names.contains(name.as_os_str())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &Path> {
        self.names.iter().map(Path::new)
    }

    pub fn into_names(self) -> Vec<PathBuf> {
        self.names.into_iter().map(PathBuf::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_name_once() {
        let mut registry = OpenRegistry::new();
        registry.record(Path::new("a.txt"));
        registry.record(Path::new("a.txt"));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(Path::new("a.txt")));
    }

    #[test]
    fn take_reports_presence() {
        let mut registry = OpenRegistry::new();
        registry.record(Path::new("a.txt"));
        assert!(registry.take(Path::new("a.txt")));
        assert!(!registry.take(Path::new("a.txt")));
        assert!(registry.is_empty());
    }

    #[test]
    fn trailing_separator_is_a_different_name() {
        let mut registry = OpenRegistry::new();
        registry.record(Path::new("a.txt/"));
        assert!(!registry.contains(Path::new("a.txt")));
        assert!(!registry.take(Path::new("a.txt")));
        assert!(registry.take(Path::new("a.txt/")));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = OpenRegistry::new();
        registry.record(Path::new("c.txt"));
        registry.record(Path::new("a.txt"));
        registry.record(Path::new("b.txt"));
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec![Path::new("a.txt"), Path::new("b.txt"), Path::new("c.txt")]);
    }
}

//! Ordered search-location file lookup

use std::path::{Path, PathBuf};

/// Locates named files by searching a configured list of directories.
///
/// Locations are searched most-recently-pushed first, so a deployment
/// can shadow the defaults by pushing its own directory last. Within a
/// location, a category subdirectory (e.g. `etc/`) is tried before the
/// location root.
#[derive(Debug, Clone)]
pub struct FileFinder {
    locations: Vec<PathBuf>,
}

impl FileFinder {
    /// A finder with the conventional default location, the current
    /// working directory.
    pub fn new() -> Self {
        let mut finder = Self::empty();
        finder.push_location(".");
        finder
    }

    /// A finder with no search locations at all.
    pub fn empty() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    /// Append a search location. Later locations take precedence.
    pub fn push_location(&mut self, location: impl Into<PathBuf>) {
        self.locations.push(location.into());
    }

    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Search for `filename`, trying `<location>/<category>/<filename>`
    /// and then `<location>/<filename>` in each location.
    ///
    /// Returns the first path that exists as a regular file.
    pub fn find(&self, category: &str, filename: &str) -> Option<PathBuf> {
        for location in self.locations.iter().rev() {
            let categorized = location.join(category).join(filename);
            if is_file(&categorized) {
                return Some(categorized);
            }
            let flat = location.join(filename);
            if is_file(&flat) {
                return Some(flat);
            }
        }
        None
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_file_in_category_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let etc = dir.path().join("etc");
        fs::create_dir(&etc).unwrap();
        fs::write(etc.join("doc.xml"), b"<x/>").unwrap();

        let mut finder = FileFinder::empty();
        finder.push_location(dir.path());
        assert_eq!(finder.find("etc", "doc.xml"), Some(etc.join("doc.xml")));
    }

    #[test]
    fn test_category_subdirectory_takes_precedence_over_root() {
        let dir = tempfile::tempdir().unwrap();
        let etc = dir.path().join("etc");
        fs::create_dir(&etc).unwrap();
        fs::write(etc.join("doc.xml"), b"categorized").unwrap();
        fs::write(dir.path().join("doc.xml"), b"flat").unwrap();

        let mut finder = FileFinder::empty();
        finder.push_location(dir.path());
        assert_eq!(finder.find("etc", "doc.xml"), Some(etc.join("doc.xml")));
    }

    #[test]
    fn test_later_location_shadows_earlier() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("doc.xml"), b"first").unwrap();
        fs::write(second.path().join("doc.xml"), b"second").unwrap();

        let mut finder = FileFinder::empty();
        finder.push_location(first.path());
        finder.push_location(second.path());
        assert_eq!(
            finder.find("etc", "doc.xml"),
            Some(second.path().join("doc.xml"))
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut finder = FileFinder::empty();
        finder.push_location(dir.path());
        assert_eq!(finder.find("etc", "absent.xml"), None);
    }
}

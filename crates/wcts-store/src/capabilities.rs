//! Capabilities document retrieval

use crate::error::StoreError;
use crate::finder::FileFinder;
use std::fs;

/// Fixed name of the served capabilities document.
pub const CAPABILITIES_DOCUMENT: &str = "wcts_capabilities.xml.0.0.3";

/// Conventional lookup category for service configuration files.
const CAPABILITIES_CATEGORY: &str = "etc";

/// Locates and reads the static capabilities document.
///
/// The document is served verbatim; the store never parses or rewrites
/// it.
#[derive(Debug, Clone)]
pub struct CapabilitiesStore {
    finder: FileFinder,
}

impl CapabilitiesStore {
    pub fn new(finder: FileFinder) -> Self {
        Self { finder }
    }

    /// Read the capabilities document.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no search location holds the
    /// document, [`StoreError::Read`] when it exists but cannot be read.
    pub fn load(&self) -> Result<Vec<u8>, StoreError> {
        let path = self
            .finder
            .find(CAPABILITIES_CATEGORY, CAPABILITIES_DOCUMENT)
            .ok_or_else(|| StoreError::NotFound(CAPABILITIES_DOCUMENT.to_string()))?;
        fs::read(&path).map_err(|source| StoreError::Read { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_returns_document_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let etc = dir.path().join("etc");
        fs::create_dir(&etc).unwrap();
        let body = b"<WCTS_Capabilities version=\"0.0.3\"/>\n";
        fs::write(etc.join(CAPABILITIES_DOCUMENT), body).unwrap();

        let mut finder = FileFinder::empty();
        finder.push_location(dir.path());
        let store = CapabilitiesStore::new(finder);

        assert_eq!(store.load().unwrap(), body.to_vec());
    }

    #[test]
    fn test_load_without_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut finder = FileFinder::empty();
        finder.push_location(dir.path());
        let store = CapabilitiesStore::new(finder);

        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
    }
}

//! CRS identifier decoding
//!
//! A request describes a coordinate reference system as a nested
//! identifier: `Identifier.codeSpace` naming the registry and
//! `Identifier.code` carrying the numeric code. Decoding is strict:
//! only the EPSG codespace is accepted and the code must be a nonzero
//! integer; nothing is ever defaulted silently.

use crate::error::WctsError;
use wcts_georef::{ResolvedCrs, SpatialReferenceProvider};
use wcts_xml::Element;

/// A validated EPSG identifier extracted from a
/// `CoordinateReferenceSystem` subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrsId {
    code: u32,
}

impl CrsId {
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Decode the identifier fields of a CRS subtree.
    ///
    /// Checks run in order: the codespace must equal "EPSG" ignoring
    /// case, then the code must parse to a nonzero integer. Absent
    /// fields fail exactly like invalid ones.
    pub fn decode(crs: &Element) -> Result<Self, WctsError> {
        let codespace = crs.value("Identifier.codeSpace").unwrap_or("");
        if !codespace.eq_ignore_ascii_case("EPSG") {
            return Err(WctsError::NonEpsgCodeSpace);
        }

        let code = crs
            .value("Identifier.code")
            .unwrap_or("")
            .trim()
            .parse::<u32>()
            .unwrap_or(0);
        if code == 0 {
            return Err(WctsError::InvalidCode);
        }

        Ok(Self { code })
    }
}

/// Decode a CRS subtree and resolve it through the backend.
///
/// A resolution failure surfaces the backend's own diagnostic when it
/// produced one, and otherwise a fixed fallback naming the code.
pub fn resolve(
    provider: &dyn SpatialReferenceProvider,
    crs: &Element,
) -> Result<ResolvedCrs, WctsError> {
    let id = CrsId::decode(crs)?;
    provider.resolve("EPSG", id.code()).map_err(|error| {
        let message = match error.diagnostic() {
            Some(diagnostic) => diagnostic.to_string(),
            None => format!(
                "importFromEPSG({}) failed. Is this a defined EPSG code?",
                id.code()
            ),
        };
        WctsError::Resolution(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcts_georef::{CrsKind, EpsgRegistry, ResolveError};

    fn crs_element(codespace: Option<&str>, code: Option<&str>) -> Element {
        let mut identifier = Element::new("Identifier");
        if let Some(codespace) = codespace {
            identifier = identifier.with_child(Element::new("codeSpace").with_text(codespace));
        }
        if let Some(code) = code {
            identifier = identifier.with_child(Element::new("code").with_text(code));
        }
        Element::new("CoordinateReferenceSystem").with_child(identifier)
    }

    #[test]
    fn test_decode_accepts_epsg_any_case() {
        let id = CrsId::decode(&crs_element(Some("EPSG"), Some("4326"))).unwrap();
        assert_eq!(id.code(), 4326);

        let id = CrsId::decode(&crs_element(Some("epsg"), Some("4326"))).unwrap();
        assert_eq!(id.code(), 4326);
    }

    #[test]
    fn test_decode_rejects_foreign_codespace() {
        assert!(matches!(
            CrsId::decode(&crs_element(Some("OGC"), Some("4326"))),
            Err(WctsError::NonEpsgCodeSpace)
        ));
    }

    #[test]
    fn test_decode_rejects_missing_codespace() {
        assert!(matches!(
            CrsId::decode(&crs_element(None, Some("4326"))),
            Err(WctsError::NonEpsgCodeSpace)
        ));
    }

    #[test]
    fn test_decode_rejects_zero_missing_and_non_numeric_codes() {
        for code in [Some("0"), Some("abc"), None] {
            assert!(matches!(
                CrsId::decode(&crs_element(Some("EPSG"), code)),
                Err(WctsError::InvalidCode)
            ));
        }
    }

    #[test]
    fn test_codespace_is_checked_before_code() {
        // Both fields invalid: the codespace failure wins.
        assert!(matches!(
            CrsId::decode(&crs_element(Some("OGC"), Some("0"))),
            Err(WctsError::NonEpsgCodeSpace)
        ));
    }

    #[test]
    fn test_resolve_known_code() {
        let registry = EpsgRegistry::bundled();
        let crs = resolve(&registry, &crs_element(Some("EPSG"), Some("4326"))).unwrap();
        assert_eq!(crs.code(), 4326);
    }

    #[test]
    fn test_resolve_unknown_code_uses_fallback_message() {
        let registry = EpsgRegistry::bundled();
        let err = resolve(&registry, &crs_element(Some("EPSG"), Some("999999"))).unwrap_err();
        match err {
            WctsError::Resolution(message) => assert_eq!(
                message,
                "importFromEPSG(999999) failed. Is this a defined EPSG code?"
            ),
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_surfaces_backend_diagnostic() {
        struct Failing;
        impl SpatialReferenceProvider for Failing {
            fn resolve(&self, _: &str, _: u32) -> Result<ResolvedCrs, ResolveError> {
                Err(ResolveError::Backend("registry offline".to_string()))
            }
            fn can_transform(&self, _: &ResolvedCrs, _: &ResolvedCrs) -> bool {
                false
            }
        }

        let err = resolve(&Failing, &crs_element(Some("EPSG"), Some("4326"))).unwrap_err();
        match err {
            WctsError::Resolution(message) => assert_eq!(message, "registry offline"),
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolved_handle_carries_registry_entry() {
        let mut registry = EpsgRegistry::empty();
        registry.insert(4326, CrsKind::Geographic, "WGS 84");
        let crs = resolve(&registry, &crs_element(Some("EPSG"), Some("4326"))).unwrap();
        assert_eq!(crs.name(), "WGS 84");
    }
}

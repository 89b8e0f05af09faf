//! Table-backed EPSG registry
//!
//! A small, self-contained [`SpatialReferenceProvider`] over a bundled
//! subset of the EPSG geographic and projected code lists. Suitable for
//! serving the dispatcher without linking a full geodetic library;
//! deployments with a real transformation engine implement the provider
//! trait against that engine instead.

use crate::error::ResolveError;
use crate::spatial::{CrsKind, ResolvedCrs, SpatialReferenceProvider};
use std::collections::HashMap;

/// Frequently requested entries from the EPSG geographic (GCS) and
/// projected (PCS) tables.
const BUNDLED: &[(u32, CrsKind, &str)] = &[
    (4258, CrsKind::Geographic, "ETRS89"),
    (4267, CrsKind::Geographic, "NAD27"),
    (4269, CrsKind::Geographic, "NAD83"),
    (4277, CrsKind::Geographic, "OSGB 1936"),
    (4283, CrsKind::Geographic, "GDA94"),
    (4301, CrsKind::Geographic, "Tokyo"),
    (4312, CrsKind::Geographic, "MGI"),
    (4322, CrsKind::Geographic, "WGS 72"),
    (4326, CrsKind::Geographic, "WGS 84"),
    (2154, CrsKind::Projected, "RGF93 / Lambert-93"),
    (21781, CrsKind::Projected, "CH1903 / LV03"),
    (25832, CrsKind::Projected, "ETRS89 / UTM zone 32N"),
    (25833, CrsKind::Projected, "ETRS89 / UTM zone 33N"),
    (26910, CrsKind::Projected, "NAD83 / UTM zone 10N"),
    (26917, CrsKind::Projected, "NAD83 / UTM zone 17N"),
    (27700, CrsKind::Projected, "OSGB 1936 / British National Grid"),
    (28992, CrsKind::Projected, "Amersfoort / RD New"),
    (31370, CrsKind::Projected, "Belge 1972 / Belgian Lambert 72"),
    (32610, CrsKind::Projected, "WGS 84 / UTM zone 10N"),
    (32617, CrsKind::Projected, "WGS 84 / UTM zone 17N"),
    (32632, CrsKind::Projected, "WGS 84 / UTM zone 32N"),
    (32633, CrsKind::Projected, "WGS 84 / UTM zone 33N"),
];

#[derive(Debug, Clone)]
struct Entry {
    kind: CrsKind,
    name: String,
}

/// In-memory EPSG code table implementing [`SpatialReferenceProvider`].
#[derive(Debug, Clone, Default)]
pub struct EpsgRegistry {
    entries: HashMap<u32, Entry>,
}

impl EpsgRegistry {
    /// An empty registry. Resolves nothing until entries are inserted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry preloaded with the bundled EPSG subset.
    pub fn bundled() -> Self {
        let mut registry = Self::empty();
        for &(code, kind, name) in BUNDLED {
            registry.insert(code, kind, name);
        }
        registry
    }

    /// Insert or replace a code definition.
    pub fn insert(&mut self, code: u32, kind: CrsKind, name: impl Into<String>) {
        self.entries.insert(
            code,
            Entry {
                kind,
                name: name.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpatialReferenceProvider for EpsgRegistry {
    fn resolve(&self, codespace: &str, code: u32) -> Result<ResolvedCrs, ResolveError> {
        if !codespace.eq_ignore_ascii_case("EPSG") {
            return Err(ResolveError::Backend(format!(
                "codeSpace '{codespace}' is not served by the EPSG registry"
            )));
        }
        match self.entries.get(&code) {
            Some(entry) => Ok(ResolvedCrs::new(code, entry.kind, entry.name.clone())),
            None => Err(ResolveError::UnknownCode(code)),
        }
    }

    // Every system in the table shares the registry's transformation
    // graph, so a path exists for any pair of resolved handles.
    fn can_transform(&self, _source: &ResolvedCrs, _destination: &ResolvedCrs) -> bool {
        true
    }
}

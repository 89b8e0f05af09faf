//! Spatial reference provider interface

use crate::error::ResolveError;

/// Broad classification of a reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrsKind {
    /// Angular coordinates on a datum (the EPSG "GCS" list).
    Geographic,
    /// Planar coordinates from a map projection (the EPSG "PCS" list).
    Projected,
}

/// Opaque handle to a reference system a provider has resolved.
///
/// Handles are only ever issued by a [`SpatialReferenceProvider`]; the
/// dispatcher treats them as proof that resolution succeeded and hands
/// them back for capability probing. Each handle is owned by the request
/// that asked for it and dropped when that request finishes, on success
/// and failure paths alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCrs {
    code: u32,
    kind: CrsKind,
    name: String,
}

impl ResolvedCrs {
    /// Construct a handle. Intended for provider implementations.
    pub fn new(code: u32, kind: CrsKind, name: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            name: name.into(),
        }
    }

    /// The EPSG code this handle was resolved from.
    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn kind(&self) -> CrsKind {
        self.kind
    }

    /// Human-readable registry name, e.g. `"WGS 84"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A geodetic backend able to resolve EPSG codes and probe for
/// transformation paths.
///
/// # Object Safety
///
/// The trait is object-safe; the dispatcher holds it as
/// `&dyn SpatialReferenceProvider`.
pub trait SpatialReferenceProvider: Send + Sync {
    /// Resolve a registry code to a reference-system handle.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownCode`] for codes absent from the
    /// backend, or [`ResolveError::Backend`] with a diagnostic when the
    /// backend itself failed.
    fn resolve(&self, codespace: &str, code: u32) -> Result<ResolvedCrs, ResolveError>;

    /// Whether a transformation path can be constructed between the two
    /// systems.
    ///
    /// This is a capability probe only: no coordinates are transformed,
    /// and `false` is a well-defined answer rather than a failure. The
    /// probe must be deterministic for a given pair of handles.
    fn can_transform(&self, source: &ResolvedCrs, destination: &ResolvedCrs) -> bool;
}

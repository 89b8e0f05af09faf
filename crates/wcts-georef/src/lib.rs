//! # WCTS Georef
//!
//! Spatial-reference resolution for the WCTS dispatcher.
//!
//! The dispatcher never computes coordinate math itself. It needs two
//! answers from a geodetic backend: "does this EPSG code denote a known
//! reference system?" and "can a transformation path be constructed
//! between these two systems?". This crate defines that backend
//! interface ([`SpatialReferenceProvider`]) together with the opaque
//! [`ResolvedCrs`] handle it issues, and ships a table-backed
//! [`EpsgRegistry`] implementation over a bundled subset of the EPSG
//! code lists.
//!
//! ## Example
//!
//! ```rust
//! use wcts_georef::{EpsgRegistry, SpatialReferenceProvider};
//!
//! let registry = EpsgRegistry::bundled();
//! let wgs84 = registry.resolve("EPSG", 4326).unwrap();
//! let utm = registry.resolve("EPSG", 32632).unwrap();
//! assert!(registry.can_transform(&wgs84, &utm));
//! ```

pub mod error;
pub mod registry;
pub mod spatial;

pub use error::ResolveError;
pub use registry::EpsgRegistry;
pub use spatial::{CrsKind, ResolvedCrs, SpatialReferenceProvider};

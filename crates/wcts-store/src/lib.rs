//! # WCTS Store
//!
//! Named-file lookup for the WCTS dispatcher.
//!
//! The only document the service ever reads from disk is its static
//! capabilities document, located by searching an ordered list of
//! configured directories. This crate provides:
//! - [`FileFinder`]: the ordered search-location lookup
//! - [`CapabilitiesStore`]: locating and reading the fixed capabilities
//!   document
//!
//! ## Example
//!
//! ```rust,no_run
//! use wcts_store::{CapabilitiesStore, FileFinder};
//!
//! let mut finder = FileFinder::new();
//! finder.push_location("/srv/wcts");
//! let store = CapabilitiesStore::new(finder);
//! let document = store.load()?;
//! # Ok::<(), wcts_store::StoreError>(())
//! ```

pub mod capabilities;
pub mod error;
pub mod finder;

pub use capabilities::{CapabilitiesStore, CAPABILITIES_DOCUMENT};
pub use error::StoreError;
pub use finder::FileFinder;

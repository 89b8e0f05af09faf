//! # WCTS Core
//!
//! Operation routing, parameter validation, and the response model for
//! the Web Coordinate Transformation Service dispatcher.
//!
//! This crate provides:
//! - The closed set of protocol operations ([`OperationKind`])
//! - CRS identifier decoding and resolution ([`crs`])
//! - The request router and operation handlers ([`dispatch`])
//! - The single-response-per-request model ([`WctsResponse`]) and the
//!   service-exception wire format ([`ServiceException`])
//!
//! The crate is transport-agnostic: callers hand it a parsed request
//! forest plus the injected backend services, and receive exactly one
//! [`WctsResponse`] back. Emitting that response (CGI stdout, HTTP body)
//! is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use wcts_core::{dispatch, Services};
//! use wcts_georef::EpsgRegistry;
//! use wcts_store::{CapabilitiesStore, FileFinder};
//! use wcts_xml::parse_document;
//!
//! let registry = EpsgRegistry::bundled();
//! let store = CapabilitiesStore::new(FileFinder::new());
//! let services = Services::new(&registry, &store);
//!
//! let request = parse_document(b"<DescribeTransformation/>").unwrap();
//! let response = dispatch(&request, &services);
//! assert!(response.is_exception());
//! ```

pub mod crs;
pub mod dispatch;
pub mod error;
pub mod exception;
pub mod operation;
pub mod response;

pub use crs::CrsId;
pub use dispatch::{dispatch, Services};
pub use error::WctsError;
pub use exception::ServiceException;
pub use operation::OperationKind;
pub use response::{WctsResponse, EXCEPTION_CONTENT_TYPE, XML_CONTENT_TYPE};

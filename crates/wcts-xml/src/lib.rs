//! # WCTS XML
//!
//! Request-tree model and parser for the Web Coordinate Transformation
//! Service dispatcher.
//!
//! This crate provides:
//! - An [`Element`] tree: tag name, attributes, children, text content
//! - A parser turning a raw request body into an ordered **forest** of
//!   top-level elements
//! - Dotted-path lookup (`"Identifier.codeSpace"`) over the tree
//!
//! Lookup follows the conventions of the service's original request
//! format: names match case-insensitively on the local part (namespace
//! prefixes are ignored), and a path leaf may name either an attribute
//! or a child element.
//!
//! ## Example
//!
//! ```rust
//! use wcts_xml::parse_document;
//!
//! let forest = parse_document(b"<Transformable><SourceCRS/></Transformable>").unwrap();
//! assert!(forest[0].is_named("transformable"));
//! ```

pub mod element;
pub mod parse;

pub use element::Element;
pub use parse::{parse_document, ParseError};

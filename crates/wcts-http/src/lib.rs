//! # WCTS HTTP Transport
//!
//! HTTP transport layer for running the WCTS dispatcher as a persistent
//! service instead of a one-process-per-request CGI.
//!
//! This crate provides:
//! - An axum extractor that reads a POST body into a parsed request
//!   forest, with parse failures already shaped as protocol exceptions
//! - A response wrapper mapping [`WctsResponse`] onto an HTTP reply with
//!   the protocol content types
//! - A reqwest-based client for the two implemented operations
//!
//! Protocol errors stay in-band: every reply, exception reports
//! included, is served with HTTP 200 and distinguished by content type
//! and body, matching the CGI transport's always-zero exit status.
//!
//! ## Server Example
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use wcts_http::{ProtocolReply, XmlBody};
//! use wcts_core::dispatch;
//!
//! async fn handle(XmlBody(request): XmlBody) -> ProtocolReply {
//!     ProtocolReply(dispatch(&request, &services()))
//! }
//!
//! let app = Router::new().route("/wcts", post(handle));
//! ```

mod client;
mod error;
mod extractors;
mod response;

pub use client::WctsClient;
pub use error::HttpError;
pub use extractors::XmlBody;
pub use response::ProtocolReply;

//! Axum extractors for WCTS requests

use crate::response::ProtocolReply;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use wcts_core::{ServiceException, WctsError};
use wcts_xml::{parse_document, Element};

/// Axum extractor producing the parsed top-level request forest.
///
/// Reads the raw POST body and parses it with the protocol's XML
/// parser. Both read and parse failures are rejected as in-band
/// `ServiceExceptionReport` replies, so a handler using this extractor
/// can never leak a non-protocol error shape to the client.
///
/// # Example
///
/// ```ignore
/// use wcts_http::{ProtocolReply, XmlBody};
///
/// async fn handler(XmlBody(request): XmlBody) -> ProtocolReply {
///     // request is the ordered forest of top-level elements
/// }
/// ```
pub struct XmlBody(pub Vec<Element>);

#[async_trait]
impl<S> FromRequest<S> for XmlBody
where
    S: Send + Sync,
{
    type Rejection = ProtocolReply;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ProtocolReply::exception(ServiceException::new(e.to_string())))?;

        let forest = parse_document(&body).map_err(|e| ProtocolReply::from(WctsError::Parse(e)))?;

        Ok(XmlBody(forest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_type_exists() {
        // Compile-time check that the type exists
        fn _assert_extractor(_: XmlBody) {}
    }
}

//! Protocol responses
//!
//! Exactly one [`WctsResponse`] is produced per request, success or
//! failure. The response knows its own content type and renders its own
//! body; transports add their framing (the CGI header line, HTTP
//! headers) around those bytes.

use crate::error::WctsError;
use crate::exception::ServiceException;

/// MIME type of success documents.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// MIME type of service exception reports.
pub const EXCEPTION_CONTENT_TYPE: &str = "application/vnd.ogc.se_xml";

const TRANSFORMABLE_SCHEMA: &str =
    "http://www.deegree.org/xml/schemas/wcts/transformableResponse.xsd";

/// The one response a request cycle produces.
#[derive(Debug)]
pub enum WctsResponse {
    /// The stored capabilities document, emitted verbatim.
    Capabilities(Vec<u8>),
    /// Outcome of a transformation capability probe.
    Transformable(bool),
    /// Terminal failure report.
    Exception(ServiceException),
}

impl WctsResponse {
    pub fn is_exception(&self) -> bool {
        matches!(self, WctsResponse::Exception(_))
    }

    /// MIME type for the transport's content-type header.
    pub fn content_type(&self) -> &'static str {
        match self {
            WctsResponse::Capabilities(_) | WctsResponse::Transformable(_) => XML_CONTENT_TYPE,
            WctsResponse::Exception(_) => EXCEPTION_CONTENT_TYPE,
        }
    }

    /// Render the response body.
    pub fn body(&self) -> Vec<u8> {
        match self {
            WctsResponse::Capabilities(document) => document.clone(),
            WctsResponse::Transformable(transformable) => format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <TransformableResponse xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
                 xsi:noNamespaceSchemaLocation=\"{TRANSFORMABLE_SCHEMA}\" \
                 transformable=\"{transformable}\"/>\n"
            )
            .into_bytes(),
            WctsResponse::Exception(exception) => exception.to_xml().into_bytes(),
        }
    }
}

impl From<ServiceException> for WctsResponse {
    fn from(exception: ServiceException) -> Self {
        WctsResponse::Exception(exception)
    }
}

impl From<WctsError> for WctsResponse {
    fn from(error: WctsError) -> Self {
        WctsResponse::Exception(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transformable_true_document() {
        let body = String::from_utf8(WctsResponse::Transformable(true).body()).unwrap();
        assert_eq!(
            body,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <TransformableResponse xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:noNamespaceSchemaLocation=\"http://www.deegree.org/xml/schemas/wcts/transformableResponse.xsd\" \
             transformable=\"true\"/>\n"
        );
    }

    #[test]
    fn test_transformable_false_document() {
        let body = String::from_utf8(WctsResponse::Transformable(false).body()).unwrap();
        assert!(body.contains("transformable=\"false\""));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            WctsResponse::Transformable(true).content_type(),
            "text/xml"
        );
        assert_eq!(
            WctsResponse::Capabilities(Vec::new()).content_type(),
            "text/xml"
        );
        assert_eq!(
            WctsResponse::Exception(ServiceException::new("x")).content_type(),
            "application/vnd.ogc.se_xml"
        );
    }

    #[test]
    fn test_capabilities_body_is_verbatim() {
        let document = b"<WCTS_Capabilities version=\"0.0.3\"/>".to_vec();
        let response = WctsResponse::Capabilities(document.clone());
        assert_eq!(response.body(), document);
    }
}

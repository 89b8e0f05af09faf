//! Response mapping for WCTS over HTTP

use axum::http::header;
use axum::response::{IntoResponse, Response};
use wcts_core::{ServiceException, WctsError, WctsResponse};

/// Wrapper serving a [`WctsResponse`] as an HTTP reply.
///
/// Every protocol response is served with status 200; clients tell
/// success from failure by the content type
/// (`application/vnd.ogc.se_xml` for exception reports, `text/xml`
/// otherwise) and the body, exactly as they would over the CGI
/// transport.
pub struct ProtocolReply(pub WctsResponse);

impl ProtocolReply {
    /// Shape a terminal failure as a protocol reply.
    pub fn exception(exception: ServiceException) -> Self {
        Self(WctsResponse::Exception(exception))
    }
}

impl From<WctsError> for ProtocolReply {
    fn from(error: WctsError) -> Self {
        Self(WctsResponse::from(error))
    }
}

impl IntoResponse for ProtocolReply {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, self.0.content_type())],
            self.0.body(),
        )
            .into_response()
    }
}

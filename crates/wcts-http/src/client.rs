//! Reqwest-based WCTS client

use crate::error::HttpError;
use reqwest::Client;
use std::time::Duration;
use wcts_core::EXCEPTION_CONTENT_TYPE;
use wcts_xml::parse_document;

/// HTTP client for the two operations this dispatcher implements.
///
/// # Example
///
/// ```ignore
/// use wcts_http::WctsClient;
///
/// let client = WctsClient::new("http://localhost:8080");
/// let transformable = client.is_transformable(4326, 32632).await?;
/// ```
pub struct WctsClient {
    client: Client,
    base_url: String,
}

impl WctsClient {
    /// Create a client for the given base URL (no trailing slash); the
    /// dispatcher endpoint `/wcts` is appended per request.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap(),
            base_url: base_url.into(),
        }
    }

    /// Create a client with custom reqwest settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the server's capabilities document.
    pub async fn get_capabilities(&self) -> Result<Vec<u8>, HttpError> {
        let body = self
            .post("<GetCapabilities service=\"WCTS\"/>".to_string())
            .await?;
        Ok(body)
    }

    /// Probe whether the server can construct a transformation path
    /// between the two EPSG codes.
    pub async fn is_transformable(
        &self,
        source_code: u32,
        destination_code: u32,
    ) -> Result<bool, HttpError> {
        let request = format!(
            "<Transformable>\
               <SourceCRS><CoordinateReferenceSystem>\
                 <Identifier><codeSpace>EPSG</codeSpace><code>{source_code}</code></Identifier>\
               </CoordinateReferenceSystem></SourceCRS>\
               <DestinationCRS><CoordinateReferenceSystem>\
                 <Identifier><codeSpace>EPSG</codeSpace><code>{destination_code}</code></Identifier>\
               </CoordinateReferenceSystem></DestinationCRS>\
             </Transformable>"
        );

        let body = self.post(request).await?;
        let forest = parse_document(&body)
            .map_err(|e| HttpError::UnexpectedResponse(e.to_string()))?;
        let root = forest
            .iter()
            .find(|node| node.is_named("TransformableResponse"))
            .ok_or_else(|| {
                HttpError::UnexpectedResponse(
                    "no TransformableResponse element in reply".to_string(),
                )
            })?;

        match root.attr("transformable") {
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            other => Err(HttpError::UnexpectedResponse(format!(
                "transformable attribute is {other:?}"
            ))),
        }
    }

    /// POST a request document and return the success body, mapping
    /// exception reports to [`HttpError::Service`].
    async fn post(&self, request: String) -> Result<Vec<u8>, HttpError> {
        let url = format!("{}/wcts", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(request)
            .send()
            .await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await?.to_vec();

        if content_type.starts_with(EXCEPTION_CONTENT_TYPE) {
            return Err(HttpError::Service(exception_message(&body)));
        }
        Ok(body)
    }
}

impl Default for WctsClient {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

/// Pull the message text out of a `ServiceExceptionReport`, falling
/// back to the raw body when it cannot be parsed (the report's message
/// is not escaped and may itself break the XML).
fn exception_message(body: &[u8]) -> String {
    if let Ok(forest) = parse_document(body) {
        if let Some(message) = forest
            .iter()
            .find(|node| node.is_named("ServiceExceptionReport"))
            .and_then(|report| report.find("ServiceException"))
            .map(|exception| exception.text().to_string())
        {
            return message;
        }
    }
    String::from_utf8_lossy(body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WctsClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_exception_message_extraction() {
        let report = wcts_core::ServiceException::new("KVP not supported yet.").to_xml();
        assert_eq!(exception_message(report.as_bytes()), "KVP not supported yet.");
    }

    #[test]
    fn test_exception_message_falls_back_to_raw_body() {
        assert_eq!(exception_message(b"not xml at all"), "not xml at all");
    }
}

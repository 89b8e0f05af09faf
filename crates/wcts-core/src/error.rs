//! Protocol error taxonomy
//!
//! Every failure in the request cycle is terminal: it is converted into
//! a `ServiceExceptionReport` and the request ends. The rendered message
//! text is the only signal clients have to distinguish causes, so the
//! `#[error]` strings below are wire contract and must not be reworded.

use thiserror::Error;
use wcts_store::StoreError;
use wcts_xml::ParseError;

/// Failures that terminate a request with a service exception.
///
/// Grouped by cause: transport framing, XML parsing, routing,
/// CRS validation, EPSG resolution, and server configuration.
#[derive(Debug, Error)]
pub enum WctsError {
    // Transport framing
    #[error("REQUEST_METHOD not set.")]
    MethodNotSet,

    #[error("KVP not supported yet.")]
    KvpUnsupported,

    #[error("POST body is short.")]
    ShortBody,

    // Request parsing
    #[error("{0}")]
    Parse(#[from] ParseError),

    // Routing
    #[error("No recognisable supported request found.")]
    NoSupportedOperation,

    #[error("This server does not support the DescribeTransformation operation.")]
    DescribeTransformationUnsupported,

    #[error("The Transform operation is not yet implemented by this server.")]
    TransformNotImplemented,

    #[error("Attempt to GetCapabilities for unsupported '{0}'\nservice.  Only WCTS supported.")]
    UnsupportedService(String),

    // CRS validation
    #[error(
        "Failed to decode CoordinateReferenceSystem with missing, or non-EPSG Identifier.codeSpace"
    )]
    NonEpsgCodeSpace,

    #[error("Failed to decode CoordinateReferenceSystem with missing, or zero Identifier.code")]
    InvalidCode,

    #[error("Unable to identify SourceCRS.CoordinateReferenceSystem")]
    MissingSourceCrs,

    #[error("Unable to identify DestinationCRS.CoordinateReferenceSystem")]
    MissingDestinationCrs,

    // EPSG resolution; the message is either the backend's diagnostic or
    // the fixed fallback built by `crs::resolve`.
    #[error("{0}")]
    Resolution(String),

    // Server configuration
    #[error("WCTS server misconfigured, unable to find capabilities document.")]
    CapabilitiesUnavailable(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages_match_wire_contract() {
        assert_eq!(WctsError::MethodNotSet.to_string(), "REQUEST_METHOD not set.");
        assert_eq!(WctsError::KvpUnsupported.to_string(), "KVP not supported yet.");
        assert_eq!(WctsError::ShortBody.to_string(), "POST body is short.");
        assert_eq!(
            WctsError::NoSupportedOperation.to_string(),
            "No recognisable supported request found."
        );
        assert_eq!(
            WctsError::DescribeTransformationUnsupported.to_string(),
            "This server does not support the DescribeTransformation operation."
        );
    }

    #[test]
    fn test_unsupported_service_names_the_offender() {
        let message = WctsError::UnsupportedService("WFS".to_string()).to_string();
        assert!(message.contains("'WFS'"));
        assert!(message.contains("Only WCTS supported."));
    }

    #[test]
    fn test_crs_messages_name_the_failing_field() {
        assert!(WctsError::NonEpsgCodeSpace
            .to_string()
            .contains("Identifier.codeSpace"));
        assert!(WctsError::InvalidCode.to_string().contains("Identifier.code"));
        assert!(WctsError::MissingDestinationCrs
            .to_string()
            .contains("DestinationCRS.CoordinateReferenceSystem"));
    }
}

//! Service exception wire format

use crate::error::WctsError;
use thiserror::Error;

/// Version tag carried by every exception report.
pub const EXCEPTION_REPORT_VERSION: &str = "1.1.0";

/// DOCTYPE system identifier referenced by the exception report.
pub const EXCEPTION_REPORT_DTD: &str = "http://www.digitalearth.gov/wmt/xml/exception_1_1_0.dtd";

/// The terminal artifact of every failure path: a single message
/// rendered as a `ServiceExceptionReport` document.
///
/// The message body is deliberately NOT XML-escaped; legacy clients of
/// this protocol parse the report with the raw text in place, and the
/// unescaped body is part of the wire contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceException {
    message: String,
}

impl ServiceException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the full `ServiceExceptionReport` document.
    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version='1.0' encoding=\"ISO-8859-1\" standalone=\"no\" ?>\n\
             <!DOCTYPE ServiceExceptionReport SYSTEM \"{dtd}\">\n\
             <ServiceExceptionReport version=\"{version}\">\n\
             <ServiceException>\n\
             {message}\n\
             </ServiceException>\n\
             </ServiceExceptionReport>\n",
            dtd = EXCEPTION_REPORT_DTD,
            version = EXCEPTION_REPORT_VERSION,
            message = self.message,
        )
    }
}

impl From<WctsError> for ServiceException {
    fn from(error: WctsError) -> Self {
        Self::new(error.to_string())
    }
}

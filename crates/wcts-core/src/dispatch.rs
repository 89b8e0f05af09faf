//! Operation routing and handlers
//!
//! The router walks the top-level siblings of a parsed request in
//! document order and dispatches on the first recognized operation tag;
//! siblings it does not recognize are skipped, and nothing below the
//! top level is ever inspected. Once a handler has been entered the
//! request is decided: handlers return exactly one response and the
//! router never resumes the scan.

use crate::crs;
use crate::error::WctsError;
use crate::operation::OperationKind;
use crate::response::WctsResponse;
use wcts_georef::SpatialReferenceProvider;
use wcts_store::CapabilitiesStore;
use wcts_xml::Element;

/// Backend services injected into the request cycle.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    spatial: &'a dyn SpatialReferenceProvider,
    capabilities: &'a CapabilitiesStore,
}

impl<'a> Services<'a> {
    pub fn new(
        spatial: &'a dyn SpatialReferenceProvider,
        capabilities: &'a CapabilitiesStore,
    ) -> Self {
        Self {
            spatial,
            capabilities,
        }
    }
}

/// Route a parsed request to its operation handler and return the one
/// response of this request cycle. Failures come back as the exception
/// variant, never as a panic or a partial response.
pub fn dispatch(request: &[Element], services: &Services<'_>) -> WctsResponse {
    match route(request, services) {
        Ok(response) => response,
        Err(error) => WctsResponse::from(error),
    }
}

fn route(request: &[Element], services: &Services<'_>) -> Result<WctsResponse, WctsError> {
    for node in request {
        let Some(kind) = OperationKind::from_tag(node.local_name()) else {
            continue;
        };
        return match kind {
            OperationKind::GetCapabilities => get_capabilities(node, services.capabilities),
            OperationKind::Transformable => is_transformable(node, services.spatial),
            OperationKind::Transform => transform(node),
            OperationKind::DescribeTransformation => {
                Err(WctsError::DescribeTransformationUnsupported)
            }
        };
    }
    Err(WctsError::NoSupportedOperation)
}

/// Serve the stored capabilities document.
///
/// The `service` parameter (attribute or child element) defaults to
/// "WCTS" when absent; any other value is rejected by name.
fn get_capabilities(
    operation: &Element,
    store: &CapabilitiesStore,
) -> Result<WctsResponse, WctsError> {
    let service = operation.value("service").unwrap_or("WCTS");
    if !service.eq_ignore_ascii_case("WCTS") {
        return Err(WctsError::UnsupportedService(service.to_string()));
    }

    let document = store.load()?;
    Ok(WctsResponse::Capabilities(document))
}

/// Probe whether a transformation path exists between the request's
/// source and destination systems.
///
/// The source side is located and resolved completely before the
/// destination side is looked at, so the first failure names the side
/// that caused it. Resolved handles are dropped on every exit path.
fn is_transformable(
    operation: &Element,
    provider: &dyn SpatialReferenceProvider,
) -> Result<WctsResponse, WctsError> {
    let source = operation
        .find("SourceCRS.CoordinateReferenceSystem")
        .ok_or(WctsError::MissingSourceCrs)?;
    let source = crs::resolve(provider, source)?;

    let destination = operation
        .find("DestinationCRS.CoordinateReferenceSystem")
        .ok_or(WctsError::MissingDestinationCrs)?;
    let destination = crs::resolve(provider, destination)?;

    // Capability probe only; no coordinates are transformed and `false`
    // is an answer, not an error.
    let transformable = provider.can_transform(&source, &destination);
    Ok(WctsResponse::Transformable(transformable))
}

/// Intentionally incomplete: the numeric transform pipeline does not
/// exist yet, and inventing its semantics here is off the table.
fn transform(_operation: &Element) -> Result<WctsResponse, WctsError> {
    Err(WctsError::TransformNotImplemented)
}

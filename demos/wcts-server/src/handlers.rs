//! WCTS request handlers

use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;
use wcts_core::{dispatch, OperationKind, Services, WctsError};
use wcts_http::{ProtocolReply, XmlBody};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    operations: Vec<&'static str>,
    registry_entries: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        operations: OperationKind::ALL.iter().map(OperationKind::tag).collect(),
        registry_entries: state.registry.len(),
    })
}

/// GET requests would carry a KVP-encoded operation. That conversion is
/// a defined stub: the rejection is guaranteed, whatever the query
/// string holds.
pub async fn kvp() -> ProtocolReply {
    ProtocolReply::from(WctsError::KvpUnsupported)
}

/// Dispatcher endpoint: one POSTed XML request in, one protocol reply
/// out. Parse failures never reach this handler; the extractor already
/// shaped them as exception replies.
pub async fn wcts(
    State(state): State<Arc<AppState>>,
    XmlBody(request): XmlBody,
) -> ProtocolReply {
    let request_id = Uuid::new_v4();
    let services = Services::new(&state.registry, &state.store);
    let response = dispatch(&request, &services);

    if response.is_exception() {
        tracing::warn!(
            %request_id,
            content_type = response.content_type(),
            "request failed"
        );
    } else {
        tracing::info!(
            %request_id,
            content_type = response.content_type(),
            "request served"
        );
    }

    ProtocolReply(response)
}

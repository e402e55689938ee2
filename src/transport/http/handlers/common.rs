use crate::domain::error::{parse_id, LibraryError};
use crate::domain::model::EntityId;
use crate::domain::ErrorKind;
use crate::transport::http::types::ApiResponse;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Status class for each error kind: `NotFound` -> 404, everything else -> 400.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    if kind.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::NOT_FOUND
    }
}

pub fn error_response(err: LibraryError) -> Response {
    let kind = err.kind();
    (
        status_for(kind),
        Json(ApiResponse::failure(err.to_string(), Some(kind))),
    )
        .into_response()
}

/// Serializes `data` into a success envelope with the given status.
pub fn data_response<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => (status, Json(ApiResponse::ok(value))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure(
                    format!("Failed to serialize response: {}", e),
                    None,
                )),
            )
                .into_response()
        }
    }
}

/// Maps a service result onto the envelope.
pub fn respond<T: Serialize>(status: StatusCode, result: Result<T, LibraryError>) -> Response {
    match result {
        Ok(data) => data_response(status, &data),
        Err(e) => error_response(e),
    }
}

/// Parses the `{id}` path segment, rejecting non-numeric and non-positive values.
pub fn path_id(raw: &str) -> Result<EntityId, Response> {
    parse_id(raw).map_err(error_response)
}

/// Fallback for routes that do not exist.
pub async fn unknown_endpoint_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failure(
            format!("Unknown endpoint: {}", uri.path()),
            Some(ErrorKind::UnknownEndpoint),
        )),
    )
}

use crate::domain::model::Author;
use crate::transport::http::handlers::common::{error_response, path_id, respond};
use crate::transport::http::types::{json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const AUTHOR_BODY: &str =
    r#"{"firstName": "...", "lastName": "...", "dob": "...", "penName": "..."}"#;

#[utoipa::path(
    get,
    path = "/author",
    responses(
        (status = 200, description = "All authors in insertion order", body = ApiResponse)
    )
)]
pub async fn list_authors_handler(State(state): State<AppState>) -> impl IntoResponse {
    let authors = state.library.list_authors().await;
    respond(StatusCode::OK, Ok(authors))
}

#[utoipa::path(
    get,
    path = "/author/{id}",
    params(
        ("id" = i64, Path, description = "Author id (positive integer)")
    ),
    responses(
        (status = 200, description = "Author found", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Author not found", body = ApiResponse)
    )
)]
pub async fn get_author_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(StatusCode::OK, state.library.get_author(id).await)
}

#[utoipa::path(
    get,
    path = "/author/{id}/books",
    params(
        ("id" = i64, Path, description = "Author id (positive integer)")
    ),
    responses(
        (status = 200, description = "Books referencing the author", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Author not found", body = ApiResponse)
    )
)]
pub async fn author_books_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(StatusCode::OK, state.library.books_by_author(id).await)
}

#[utoipa::path(
    post,
    path = "/author",
    request_body = Author,
    responses(
        (status = 201, description = "Author created", body = ApiResponse),
        (status = 400, description = "Missing first or last name", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn create_author_handler(
    State(state): State<AppState>,
    request: Result<Json<Author>, JsonRejection>,
) -> impl IntoResponse {
    let Json(author) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, AUTHOR_BODY).into_response(),
    };
    respond(StatusCode::CREATED, state.library.create_author(author).await)
}

#[utoipa::path(
    put,
    path = "/author/{id}",
    params(
        ("id" = i64, Path, description = "Author id (positive integer)")
    ),
    request_body = Author,
    responses(
        (status = 200, description = "Author updated", body = ApiResponse),
        (status = 400, description = "Invalid id or missing name", body = ApiResponse),
        (status = 404, description = "Author not found", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn update_author_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<Author>, JsonRejection>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(author) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, AUTHOR_BODY).into_response(),
    };
    respond(StatusCode::OK, state.library.update_author(id, author).await)
}

#[utoipa::path(
    delete,
    path = "/author/{id}",
    params(
        ("id" = i64, Path, description = "Author id (positive integer)")
    ),
    responses(
        (status = 200, description = "Author deleted", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Author not found", body = ApiResponse)
    )
)]
pub async fn delete_author_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.library.delete_author(id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::empty())).into_response(),
        Err(e) => error_response(e),
    }
}

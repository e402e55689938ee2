use crate::domain::model::Book;
use crate::transport::http::handlers::common::{error_response, path_id, respond};
use crate::transport::http::types::{json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const BOOK_BODY: &str =
    r#"{"title": "...", "author": {"id": 1}, "publication": "...", "publishedDate": "d/m/yyyy"}"#;

#[utoipa::path(
    get,
    path = "/book",
    responses(
        (status = 200, description = "All books in insertion order", body = ApiResponse)
    )
)]
pub async fn list_books_handler(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.library.list_books().await;
    respond(StatusCode::OK, Ok(books))
}

#[utoipa::path(
    get,
    path = "/book/{id}",
    params(
        ("id" = i64, Path, description = "Book id (positive integer)")
    ),
    responses(
        (status = 200, description = "Book found", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Book not found", body = ApiResponse)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(StatusCode::OK, state.library.get_book(id).await)
}

#[utoipa::path(
    post,
    path = "/book",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = ApiResponse),
        (status = 400, description = "Invalid publication, date or duplicate id", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn create_book_handler(
    State(state): State<AppState>,
    request: Result<Json<Book>, JsonRejection>,
) -> impl IntoResponse {
    let Json(book) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, BOOK_BODY).into_response(),
    };
    respond(StatusCode::CREATED, state.library.create_book(book).await)
}

#[utoipa::path(
    put,
    path = "/book/{id}",
    params(
        ("id" = i64, Path, description = "Book id (positive integer)")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse),
        (status = 400, description = "Invalid id, publication or date", body = ApiResponse),
        (status = 404, description = "Book not found", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn update_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<Book>, JsonRejection>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(book) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, BOOK_BODY).into_response(),
    };
    respond(StatusCode::OK, state.library.update_book(id, book).await)
}

#[utoipa::path(
    delete,
    path = "/book/{id}",
    params(
        ("id" = i64, Path, description = "Book id (positive integer)")
    ),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Book not found", body = ApiResponse)
    )
)]
pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.library.delete_book(id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::empty())).into_response(),
        Err(e) => error_response(e),
    }
}

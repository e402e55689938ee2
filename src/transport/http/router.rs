use crate::app::LibraryStats;
use crate::domain::model::{Author, AuthorRef, Book};
use crate::domain::ErrorKind;
use crate::transport::http::handlers::{authors, books, common, health};
use crate::transport::http::types::ApiResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        books::list_books_handler,
        books::get_book_handler,
        books::create_book_handler,
        books::update_book_handler,
        books::delete_book_handler,
        authors::list_authors_handler,
        authors::get_author_handler,
        authors::author_books_handler,
        authors::create_author_handler,
        authors::update_author_handler,
        authors::delete_author_handler
    ),
    components(schemas(ApiResponse, ErrorKind, Book, AuthorRef, Author, LibraryStats))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/book",
            get(books::list_books_handler).post(books::create_book_handler),
        )
        .route(
            "/book/:id",
            get(books::get_book_handler)
                .put(books::update_book_handler)
                .delete(books::delete_book_handler),
        )
        .route(
            "/author",
            get(authors::list_authors_handler).post(authors::create_author_handler),
        )
        .route(
            "/author/:id",
            get(authors::get_author_handler)
                .put(authors::update_author_handler)
                .delete(authors::delete_author_handler),
        )
        .route("/author/:id/books", get(authors::author_books_handler))
        .fallback(common::unknown_endpoint_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#![allow(dead_code)]

//! Shared harness: runs the real router on an ephemeral port.

use library_api::{transport, LibraryService};

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn start(library: LibraryService) -> TestServer {
    let router = transport::http::create_router(transport::http::AppState::new(library));

    // Bind to an ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
        handle,
    }
}

pub async fn start_empty() -> TestServer {
    start(LibraryService::default()).await
}

pub async fn start_seeded() -> TestServer {
    let library = LibraryService::default();
    library.seed_fixtures().await.unwrap();
    start(library).await
}

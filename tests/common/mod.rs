//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use swagger_docs::DocsUi;

/// Status returned by the inner router so tests can tell delegation apart.
pub const NEXT_STATUS: StatusCode = StatusCode::IM_A_TEAPOT;

/// A router wrapped by the docs middleware whose inner handler counts calls.
pub struct Harness {
    pub router: Router,
    pub next_calls: Arc<AtomicUsize>,
}

impl Harness {
    pub fn new(docs: DocsUi) -> Self {
        let next_calls = Arc::new(AtomicUsize::new(0));
        let counter = next_calls.clone();
        let inner = Router::new().fallback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { (NEXT_STATUS, "from next") }
        });

        Self {
            router: docs.attach(inner),
            next_calls,
        }
    }

    pub fn next_calls(&self) -> usize {
        self.next_calls.load(Ordering::SeqCst)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.send(Method::GET, path).await
    }

    pub async fn send(&self, method: Method, path: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

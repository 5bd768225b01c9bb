//! CORS and rate-limiting layers.

use crate::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Permissive CORS for the browser frontend: answers preflight requests
/// directly and stamps the allow headers on every response.
pub async fn cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        debug!(uri = %req.uri(), "Answering CORS preflight");
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Fixed-window request counter, shared across requests as middleware
/// state.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    buckets: Arc<Mutex<HashMap<String, Bucket>>>,
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    window_start: Instant,
    count: u32,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per client per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            buckets: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Counts a request against the client's current window and rejects with
/// 429 once the window's budget is spent.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_key(req.headers());

    {
        let mut buckets = limiter.buckets.lock().unwrap();
        let now = Instant::now();

        let entry = buckets.entry(client.clone()).or_insert(Bucket {
            window_start: now,
            count: 0,
        });
        if now.duration_since(entry.window_start) >= limiter.window {
            entry.window_start = now;
            entry.count = 0;
        }
        entry.count = entry.count.saturating_add(1);

        if entry.count > limiter.max_requests {
            warn!(client = %client, "Rate limit exceeded");
            return ApiError::too_many_requests("Too many requests, please try again later")
                .into_response();
        }

        // Keep the map bounded when many distinct clients pass through.
        if buckets.len() > 4096 {
            let window = limiter.window;
            buckets.retain(|_, b| now.duration_since(b.window_start) < window);
        }
    }

    next.run(req).await
}

/// Best-effort client identity from forwarding headers.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("local")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::{Router, middleware};
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn preflight_gets_no_content_with_cors_headers() {
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(cors));

        let req = HttpRequest::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .body(axum::body::Body::empty())
            .expect("request");
        let res = app.oneshot(req).await.expect("response");

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            res.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn responses_carry_cors_headers() {
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(cors));

        let req = HttpRequest::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .expect("request");
        let res = app.oneshot(req).await.expect("response");

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, OPTIONS"
        );
    }

    #[tokio::test]
    async fn second_request_over_budget_gets_429() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn_with_state(limiter, rate_limit));

        let req_ok = HttpRequest::builder()
            .uri("/")
            .header("x-real-ip", "127.0.0.1")
            .body(axum::body::Body::empty())
            .expect("request");
        let res_ok = app.clone().oneshot(req_ok).await.expect("response");
        assert_eq!(res_ok.status(), StatusCode::OK);

        let req_limited = HttpRequest::builder()
            .uri("/")
            .header("x-real-ip", "127.0.0.1")
            .body(axum::body::Body::empty())
            .expect("request");
        let res_limited = app.oneshot(req_limited).await.expect("response");
        assert_eq!(res_limited.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn distinct_clients_have_separate_budgets() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn_with_state(limiter, rate_limit));

        for ip in ["10.0.0.1", "10.0.0.2"] {
            let req = HttpRequest::builder()
                .uri("/")
                .header("x-real-ip", ip)
                .body(axum::body::Body::empty())
                .expect("request");
            let res = app.clone().oneshot(req).await.expect("response");
            assert_eq!(res.status(), StatusCode::OK, "client {ip}");
        }
    }
}

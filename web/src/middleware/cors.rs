use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// CORS middleware that applies the permissive cross-origin policy to every
/// response and answers `OPTIONS` preflight probes itself.
///
/// Preflights get an empty `204 No Content` on any path; the router never
/// runs for them. All other requests are delegated downstream and their
/// responses decorated, including the 404 fallback.
pub async fn cors(request: Request, next: Next) -> Response {
    let preflight = request.method() == Method::OPTIONS;

    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "downstream ran"
    }

    fn test_app() -> Router {
        Router::new()
            .route("/test", get(test_handler))
            .layer(from_fn(cors))
    }

    fn assert_cors_headers(response: &axum::response::Response) {
        let headers = response.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn test_preflight_gets_204_and_never_reaches_the_handler() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/test")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_cors_headers(&response);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty(), "preflight responses carry no body");
    }

    #[tokio::test]
    async fn test_preflight_short_circuits_on_any_path() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/anything")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::NO_CONTENT,
            "even unrouted paths answer preflights"
        );
        assert_cors_headers(&response);
    }

    #[tokio::test]
    async fn test_non_preflight_requests_are_decorated_and_delegated() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"downstream ran");
    }

    #[tokio::test]
    async fn test_unmatched_paths_still_get_cors_headers() {
        let request = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors_headers(&response);
    }
}

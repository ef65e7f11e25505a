//! End-to-end smoke tests for the schooldeskd stack.
//!
//! Each test builds the real router over a temporary assets directory and
//! exercises it via `tower::ServiceExt::oneshot`. Forwarding tests run
//! against a small axum backend bound to a loopback port.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::routing::{any, delete, get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use schooldesk_adapter_http_axum::router;
use schooldesk_adapter_http_axum::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><title>schooldesk</title>";

fn assets() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    dir
}

fn app(upstream: &str, dir: &tempfile::TempDir) -> Router {
    router::build(AppState::new(upstream, dir.path()).expect("client should build"))
}

/// Serve a fake school backend on a loopback port and return its base URL.
async fn backend() -> String {
    let api = Router::new()
        .route(
            "/api/courses",
            get(|| async {
                Json(json!({
                    "courses": [{ "_id": "c1", "name": "Algebra", "code": "MTH101" }],
                    "totalCourses": 1
                }))
            }),
        )
        .route(
            "/api/add-result",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let token = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let total = body["mid"].as_u64().unwrap_or_default()
                    + body["session"].as_u64().unwrap_or_default()
                    + body["Final"].as_u64().unwrap_or_default();
                (
                    StatusCode::CREATED,
                    Json(json!({ "message": format!("{token}:{total}") })),
                )
            }),
        )
        .route(
            "/api/results/{id}",
            delete(|Path(id): Path<String>| async move {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": format!("Result {id} not found") })),
                )
            }),
        )
        .route(
            "/api/echo/{*rest}",
            any(|method: Method, uri: Uri, headers: HeaderMap| async move {
                Json(json!({
                    "method": method.as_str(),
                    "uri": uri.to_string(),
                    "host": headers.get("host").and_then(|v| v.to_str().ok()),
                    "upgrade": headers.get("upgrade").is_some(),
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback port should bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check and assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = assets();
    let resp = app("http://127.0.0.1:9", &dir)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_index_for_dashboard_routes() {
    let dir = assets();
    for path in ["/", "/students", "/results/new", "/stats"] {
        let resp = app("http://127.0.0.1:9", &dir)
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), INDEX);
    }
}

// ---------------------------------------------------------------------------
// API forwarding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_forward_get_to_backend() {
    let dir = assets();
    let upstream = backend().await;

    let resp = app(&upstream, &dir)
        .oneshot(
            Request::builder()
                .uri("/api/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["totalCourses"], 1);
    assert_eq!(body["courses"][0]["code"], "MTH101");
}

#[tokio::test]
async fn should_forward_body_and_headers_to_backend() {
    let dir = assets();
    let upstream = backend().await;
    let payload = json!({
        "registrationNumber": "A1",
        "classId": "k1",
        "courseId": "c1",
        "teacherId": "t1",
        "mid": 18,
        "session": 6,
        "Final": 1
    });

    let resp = app(&upstream, &dir)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/add-result")
                .header("content-type", "application/json")
                .header("authorization", "Bearer abc")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["message"], "Bearer abc:25");
}

#[tokio::test]
async fn should_relay_backend_error_status_and_message() {
    let dir = assets();
    let upstream = backend().await;

    let resp = app(&upstream, &dir)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/results/r9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Result r9 not found");
}

#[tokio::test]
async fn should_keep_query_and_drop_hop_by_hop_headers() {
    let dir = assets();
    let upstream = backend().await;
    let authority = upstream.trim_start_matches("http://").to_string();

    let resp = app(&upstream, &dir)
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/echo/a/b?x=1&y=2")
                .header("host", "localhost:3000")
                .header("connection", "upgrade")
                .header("upgrade", "websocket")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["uri"], "/api/echo/a/b?x=1&y=2");
    assert_eq!(body["host"], authority.as_str());
    assert_eq!(body["upgrade"], false);
}

#[tokio::test]
async fn should_return_bad_gateway_when_backend_unreachable() {
    let dir = assets();

    let resp = app("http://127.0.0.1:9", &dir)
        .oneshot(
            Request::builder()
                .uri("/api/all-results")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(resp).await["message"],
        "Upstream service unavailable"
    );
}

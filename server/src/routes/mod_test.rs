use axum::Json;
use axum::http::HeaderMap;
use axum::routing::post;

use super::*;
use crate::config::ServerConfig;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(upstream: &str) -> AppState {
    let config = ServerConfig {
        api_upstream: upstream.to_owned(),
        proxy_timeout_secs: 5,
        ..ServerConfig::from_lookup(|_| None).unwrap()
    };
    AppState::new(&config).unwrap()
}

/// Stand-in backend echoing what it received.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/users/login",
            post(|headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_owned();
                Json(serde_json::json!({ "token": "t1", "echo": body, "auth": auth }))
            }),
        )
        .route(
            "/api/projects/{id}",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "message": "Token expired" }))) }),
        )
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = serve(api_routes(state_for("http://127.0.0.1:9/api"))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn proxy_forwards_body_and_bearer() {
    let upstream = serve(fake_backend()).await;
    let base = serve(api_routes(state_for(&format!("{upstream}/api")))).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/users/login"))
        .header("Authorization", "Bearer abc")
        .json(&serde_json::json!({ "email": "a@b.c", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["token"], "t1");
    assert_eq!(body["echo"]["email"], "a@b.c");
    assert_eq!(body["auth"], "Bearer abc");
}

#[tokio::test]
async fn proxy_passes_upstream_status_through() {
    let upstream = serve(fake_backend()).await;
    let base = serve(api_routes(state_for(&format!("{upstream}/api")))).await;

    let resp = reqwest::get(format!("{base}/api/projects/p1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Token expired");
}

#[tokio::test]
async fn proxy_reports_bad_gateway_when_upstream_down() {
    let base = serve(api_routes(state_for("http://127.0.0.1:9/api"))).await;
    let resp = reqwest::get(format!("{base}/api/projects")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

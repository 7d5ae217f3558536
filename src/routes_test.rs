use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn config() -> HostConfig {
    HostConfig {
        port: 0,
        site_root: PathBuf::from("target/site-test-missing"),
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = base_routes(&config())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let resp = base_routes(&config())
        .oneshot(Request::get("/pkg/firstcabs.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#![allow(dead_code)]

use aerial_damage_api::routes;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Router built from default configuration, without binding a socket.
pub fn test_app() -> Router {
    routes::build_router()
}

/// Send a request with an empty body and collect status, headers and body.
pub async fn send(app: &Router, method: Method, path: &str) -> (u16, HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body_bytes.to_vec())
}

pub async fn get_raw(app: &Router, path: &str) -> (u16, String) {
    let (status, _, body) = send(app, Method::GET, path).await;
    (status, String::from_utf8_lossy(&body).to_string())
}

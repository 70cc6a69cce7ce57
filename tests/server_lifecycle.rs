//! End-to-end tests against a server bound to a real TCP port.

use std::time::Duration;

use aerial_damage_api::config::Config;
use aerial_damage_api::error::AppError;
use aerial_damage_api::server::Server;
use tokio::sync::oneshot;

fn loopback_config(port: u16) -> Config {
    let port = port.to_string();
    Config::from_lookup(move |key| match key {
        "API_HOST" => Some("127.0.0.1".to_string()),
        "API_PORT" => Some(port.clone()),
        _ => None,
    })
}

#[tokio::test]
async fn serves_health_and_shuts_down_on_signal() {
    let server = Server::bind(loopback_config(0)).await.unwrap();
    let addr = server.local_addr();
    assert_ne!(addr.port(), 0);

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve_with_shutdown(async {
        let _ = rx.await;
    }));

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));

    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown signal")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn binding_an_occupied_port_fails() {
    let first = Server::bind(loopback_config(0)).await.unwrap();
    let port = first.local_addr().port();

    let err = Server::bind(loopback_config(port)).await.err().unwrap();
    assert!(matches!(err, AppError::Bind { addr, .. } if addr.port() == port));
}

#[tokio::test]
async fn invalid_host_is_a_config_error() {
    let config = Config::from_lookup(|key| match key {
        "API_HOST" => Some("not an ip".to_string()),
        _ => None,
    });

    let err = Server::bind(config).await.err().unwrap();
    assert!(matches!(err, AppError::Config(_)));
}

//! Liveness endpoint integration test

use std::net::TcpListener;
use std::sync::Arc;

use tokengate::clock::SystemClock;
use tokengate::configuration::SessionSettings;
use tokengate::credential_store::InMemoryCredentialStore;
use tokengate::startup::run;

fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let store = Arc::new(InMemoryCredentialStore::new(vec![]));
    let session = SessionSettings {
        secret: "health-check-suite-secret-0123456789".to_string(),
        token_ttl_seconds: 300,
        refresh_window_seconds: 30,
    };
    let server = run(listener, store, Arc::new(SystemClock), session)
        .expect("Failed to create server");

    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_check_works() {
    let addr = spawn_app();

    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", addr))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.content_length(), Some(0));
}

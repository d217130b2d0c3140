//! End-to-end test over a real TCP listener.

use std::net::SocketAddr;

use employee_api::{api::create_router, AppState, EmployeeStore};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn spawn_server() -> SocketAddr {
    let store = EmployeeStore::open_in_memory().unwrap();
    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_crud_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/api/employees", addr);

    let body = json!({
        "name": "Ann",
        "email": "a@x.com",
        "department": "Eng",
        "position": "Dev",
        "salary": 50000,
        "hire_date": "2024-01-01",
        "status": "Active"
    });

    let response = client.post(&base).json(&body).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .get(format!("{}/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let response = client
        .delete(format!("{}/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let missing: Value = response.json().await.unwrap();
    assert_eq!(missing["isOk"], false);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let addr = spawn_server().await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/api/health", addr))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

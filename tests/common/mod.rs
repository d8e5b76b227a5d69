#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use possible_site::{
    app_state::AppState, config::Config, infrastructure::SqliteContentStore,
    site_interface::create_site_router,
};

pub const BASE: &str = "https://possible.uz";
pub const TOKEN: &str = "test-token";

pub async fn test_app(admin_token: Option<&str>) -> (Router, Arc<SqliteContentStore>) {
    let mut config = Config::in_memory(BASE);
    config.admin.token = admin_token.map(str::to_string);

    let store = Arc::new(SqliteContentStore::connect_in_memory(100).await.unwrap());
    store.init().await.unwrap();

    let state = AppState::with_store(config, store.clone());
    (create_site_router(state), store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub fn admin_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

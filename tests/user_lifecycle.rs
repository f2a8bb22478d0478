//! End-to-end exercise of the user lifecycle against the in-memory service.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use users_api::AppState;
use users_api::modules::user::InMemoryUserService;
use users_api::server;

fn app() -> Router {
    server::app(AppState::new(Arc::new(InMemoryUserService::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, location, body)
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn created_user_is_readable_and_deletable_through_the_api() {
    let app = app();

    let (status, location, body) =
        send(&app, json_post("/users", r#"{"fullName":"Regi Shehi"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["fullName"], "Regi Shehi");

    let location = location.expect("creation returns a location");
    assert_eq!(location, format!("/users/{}", body["id"].as_str().unwrap()));

    let (status, _, fetched) = send(&app, get(&location)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    let (status, _, listed) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([body]));

    let (status, _, _) = send(&app, delete(&location)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, get(&location)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, listed) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn each_creation_gets_its_own_id() {
    let app = app();

    let (_, _, first) = send(&app, json_post("/users", r#"{"fullName":"John Doe"}"#)).await;
    let (_, _, second) = send(&app, json_post("/users", r#"{"fullName":"John Doe"}"#)).await;

    assert_ne!(first["id"], second["id"]);

    let (status, _, listed) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

use api::routes::routes;
use axum::{Router, body::Body, http::Request};
use serde_json::Value;
use util::state::AppState;

/// Builds a fresh app over newly seeded state. Every test gets its own
/// store, session store, and upload tracker.
pub fn make_test_app() -> (Router, AppState) {
    let app_state = AppState::init();
    let app = Router::new().nest("/api", routes(app_state.clone()));
    (app, app_state)
}

/// Reads a response body and parses it as JSON.
pub async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Reads a response body as text (for CSV downloads).
pub async fn get_text_body(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Builds a GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a request with a JSON body.
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

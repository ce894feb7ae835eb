use axum::{Json, Router, http::StatusCode, response::IntoResponse};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Spawns a stub upstream server that answers every request with the given
/// status and JSON body, counting hits. Returns the base URL and the hit
/// counter.
pub async fn spawn_upstream(status: StatusCode, body: Value) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();

    let app = Router::new().fallback(move || {
        let hits = handler_hits.clone();
        let body = body.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            (status, Json(body)).into_response()
        }
    });

    let port = portpicker::pick_unused_port().expect("No free port for stub upstream");
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind stub upstream");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Stub upstream crashed");
    });

    (format!("http://{addr}"), hits)
}

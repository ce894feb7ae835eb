#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, json_request, make_test_app};
    use crate::helpers::upstream::spawn_upstream;
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use std::sync::atomic::Ordering;
    use tower::ServiceExt;
    use util::config::AppConfig;

    #[tokio::test]
    #[serial]
    async fn list_relays_upstream_json_verbatim() {
        let upstream_body = json!([
            { "_id": "1", "name": "Section A", "courseClass": { "_id": "1", "name": "Class 10A" } }
        ]);
        let (base, hits) = spawn_upstream(StatusCode::OK, upstream_body.clone()).await;
        AppConfig::set_backend_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app.oneshot(get("/api/sections")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json, upstream_body);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn create_forwards_body_and_relays_response() {
        let upstream_body = json!({ "_id": "9", "name": "Section Z" });
        let (base, hits) = spawn_upstream(StatusCode::OK, upstream_body.clone()).await;
        AppConfig::set_backend_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/sections",
                json!({ "name": "Section Z", "courseClass": "1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await, upstream_body);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        AppConfig::reset();
    }

    /// A not-found upstream collapses to the fixed 500 error shape instead
    /// of crashing or relaying the 404.
    #[tokio::test]
    #[serial]
    async fn delete_with_upstream_not_found_yields_fixed_error() {
        let (base, _hits) =
            spawn_upstream(StatusCode::NOT_FOUND, json!({ "code": "Not Found" })).await;
        AppConfig::set_backend_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request("DELETE", "/api/sections/42", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_json_body(response).await,
            json!({ "error": "Failed to delete section" })
        );

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn delete_success_returns_success_marker() {
        let (base, _hits) = spawn_upstream(StatusCode::OK, json!({ "ignored": true })).await;
        AppConfig::set_backend_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request("DELETE", "/api/sections/1", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await, json!({ "success": true }));

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn unreachable_upstream_yields_fixed_error() {
        // A port nothing listens on.
        let port = portpicker::pick_unused_port().expect("no free port");
        AppConfig::set_backend_base_url(format!("http://127.0.0.1:{port}"));

        let (app, _state) = make_test_app();
        let response = app.oneshot(get("/api/sections")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_json_body(response).await,
            json!({ "error": "Failed to fetch sections" })
        );

        AppConfig::reset();
    }
}

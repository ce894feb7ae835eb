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

    fn login_body(password: &str) -> serde_json::Value {
        json!({
            "email": "john.doe@school.edu",
            "password": password,
            "courseClassId": "1",
            "sectionId": "1",
            "subjectId": "1"
        })
    }

    /// Short passwords are rejected locally; the upstream never sees the
    /// request.
    #[tokio::test]
    #[serial]
    async fn short_password_rejected_before_any_network_call() {
        let (base, hits) = spawn_upstream(StatusCode::OK, json!({})).await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request("POST", "/api/auth/login", login_body("short")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Password must be at least 7 characters long")
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0, "no upstream call expected");

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn missing_selections_rejected_locally() {
        let (base, hits) = spawn_upstream(StatusCode::OK, json!({})).await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({
                    "email": "john.doe@school.edu",
                    "password": "password123",
                    "courseClassId": "",
                    "sectionId": "1",
                    "subjectId": "1"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert!(json["message"].as_str().unwrap().contains("Please select a class"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn successful_login_persists_session() {
        let (base, hits) = spawn_upstream(
            StatusCode::OK,
            json!({
                "user": { "username": "john.doe", "email": "john.doe@school.edu", "role": "teacher" },
                "accessToken": "upstream-token-1"
            }),
        )
        .await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                login_body("password123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["user"]["username"], "john.doe");
        assert_eq!(json["data"]["accessToken"], "upstream-token-1");
        assert_eq!(json["message"], "Welcome back, john.doe!");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // The session restores on a later request, like reloading the app.
        let session = get_json_body(
            app.clone().oneshot(get("/api/auth/session")).await.unwrap(),
        )
        .await;
        assert_eq!(session["data"]["user"]["username"], "john.doe");
        assert_eq!(session["data"]["accessToken"], "upstream-token-1");

        // Logout clears it.
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/auth/logout", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/auth/session")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn not_found_code_maps_to_teacher_not_found() {
        let (base, _hits) =
            spawn_upstream(StatusCode::NOT_FOUND, json!({ "code": "Not Found" })).await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                login_body("password123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"]["title"], "Teacher Not Found");
        assert_eq!(
            json["data"]["message"],
            "No teacher account found with this email address"
        );

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn bad_request_selection_substring_maps_to_tailored_message() {
        let (base, _hits) = spawn_upstream(
            StatusCode::BAD_REQUEST,
            json!({
                "code": "BadRequest",
                "message": "Invalid courseClass, section, or subject selection"
            }),
        )
        .await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                login_body("password123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Invalid Request");
        assert_eq!(
            json["data"]["message"],
            "Invalid class, section, or subject selection. Please try again."
        );

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn authorization_error_maps_to_access_denied() {
        let (base, _hits) = spawn_upstream(
            StatusCode::FORBIDDEN,
            json!({ "code": "Authorization Error" }),
        )
        .await;
        AppConfig::set_auth_base_url(base.as_str());

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                login_body("password123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Access Denied");

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn unreachable_auth_service_reports_raw_error() {
        let port = portpicker::pick_unused_port().expect("no free port");
        AppConfig::set_auth_base_url(format!("http://127.0.0.1:{port}"));

        let (app, _state) = make_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                login_body("password123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Teacher Login Failed");
        assert!(!json["data"]["message"].as_str().unwrap().is_empty());

        AppConfig::reset();
    }
}

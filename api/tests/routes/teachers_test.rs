#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn list_never_exposes_passwords() {
        let (app, _state) = make_test_app();

        let json = get_json_body(app.oneshot(get("/api/teachers")).await.unwrap()).await;
        let rows = json["data"]["teachers"].as_array().unwrap();
        assert_eq!(rows.len(), 6);
        for row in rows {
            assert!(row.get("password").is_none());
            assert!(row.get("username").is_some());
        }
    }

    #[tokio::test]
    async fn filter_scans_username_and_email() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get("/api/teachers?query=school.edu"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["total"], 6);
    }

    #[tokio::test]
    async fn create_rejects_invalid_email() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/teachers",
                json!({ "username": "new.teacher", "email": "not-an-email", "password": "secret1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert!(json["message"].as_str().unwrap().contains("Invalid email address"));
    }

    #[tokio::test]
    async fn create_rejects_short_password() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/teachers",
                json!({ "username": "new.teacher", "email": "new.teacher@school.edu", "password": "abc" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_and_delete_roundtrip() {
        let (app, _state) = make_test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/teachers/1",
                json!({ "username": "john.doe", "email": "john.doe@district.edu", "password": "password123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = get_json_body(response).await;
        assert_eq!(updated["data"]["email"], "john.doe@district.edu");

        let response = app
            .clone()
            .oneshot(json_request("DELETE", "/api/teachers/1", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/teachers/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

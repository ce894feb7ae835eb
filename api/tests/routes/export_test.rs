#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, get_text_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    #[tokio::test]
    async fn types_catalog_reports_live_record_counts() {
        let (app, _state) = make_test_app();

        let json = get_json_body(app.oneshot(get("/api/export/types")).await.unwrap()).await;
        let types = json["data"].as_array().unwrap();
        assert_eq!(types.len(), 4);

        let by_id = |id: &str| {
            types
                .iter()
                .find(|t| t["id"] == id)
                .unwrap_or_else(|| panic!("missing type {id}"))
                .clone()
        };
        assert_eq!(by_id("course-classes")["record_count"], 6);
        assert_eq!(by_id("subjects")["record_count"], 8);
        assert_eq!(by_id("teachers")["record_count"], 6);
        // Section data lives behind the proxy; nothing is held locally.
        assert_eq!(by_id("sections")["record_count"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn csv_export_uses_default_fields_and_records_history() {
        AppConfig::set_export_delay_ms(1);
        let (app, _state) = make_test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/export",
                json!({ "data_type": "subjects", "format": "csv" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/csv");

        let body = get_text_body(response).await;
        let lines: Vec<&str> = body.trim_end().split('\n').collect();
        assert_eq!(lines[0], "name,code,description");
        assert_eq!(lines.len(), 9, "header plus eight subjects");
        assert!(lines[1].starts_with("Mathematics,MATH101,"));

        let history = get_json_body(
            app.oneshot(get("/api/export/history")).await.unwrap(),
        )
        .await;
        let records = history["data"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["data_type"], "subjects");
        assert_eq!(records[0]["format"], "csv");
        assert_eq!(records[0]["status"], "success");
        assert!(records[0]["file_size"].as_u64().unwrap() > 0);

        AppConfig::reset();
    }

    #[tokio::test]
    #[serial]
    async fn json_export_narrows_to_requested_fields() {
        AppConfig::set_export_delay_ms(1);
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/export",
                json!({ "data_type": "teachers", "format": "json", "fields": ["username"] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = get_text_body(response).await;
        let rows: serde_json::Value = serde_json::from_str(&body).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], json!({ "username": "john.doe" }));

        AppConfig::reset();
    }

    #[tokio::test]
    async fn unsupported_formats_are_rejected() {
        let (app, _state) = make_test_app();

        for format in ["xlsx", "pdf"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/export",
                    json!({ "data_type": "subjects", "format": format }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn proxied_sections_cannot_be_exported() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/export",
                json!({ "data_type": "sections", "format": "csv" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert!(json["message"].as_str().unwrap().contains("proxied"));
    }

    #[tokio::test]
    async fn unknown_data_type_is_rejected() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/export",
                json!({ "data_type": "grades", "format": "csv" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, get_text_body, make_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn ids(json: &serde_json::Value) -> Vec<i64> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn level_and_category_filters_combine() {
        let (app, _state) = make_test_app();

        let errors =
            get_json_body(app.clone().oneshot(get("/api/logs?level=error")).await.unwrap()).await;
        assert_eq!(ids(&errors), [2, 6, 10]);

        let auth_errors = get_json_body(
            app.oneshot(get("/api/logs?level=error&category=auth"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(ids(&auth_errors), [6]);
    }

    #[tokio::test]
    async fn query_scans_message_user_and_details() {
        let (app, _state) = make_test_app();

        let json = get_json_body(app.oneshot(get("/api/logs?query=jane")).await.unwrap()).await;
        assert_eq!(ids(&json), [3, 8]);
    }

    #[tokio::test]
    async fn all_keyword_disables_a_filter() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get("/api/logs?level=all&category=all&range=all"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn unknown_level_is_rejected() {
        let (app, _state) = make_test_app();

        let response = app.oneshot(get("/api/logs?level=fatal")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// The seeded entries carry fixed 2024 timestamps, so every relative
    /// window filters them all out.
    #[tokio::test]
    async fn relative_range_excludes_old_entries() {
        let (app, _state) = make_test_app();

        let json = get_json_body(app.oneshot(get("/api/logs?range=24h")).await.unwrap()).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn csv_export_has_fixed_header_and_filtered_rows() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(get("/api/logs/export?level=error"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/csv"
        );
        let disposition = response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=logs-"));
        assert!(disposition.ends_with(".csv"));

        let body = get_text_body(response).await;
        let lines: Vec<&str> = body.trim_end().split('\n').collect();
        assert_eq!(
            lines[0],
            "Timestamp,Level,Category,Message,User,IP Address,Status,Duration"
        );
        assert_eq!(lines.len(), 4, "header plus the three error entries");
        assert!(lines[1].contains("\"Database connection timeout\""));
        assert!(lines[1].contains("error,database"));
    }
}

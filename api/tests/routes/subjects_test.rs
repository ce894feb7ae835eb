#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    fn names(json: &serde_json::Value) -> Vec<String> {
        json["data"]["subjects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect()
    }

    /// The "Mathematics" filter returns exactly the rows whose filterable
    /// columns contain the substring, case-insensitively.
    #[tokio::test]
    async fn global_filter_mathematics_matches_exactly() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.clone()
                .oneshot(get("/api/subjects?query=Mathematics"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(names(&json), ["Mathematics"]);
        assert_eq!(json["data"]["total"], 1);

        // Code is a filterable column too.
        let json = get_json_body(
            app.oneshot(get("/api/subjects?query=math10"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(names(&json), ["Mathematics"]);
    }

    #[tokio::test]
    async fn sort_by_code_ascending() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get("/api/subjects?sort=code")).await.unwrap(),
        )
        .await;
        let codes: Vec<&str> = json["data"]["subjects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["code"].as_str().unwrap())
            .collect();
        assert_eq!(
            codes,
            [
                "ART301", "BIO101", "CHEM201", "CS101", "ECON201", "ENG201", "MATH101", "PHY101"
            ]
        );
    }

    #[tokio::test]
    async fn create_rejects_malformed_code() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/subjects",
                json!({ "name": "Geology", "code": "geo-1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Subject code must be uppercase letters followed by digits")
        );
    }

    #[tokio::test]
    async fn create_and_fetch_subject() {
        let (app, _state) = make_test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/subjects",
                json!({ "name": "Geology", "code": "GEO101", "description": "Rocks and minerals" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = get_json_body(response).await;
        let id = created["data"]["id"].as_i64().unwrap();
        assert_eq!(created["data"]["code"], "GEO101");

        let fetched = get_json_body(
            app.oneshot(get(&format!("/api/subjects/{id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(fetched["data"]["name"], "Geology");
    }

    #[tokio::test]
    async fn update_unknown_subject_is_not_found() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/subjects/999",
                json!({ "name": "Nothing", "code": "NO101" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

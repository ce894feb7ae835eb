#[cfg(test)]
mod tests {
    use crate::helpers::app::{get, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    fn names(json: &serde_json::Value) -> Vec<String> {
        json["data"]["course_classes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn list_returns_seeded_rows_in_insertion_order() {
        let (app, _state) = make_test_app();

        let response = app.oneshot(get("/api/course-classes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["total"], 6);
        assert_eq!(json["data"]["page"], 1);
        assert_eq!(json["data"]["per_page"], 10);
        assert_eq!(
            names(&json),
            [
                "Mathematics 101",
                "Computer Science Fundamentals",
                "English Literature",
                "Physics Lab",
                "History of Art",
                "Chemistry Advanced"
            ]
        );
    }

    /// The header toggle cycle: ascending, descending, back to unsorted.
    #[tokio::test]
    async fn sort_cycles_ascending_descending_unsorted() {
        let (app, _state) = make_test_app();

        let asc = get_json_body(
            app.clone()
                .oneshot(get("/api/course-classes?sort=name"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(names(&asc)[0], "Chemistry Advanced");
        assert_eq!(names(&asc)[5], "Physics Lab");

        let desc = get_json_body(
            app.clone()
                .oneshot(get("/api/course-classes?sort=-name"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(names(&desc)[0], "Physics Lab");
        assert_eq!(names(&desc)[5], "Chemistry Advanced");

        let unsorted = get_json_body(
            app.oneshot(get("/api/course-classes")).await.unwrap(),
        )
        .await;
        assert_eq!(names(&unsorted)[0], "Mathematics 101");
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_substring() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get("/api/course-classes?query=LITERATURE"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(names(&json), ["English Literature"]);
        assert_eq!(json["data"]["total"], 1);
    }

    /// Out-of-range pages come back empty with the total intact; the page
    /// index is never reset server-side.
    #[tokio::test]
    async fn out_of_range_page_is_empty_not_reset() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get("/api/course-classes?page=3&per_page=10"))
                .await
                .unwrap(),
        )
        .await;
        assert!(json["data"]["course_classes"].as_array().unwrap().is_empty());
        assert_eq!(json["data"]["total"], 6);
        assert_eq!(json["data"]["page"], 3);
    }

    #[tokio::test]
    async fn per_page_outside_fixed_choices_is_rejected() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(get("/api/course-classes?per_page=25"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Hidden columns disappear from rows but never from the filter scope.
    #[tokio::test]
    async fn column_projection_keeps_id_and_filter_scope() {
        let (app, _state) = make_test_app();

        let json = get_json_body(
            app.oneshot(get(
                "/api/course-classes?columns=name&query=trigonometry",
            ))
            .await
            .unwrap(),
        )
        .await;

        // "trigonometry" only appears in the description column, which is
        // hidden; the row still matches.
        let rows = json["data"]["course_classes"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Mathematics 101");
        assert!(rows[0].get("description").is_none());
        assert!(rows[0].get("id").is_some());
    }

    #[tokio::test]
    async fn create_update_delete_roundtrip() {
        let (app, _state) = make_test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/course-classes",
                json!({ "name": "Biology Basics", "description": "Cells and genetics" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = get_json_body(response).await;
        let id = created["data"]["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/course-classes/{id}"),
                json!({ "name": "Biology Fundamentals", "description": "Cells and genetics" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = get_json_body(response).await;
        assert_eq!(updated["data"]["name"], "Biology Fundamentals");

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("/api/course-classes/{id}"),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get(&format!("/api/course-classes/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let (app, _state) = make_test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/course-classes",
                json!({ "name": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Name must be between 1 and 100 characters")
        );
    }
}

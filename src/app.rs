use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/expenses/:date",
            get(handlers::get_expenses).post(handlers::replace_expenses),
        )
        .route("/analytics/", post(handlers::get_analytics))
        .route("/analytics", post(handlers::get_analytics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::{memory_store, memory_store_with};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn test_server() -> (TestServer, crate::storage::ExpenseStore) {
        let store = memory_store().await;
        let app = router(AppState::new(store.clone()));
        let server = TestServer::new(app).expect("Could not create test server.");
        (server, store)
    }

    #[tokio::test]
    async fn replace_then_get_returns_new_set() {
        let (server, _) = test_server().await;
        let first = json!([
            { "amount": 10.0, "category": "Food", "notes": "lunch" },
            { "amount": 5.5, "category": "Other", "notes": "" }
        ]);
        let response = server.post("/expenses/2024-08-01").json(&first).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["message"], "Expenses updated successfully");

        let second = json!([{ "amount": 1200.0, "category": "Rent", "notes": "August" }]);
        server
            .post("/expenses/2024-08-01")
            .json(&second)
            .await
            .assert_status_ok();

        let response = server.get("/expenses/2024-08-01").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), second);
    }

    #[tokio::test]
    async fn replace_with_empty_list_clears_the_date() {
        let (server, _) = test_server().await;
        server
            .post("/expenses/2024-08-02")
            .json(&json!([{ "amount": 3.0, "category": "Food", "notes": "" }]))
            .await
            .assert_status_ok();

        server
            .post("/expenses/2024-08-02")
            .json(&json!([]))
            .await
            .assert_status_ok();

        let response = server.get("/expenses/2024-08-02").await;
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn analytics_reports_share_per_category() {
        let (server, _) = test_server().await;
        server
            .post("/expenses/2024-08-01")
            .json(&json!([{ "amount": 60.0, "category": "Food", "notes": "" }]))
            .await
            .assert_status_ok();
        server
            .post("/expenses/2024-08-03")
            .json(&json!([{ "amount": 40.0, "category": "Rent", "notes": "" }]))
            .await
            .assert_status_ok();

        let response = server
            .post("/analytics/")
            .json(&json!({ "start_date": "2024-08-01", "end_date": "2024-08-05" }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "Food": { "total": 60.0, "percentage": 60.0 },
                "Rent": { "total": 40.0, "percentage": 40.0 }
            })
        );
    }

    #[tokio::test]
    async fn analytics_for_empty_range_is_empty_object() {
        let (server, _) = test_server().await;
        let response = server
            .post("/analytics/")
            .json(&json!({ "start_date": "2030-01-01", "end_date": "2030-01-31" }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({}));
    }

    #[tokio::test]
    async fn malformed_input_is_rejected_with_detail() {
        let (server, _) = test_server().await;

        let response = server.get("/expenses/not-a-date").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let detail = response.json::<Value>()["detail"].as_str().unwrap_or_default().to_string();
        assert!(!detail.is_empty());

        let response = server
            .post("/expenses/2024-08-01")
            .json(&json!([{ "amount": "lots", "category": "Food", "notes": "" }]))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<Value>()["detail"].is_string());

        server
            .post("/analytics/")
            .json(&json!({ "start_date": "2024-08-01" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn negative_amounts_are_accepted() {
        let (server, _) = test_server().await;
        server
            .post("/expenses/2024-08-04")
            .json(&json!([{ "amount": -5.0, "category": "Other", "notes": "refund" }]))
            .await
            .assert_status_ok();

        let response = server.get("/expenses/2024-08-04").await;
        assert_eq!(response.json::<Value>()[0]["amount"], -5.0);
    }

    #[tokio::test]
    async fn failed_insert_leaves_rows_written_before_it() {
        let store = memory_store_with(
            "CREATE TRIGGER reject_boom BEFORE INSERT ON expenses
             WHEN NEW.category = 'Boom'
             BEGIN SELECT RAISE(ABORT, 'boom'); END;",
        )
        .await;
        let server = TestServer::new(router(AppState::new(store)))
            .expect("Could not create test server.");

        server
            .post("/expenses/2024-08-07")
            .json(&json!([
                { "amount": 8.0, "category": "Food", "notes": "old breakfast" },
                { "amount": 9.0, "category": "Other", "notes": "old taxi" }
            ]))
            .await
            .assert_status_ok();

        let response = server
            .post("/expenses/2024-08-07")
            .json(&json!([
                { "amount": 12.0, "category": "Food", "notes": "new lunch" },
                { "amount": 30.0, "category": "Boom", "notes": "never stored" }
            ]))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response.json::<Value>()["detail"].as_str().unwrap_or_default().to_string();
        assert!(!detail.is_empty());

        let response = server.get("/expenses/2024-08-07").await;
        assert_eq!(
            response.json::<Value>(),
            json!([{ "amount": 12.0, "category": "Food", "notes": "new lunch" }])
        );
    }

    #[tokio::test]
    async fn storage_failure_becomes_server_error() {
        let (server, store) = test_server().await;
        store.close().await;

        let response = server.get("/expenses/2024-08-01").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response.json::<Value>()["detail"].as_str().unwrap_or_default().to_string();
        assert!(!detail.is_empty());
    }
}

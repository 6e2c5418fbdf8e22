use crate::common::harness_for;
use mockito::{Matcher, Mock, ServerGuard};
use portfolio_harness::application::config::DemoConfig;
use portfolio_harness::application::demo::run_demo;
use serde_json::json;

// Mocks are removed from the server when dropped, callers keep the handles
async fn mock_read_routes(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        server
            .mock("POST", "/api/settlement/user123")
            .match_body(Matcher::Json(json!({"balance": 10000.0})))
            .with_body(r#"{"user_id": "user123", "balance": "10000.00"}"#)
            .create_async()
            .await,
        server
            .mock("GET", "/api/search/AAPL")
            .with_body(r#"[{"symbol": "AAPL", "name": "Apple Inc."}]"#)
            .create_async()
            .await,
        server
            .mock("GET", "/api/quote/AAPL")
            .with_body(r#"{"symbol": "AAPL", "price": 231.2}"#)
            .create_async()
            .await,
        server
            .mock("GET", "/api/portfolio/user123")
            .with_body(r#"{"holdings": [], "diversification": {}}"#)
            .create_async()
            .await,
        server
            .mock("GET", "/api/transactions")
            .with_body("[]")
            .create_async()
            .await,
        server
            .mock("GET", "/api/transactions/user123")
            .with_body("[]")
            .create_async()
            .await,
        server
            .mock("GET", "/api/settlement/user123")
            .with_body(r#"{"user_id": "user123", "balance": "7412.50"}"#)
            .create_async()
            .await,
    ]
}

fn demo_config(erase_after_run: bool) -> DemoConfig {
    DemoConfig {
        user_id: "user123".to_string(),
        erase_after_run,
    }
}

#[tokio::test]
async fn test_demo_uses_created_transaction_id() {
    let mut server = mockito::Server::new_async().await;
    let _routes = mock_read_routes(&mut server).await;

    let creates = server
        .mock("POST", "/api/transactions")
        .with_body(r#"{"id": 42, "message": "Transaction recorded"}"#)
        .expect(3)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/transactions/42")
        .match_body(Matcher::Json(json!({
            "quantity": 15,
            "type": "buy",
            "asset_type": "stock"
        })))
        .with_body(r#"{"message": "updated"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/transactions/42")
        .with_body(r#"{"message": "deleted"}"#)
        .create_async()
        .await;
    let erase = server
        .mock("DELETE", "/api/erase")
        .expect(0)
        .create_async()
        .await;

    let mut harness = harness_for(&server);
    run_demo(&mut harness, &demo_config(false)).await;

    creates.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
    erase.assert_async().await;

    let labels: Vec<_> = harness.outcomes().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Update Settlement Balance (user123)",
            "Search Assets (AAPL)",
            "Get Quote (AAPL)",
            "Create Transaction",
            "Create Transaction",
            "Create Transaction",
            "Get Portfolio (user123)",
            "Get All Transactions",
            "Get User Transactions (user123)",
            "Update Transaction (42)",
            "Delete Transaction (42)",
            "Get Settlement Balance (user123)",
        ]
    );
    assert!(harness.outcomes().iter().all(|o| o.is_success()));
}

#[tokio::test]
async fn test_demo_falls_back_to_first_id_and_can_erase() {
    let mut server = mockito::Server::new_async().await;
    let _routes = mock_read_routes(&mut server).await;

    let _creates = server
        .mock("POST", "/api/transactions")
        .with_status(500)
        .with_body(r#"{"error": "Failed to create transaction"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/transactions/1")
        .with_body("{}")
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/transactions/1")
        .with_body("{}")
        .create_async()
        .await;
    let erase = server
        .mock("DELETE", "/api/erase")
        .with_body(r#"{"message": "All transactions and settlement accounts erased"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut harness = harness_for(&server);
    run_demo(&mut harness, &demo_config(true)).await;

    update.assert_async().await;
    delete.assert_async().await;
    erase.assert_async().await;

    assert_eq!(harness.outcomes().len(), 13);
    let last = harness.outcomes().last().unwrap();
    assert_eq!(last.label, "Erase All Data");
}

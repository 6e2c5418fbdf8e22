use crate::common::client_for;
use mockito::Matcher;
use portfolio_harness::application::interfaces::portfolio::PortfolioService;
use portfolio_harness::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, TimeSeriesQuery,
    UpdateTransactionRequest,
};
use portfolio_harness::model::responses::ResponseBody;
use portfolio_harness::presentation::transaction::{AssetType, TransactionType};
use serde_json::json;

#[tokio::test]
async fn test_get_routes_hit_expected_paths() {
    let mut server = mockito::Server::new_async().await;
    let mocks = vec![
        server.mock("GET", "/api/search/AAPL").with_body("[]").create_async().await,
        server.mock("GET", "/api/quote/AAPL").with_body("{}").create_async().await,
        server.mock("GET", "/api/portfolio/user123").with_body("{}").create_async().await,
        server.mock("GET", "/api/transactions").with_body("[]").create_async().await,
        server.mock("GET", "/api/transactions/user123").with_body("[]").create_async().await,
        server.mock("GET", "/api/settlement/user123").with_body("{}").create_async().await,
        server.mock("GET", "/api/top-movers").with_body("[]").create_async().await,
        server
            .mock("GET", "/api/settlement_transactions/user123")
            .with_body("[]")
            .create_async()
            .await,
    ];

    let client = client_for(&server);
    assert_eq!(client.search_assets("AAPL").await.unwrap().status, 200);
    assert_eq!(client.get_quote("AAPL").await.unwrap().status, 200);
    assert_eq!(client.get_portfolio("user123").await.unwrap().status, 200);
    assert_eq!(client.get_all_transactions().await.unwrap().status, 200);
    assert_eq!(client.get_user_transactions("user123").await.unwrap().status, 200);
    assert_eq!(client.get_settlement_balance("user123").await.unwrap().status, 200);
    assert_eq!(client.get_top_movers().await.unwrap().status, 200);
    assert_eq!(
        client.get_settlement_transactions("user123").await.unwrap().status,
        200
    );

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_create_transaction_sends_exact_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/transactions")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "user_id": "user123",
            "symbol": "TLT",
            "quantity": 5,
            "type": "buy",
            "asset_type": "bond"
        })))
        .with_status(200)
        .with_body(r#"{"id": 2}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request =
        CreateTransactionRequest::new("user123", "TLT", 5, TransactionType::Buy, AssetType::Bond);
    let response = client.create_transaction(&request).await.unwrap();

    assert_eq!(response.field("id"), Some(&json!(2)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_and_delete_transaction() {
    let mut server = mockito::Server::new_async().await;
    let update = server
        .mock("PUT", "/api/transactions/7")
        .match_body(Matcher::Json(json!({
            "quantity": 15,
            "type": "buy",
            "asset_type": "stock"
        })))
        .with_body(r#"{"message": "updated"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/transactions/7")
        .with_body(r#"{"message": "deleted"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = UpdateTransactionRequest::new(15, TransactionType::Buy, AssetType::Stock);
    assert_eq!(client.update_transaction(7, &request).await.unwrap().status, 200);
    assert_eq!(client.delete_transaction(7).await.unwrap().status, 200);

    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_settlement_writes() {
    let mut server = mockito::Server::new_async().await;
    let set = server
        .mock("POST", "/api/settlement/user123")
        .match_body(Matcher::Json(json!({"balance": 10000.0})))
        .with_body(r#"{"user_id": "user123", "balance": "10000.00"}"#)
        .create_async()
        .await;
    let adjust = server
        .mock("POST", "/api/settlement/user123")
        .match_body(Matcher::Json(json!({"amount": 200.0, "action": "withdraw"})))
        .with_body(r#"{"user_id": "user123", "balance": "9800.00"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.set_settlement_balance("user123", 10000.0).await.unwrap();
    let response = client
        .adjust_settlement_balance("user123", &SettlementAdjustmentRequest::withdraw(200.0))
        .await
        .unwrap();

    assert_eq!(response.field("balance"), Some(&json!("9800.00")));
    set.assert_async().await;
    adjust.assert_async().await;
}

#[tokio::test]
async fn test_erase_all_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/erase")
        .with_status(403)
        .with_body(r#"{"error": "Invalid sudo key"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.erase_all_data().await.unwrap();

    assert_eq!(response.status, 403);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_time_series_query_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/time_series/AAPL")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("interval".into(), "1wk".into()),
            Matcher::UrlEncoded("range".into(), "1y".into()),
        ]))
        .with_body(r#"[{"datetime": "2026-10-16", "close": 231.2}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = TimeSeriesQuery::new().with_interval("1wk").with_range("1y");
    let response = client.get_time_series("AAPL", &query).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(matches!(response.body, ResponseBody::Json(ref v) if v.is_array()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_statuses_are_not_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/quote/NOPE")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.get_quote("NOPE").await.unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(
        response.body,
        ResponseBody::Text("Internal Server Error".to_string())
    );
}

#[tokio::test]
async fn test_client_keeps_its_config() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server);
    assert_eq!(client.get_config().rest_api.base_url, server.url());
}

use assert_json_diff::assert_json_eq;
use portfolio_harness::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, SettlementBalanceRequest,
    TimeSeriesQuery, UpdateTransactionRequest,
};
use portfolio_harness::presentation::transaction::{AssetType, TransactionType};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn create_transaction_has_exactly_the_documented_keys() {
    let request =
        CreateTransactionRequest::new("user123", "AAPL", 10, TransactionType::Buy, AssetType::Stock);

    assert_json_eq!(
        json_value(&request),
        json!({
            "user_id": "user123",
            "symbol": "AAPL",
            "quantity": 10,
            "type": "buy",
            "asset_type": "stock"
        })
    );
}

#[test]
fn create_transaction_mutual_fund_is_snake_case() {
    let request = CreateTransactionRequest::new(
        "user123",
        "VTSAX",
        8,
        TransactionType::Buy,
        AssetType::MutualFund,
    );
    assert_eq!(json_value(&request)["asset_type"], "mutual_fund");
}

#[test]
fn update_transaction_has_no_user_or_symbol() {
    let request = UpdateTransactionRequest::new(15, TransactionType::Sell, AssetType::Bond);

    assert_json_eq!(
        json_value(&request),
        json!({"quantity": 15, "type": "sell", "asset_type": "bond"})
    );
}

#[test]
fn settlement_payloads() {
    assert_json_eq!(
        json_value(&SettlementBalanceRequest { balance: 10000.0 }),
        json!({"balance": 10000.0})
    );
    assert_json_eq!(
        json_value(&SettlementAdjustmentRequest::withdraw(200.5)),
        json!({"amount": 200.5, "action": "withdraw"})
    );
    assert_json_eq!(
        json_value(&SettlementAdjustmentRequest::add(1000.0)),
        json!({"amount": 1000.0, "action": "add"})
    );
}

#[test]
fn create_transaction_round_trips_type_field() {
    let parsed: CreateTransactionRequest = serde_json::from_value(json!({
        "user_id": "u",
        "symbol": "TLT",
        "quantity": 5,
        "type": "sell",
        "asset_type": "bond"
    }))
    .unwrap();
    assert_eq!(parsed.transaction_type, TransactionType::Sell);
    assert_eq!(parsed.asset_type, AssetType::Bond);
}

#[test]
fn time_series_query_builders() {
    let query = TimeSeriesQuery::new()
        .with_interval("1wk")
        .with_range("1y")
        .with_region("GB");

    assert!(!query.is_empty());
    assert_json_eq!(
        json_value(&query),
        json!({"interval": "1wk", "range": "1y", "region": "GB"})
    );
}

#[test]
fn time_series_query_omits_unset_params() {
    let query = TimeSeriesQuery::new().with_interval("1d");
    assert_json_eq!(json_value(&query), json!({"interval": "1d"}));
    assert!(TimeSeriesQuery::new().is_empty());
}

use crate::application::config::DemoConfig;
use crate::application::harness::Harness;
use crate::application::interfaces::portfolio::PortfolioService;
use crate::constants::{DEFAULT_SETTLEMENT_BALANCE, FALLBACK_TRANSACTION_ID};
use crate::model::responses::ApiResponse;
use crate::presentation::transaction::{AssetType, TransactionType};
use std::io::Write;
use tracing::{info, warn};

/// Runs the fixed demonstration sequence once, in order
///
/// Update and delete target the id returned by the first successful
/// create-transaction call. When none of them returned an `id`, the sequence
/// falls back to [`FALLBACK_TRANSACTION_ID`] and logs that the id is assumed.
pub async fn run_demo<S: PortfolioService, W: Write>(
    harness: &mut Harness<S, W>,
    config: &DemoConfig,
) {
    let user = config.user_id.as_str();
    info!("Running demo sequence for {}", user);

    harness
        .set_settlement_balance(user, DEFAULT_SETTLEMENT_BALANCE)
        .await;

    harness.search_assets("AAPL").await;
    harness.get_quote("AAPL").await;

    let mut created = Vec::new();
    for (symbol, quantity, asset_type) in [
        ("AAPL", 10, AssetType::Stock),
        ("TLT", 5, AssetType::Bond),
        ("VTSAX", 8, AssetType::MutualFund),
    ] {
        let response = harness
            .create_transaction(user, symbol, quantity, TransactionType::Buy, asset_type)
            .await;
        created.extend(response);
    }

    harness.get_portfolio(user).await;
    harness.get_all_transactions().await;
    harness.get_user_transactions(user).await;

    let transaction_id = first_created_id(&created).unwrap_or_else(|| {
        warn!(
            "No created transaction id available, assuming id {} exists",
            FALLBACK_TRANSACTION_ID
        );
        FALLBACK_TRANSACTION_ID
    });

    harness
        .update_transaction(transaction_id, 15, TransactionType::Buy, AssetType::Stock)
        .await;
    harness.delete_transaction(transaction_id).await;

    harness.get_settlement_balance(user).await;

    if config.erase_after_run {
        warn!("Erasing all service data");
        harness.erase_all_data().await;
    }
}

/// Id of the first 2xx response carrying a numeric or numeric-string `id`
pub fn first_created_id(responses: &[ApiResponse]) -> Option<u64> {
    responses
        .iter()
        .filter(|r| r.is_success())
        .filter_map(|r| r.field("id"))
        .find_map(|id| {
            id.as_u64()
                .or_else(|| id.as_str().and_then(|s| s.parse().ok()))
        })
}

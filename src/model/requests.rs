/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::transaction::{AssetType, SettlementAction, TransactionType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/transactions`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateTransactionRequest {
    /// Owner of the transaction
    pub user_id: String,
    /// Ticker of the traded asset
    pub symbol: String,
    /// Number of units
    pub quantity: u32,
    /// Buy or sell
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Asset classification
    pub asset_type: AssetType,
}

impl CreateTransactionRequest {
    /// Creates a new transaction payload
    pub fn new(
        user_id: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u32,
        transaction_type: TransactionType,
        asset_type: AssetType,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            symbol: symbol.into(),
            quantity,
            transaction_type,
            asset_type,
        }
    }
}

/// Body of `PUT /api/transactions/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpdateTransactionRequest {
    /// New number of units
    pub quantity: u32,
    /// Buy or sell
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Asset classification
    pub asset_type: AssetType,
}

impl UpdateTransactionRequest {
    /// Creates a new update payload
    pub fn new(quantity: u32, transaction_type: TransactionType, asset_type: AssetType) -> Self {
        Self {
            quantity,
            transaction_type,
            asset_type,
        }
    }
}

/// Body of `POST /api/settlement/{user_id}` when the balance is set outright
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Deserialize, Serialize)]
pub struct SettlementBalanceRequest {
    /// New cash balance
    pub balance: f64,
}

/// Body of `POST /api/settlement/{user_id}` when crediting or debiting the account
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Deserialize, Serialize)]
pub struct SettlementAdjustmentRequest {
    /// Amount to move
    pub amount: f64,
    /// Add or withdraw
    pub action: SettlementAction,
}

impl SettlementAdjustmentRequest {
    /// Credit `amount`
    pub fn add(amount: f64) -> Self {
        Self {
            amount,
            action: SettlementAction::Add,
        }
    }

    /// Debit `amount`
    pub fn withdraw(amount: f64) -> Self {
        Self {
            amount,
            action: SettlementAction::Withdraw,
        }
    }
}

/// Query parameters for `GET /api/time_series/{symbol}`
///
/// Unset parameters are left out of the query string so the service applies
/// its own defaults (`1d`, `1mo`, `US`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TimeSeriesQuery {
    /// Sampling interval, e.g. `1d`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Lookback window, e.g. `1mo`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Market region, e.g. `US`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl TimeSeriesQuery {
    /// Query with every parameter left to the service defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interval
    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Set the range
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Returns true if no parameter is set
    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && self.range.is_none() && self.region.is_none()
    }
}

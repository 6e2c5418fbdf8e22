use crate::error::AppError;
use crate::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, TimeSeriesQuery,
    UpdateTransactionRequest,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the portfolio service
///
/// Every method performs one round trip. A response with any HTTP status is
/// `Ok`; `Err` is reserved for failures to obtain a response at all.
#[async_trait]
pub trait PortfolioService: Send + Sync {
    /// Searches assets matching `query`
    async fn search_assets(&self, query: &str) -> Result<ApiResponse, AppError>;

    /// Gets the real-time quote for `symbol`
    async fn get_quote(&self, symbol: &str) -> Result<ApiResponse, AppError>;

    /// Records a buy or sell transaction
    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<ApiResponse, AppError>;

    /// Gets the portfolio of `user_id`, including its diversification
    async fn get_portfolio(&self, user_id: &str) -> Result<ApiResponse, AppError>;

    /// Gets every transaction known to the service
    async fn get_all_transactions(&self) -> Result<ApiResponse, AppError>;

    /// Gets the transactions of `user_id`
    async fn get_user_transactions(&self, user_id: &str) -> Result<ApiResponse, AppError>;

    /// Replaces quantity, type and asset type of an existing transaction
    async fn update_transaction(
        &self,
        transaction_id: u64,
        request: &UpdateTransactionRequest,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes a transaction
    async fn delete_transaction(&self, transaction_id: u64) -> Result<ApiResponse, AppError>;

    /// Gets the settlement balance of `user_id`
    async fn get_settlement_balance(&self, user_id: &str) -> Result<ApiResponse, AppError>;

    /// Sets the settlement balance of `user_id`
    async fn set_settlement_balance(
        &self,
        user_id: &str,
        balance: f64,
    ) -> Result<ApiResponse, AppError>;

    /// Credits or debits the settlement account of `user_id`
    async fn adjust_settlement_balance(
        &self,
        user_id: &str,
        request: &SettlementAdjustmentRequest,
    ) -> Result<ApiResponse, AppError>;

    /// Gets the settlement account movements of `user_id`
    async fn get_settlement_transactions(&self, user_id: &str) -> Result<ApiResponse, AppError>;

    /// Wipes all service data
    async fn erase_all_data(&self) -> Result<ApiResponse, AppError>;

    /// Gets the current top market movers
    async fn get_top_movers(&self) -> Result<ApiResponse, AppError>;

    /// Gets the closing-price series of `symbol`
    async fn get_time_series(
        &self,
        symbol: &str,
        query: &TimeSeriesQuery,
    ) -> Result<ApiResponse, AppError>;
}

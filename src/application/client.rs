/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::portfolio::PortfolioService;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, SettlementBalanceRequest,
    TimeSeriesQuery, UpdateTransactionRequest,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Client for the portfolio service REST API
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client for the service described by `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config)?);
        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl PortfolioService for Client {
    async fn search_assets(&self, query: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::SearchAssets {
            query: query.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn get_quote(&self, symbol: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::Quote {
            symbol: symbol.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<ApiResponse, AppError> {
        debug!(
            "Creating {} of {} {} for {}",
            request.transaction_type, request.quantity, request.symbol, request.user_id
        );
        self.http_client
            .send_json(&Endpoint::CreateTransaction, request)
            .await
    }

    async fn get_portfolio(&self, user_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::Portfolio {
            user_id: user_id.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn get_all_transactions(&self) -> Result<ApiResponse, AppError> {
        self.http_client.send(&Endpoint::AllTransactions).await
    }

    async fn get_user_transactions(&self, user_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::UserTransactions {
            user_id: user_id.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn update_transaction(
        &self,
        transaction_id: u64,
        request: &UpdateTransactionRequest,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::UpdateTransaction { transaction_id };
        self.http_client.send_json(&endpoint, request).await
    }

    async fn delete_transaction(&self, transaction_id: u64) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::DeleteTransaction { transaction_id };
        self.http_client.send(&endpoint).await
    }

    async fn get_settlement_balance(&self, user_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::SettlementBalance {
            user_id: user_id.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn set_settlement_balance(
        &self,
        user_id: &str,
        balance: f64,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::SetSettlementBalance {
            user_id: user_id.to_string(),
        };
        self.http_client
            .send_json(&endpoint, &SettlementBalanceRequest { balance })
            .await
    }

    async fn adjust_settlement_balance(
        &self,
        user_id: &str,
        request: &SettlementAdjustmentRequest,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::AdjustSettlementBalance {
            user_id: user_id.to_string(),
        };
        self.http_client.send_json(&endpoint, request).await
    }

    async fn get_settlement_transactions(&self, user_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::SettlementTransactions {
            user_id: user_id.to_string(),
        };
        self.http_client.send(&endpoint).await
    }

    async fn erase_all_data(&self) -> Result<ApiResponse, AppError> {
        self.http_client.send(&Endpoint::EraseAll).await
    }

    async fn get_top_movers(&self) -> Result<ApiResponse, AppError> {
        self.http_client.send(&Endpoint::TopMovers).await
    }

    async fn get_time_series(
        &self,
        symbol: &str,
        query: &TimeSeriesQuery,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = Endpoint::TimeSeries {
            symbol: symbol.to_string(),
        };
        if query.is_empty() {
            self.http_client.send(&endpoint).await
        } else {
            self.http_client.send_query(&endpoint, query).await
        }
    }
}

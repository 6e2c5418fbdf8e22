/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::portfolio::PortfolioService;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, TimeSeriesQuery,
    UpdateTransactionRequest,
};
use crate::model::responses::ApiResponse;
use crate::presentation::report::{write_error, write_response};
use crate::presentation::summary::{Outcome, OutcomeResult, OutcomeTable};
use crate::presentation::transaction::{AssetType, TransactionType};
use std::io::Write;
use tracing::{debug, error};

/// Drives a [`PortfolioService`] one call at a time and prints every outcome
///
/// Each operation writes `<label>: <status>` and the pretty-printed body to
/// `out`, or `Error <action>: <cause>` when no response could be obtained.
/// Failures never escape: operations return `None` instead and the harness
/// moves on.
pub struct Harness<S: PortfolioService, W: Write> {
    service: S,
    out: W,
    outcomes: Vec<Outcome>,
}

impl<S: PortfolioService, W: Write> Harness<S, W> {
    /// Creates a harness printing to `out`
    pub fn new(service: S, out: W) -> Self {
        Self {
            service,
            out,
            outcomes: Vec::new(),
        }
    }

    /// Calls made so far, in order
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Consumes the harness, returning the writer and the recorded outcomes
    pub fn into_parts(self) -> (W, Vec<Outcome>) {
        (self.out, self.outcomes)
    }

    /// `GET /api/search/{query}`
    pub async fn search_assets(&mut self, query: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::SearchAssets {
            query: query.to_string(),
        };
        let result = self.service.search_assets(query).await;
        self.record(endpoint, result)
    }

    /// `GET /api/quote/{symbol}`
    pub async fn get_quote(&mut self, symbol: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::Quote {
            symbol: symbol.to_string(),
        };
        let result = self.service.get_quote(symbol).await;
        self.record(endpoint, result)
    }

    /// `POST /api/transactions`
    pub async fn create_transaction(
        &mut self,
        user_id: &str,
        symbol: &str,
        quantity: u32,
        transaction_type: TransactionType,
        asset_type: AssetType,
    ) -> Option<ApiResponse> {
        let request =
            CreateTransactionRequest::new(user_id, symbol, quantity, transaction_type, asset_type);
        let result = self.service.create_transaction(&request).await;
        self.record(Endpoint::CreateTransaction, result)
    }

    /// `GET /api/portfolio/{user_id}`
    pub async fn get_portfolio(&mut self, user_id: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::Portfolio {
            user_id: user_id.to_string(),
        };
        let result = self.service.get_portfolio(user_id).await;
        self.record(endpoint, result)
    }

    /// `GET /api/transactions`
    pub async fn get_all_transactions(&mut self) -> Option<ApiResponse> {
        let result = self.service.get_all_transactions().await;
        self.record(Endpoint::AllTransactions, result)
    }

    /// `GET /api/transactions/{user_id}`
    pub async fn get_user_transactions(&mut self, user_id: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::UserTransactions {
            user_id: user_id.to_string(),
        };
        let result = self.service.get_user_transactions(user_id).await;
        self.record(endpoint, result)
    }

    /// `PUT /api/transactions/{transaction_id}`
    pub async fn update_transaction(
        &mut self,
        transaction_id: u64,
        quantity: u32,
        transaction_type: TransactionType,
        asset_type: AssetType,
    ) -> Option<ApiResponse> {
        let request = UpdateTransactionRequest::new(quantity, transaction_type, asset_type);
        let result = self
            .service
            .update_transaction(transaction_id, &request)
            .await;
        self.record(Endpoint::UpdateTransaction { transaction_id }, result)
    }

    /// `DELETE /api/transactions/{transaction_id}`
    pub async fn delete_transaction(&mut self, transaction_id: u64) -> Option<ApiResponse> {
        let result = self.service.delete_transaction(transaction_id).await;
        self.record(Endpoint::DeleteTransaction { transaction_id }, result)
    }

    /// `GET /api/settlement/{user_id}`
    pub async fn get_settlement_balance(&mut self, user_id: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::SettlementBalance {
            user_id: user_id.to_string(),
        };
        let result = self.service.get_settlement_balance(user_id).await;
        self.record(endpoint, result)
    }

    /// `POST /api/settlement/{user_id}` with `{balance}`
    pub async fn set_settlement_balance(
        &mut self,
        user_id: &str,
        balance: f64,
    ) -> Option<ApiResponse> {
        let endpoint = Endpoint::SetSettlementBalance {
            user_id: user_id.to_string(),
        };
        let result = self.service.set_settlement_balance(user_id, balance).await;
        self.record(endpoint, result)
    }

    /// `POST /api/settlement/{user_id}` with `{amount, action}`
    pub async fn adjust_settlement_balance(
        &mut self,
        user_id: &str,
        request: SettlementAdjustmentRequest,
    ) -> Option<ApiResponse> {
        let endpoint = Endpoint::AdjustSettlementBalance {
            user_id: user_id.to_string(),
        };
        let result = self
            .service
            .adjust_settlement_balance(user_id, &request)
            .await;
        self.record(endpoint, result)
    }

    /// `GET /api/settlement_transactions/{user_id}`
    pub async fn get_settlement_transactions(&mut self, user_id: &str) -> Option<ApiResponse> {
        let endpoint = Endpoint::SettlementTransactions {
            user_id: user_id.to_string(),
        };
        let result = self.service.get_settlement_transactions(user_id).await;
        self.record(endpoint, result)
    }

    /// `DELETE /api/erase`
    pub async fn erase_all_data(&mut self) -> Option<ApiResponse> {
        let result = self.service.erase_all_data().await;
        self.record(Endpoint::EraseAll, result)
    }

    /// `GET /api/top-movers`
    pub async fn get_top_movers(&mut self) -> Option<ApiResponse> {
        let result = self.service.get_top_movers().await;
        self.record(Endpoint::TopMovers, result)
    }

    /// `GET /api/time_series/{symbol}`
    pub async fn get_time_series(
        &mut self,
        symbol: &str,
        query: TimeSeriesQuery,
    ) -> Option<ApiResponse> {
        let endpoint = Endpoint::TimeSeries {
            symbol: symbol.to_string(),
        };
        let result = self.service.get_time_series(symbol, &query).await;
        self.record(endpoint, result)
    }

    /// Prints the table of every call made so far
    pub fn print_summary(&mut self) {
        let table = OutcomeTable(&self.outcomes).to_string();
        if let Err(e) = write!(self.out, "{table}").and_then(|_| self.out.flush()) {
            error!("Failed to write summary: {e}");
        }
    }

    fn record(
        &mut self,
        endpoint: Endpoint,
        result: Result<ApiResponse, AppError>,
    ) -> Option<ApiResponse> {
        let label = endpoint.label();
        let (written, outcome, response) = match result {
            Ok(response) => {
                debug!("{} -> {}", endpoint, response.status);
                let written = write_response(&mut self.out, &label, &response);
                let outcome = Outcome::new(&endpoint, OutcomeResult::Status(response.status));
                (written, outcome, Some(response))
            }
            Err(e) => {
                error!("{} failed: {}", endpoint, e);
                let written = write_error(&mut self.out, endpoint.action(), &e);
                let outcome = Outcome::new(&endpoint, OutcomeResult::Failed(e.to_string()));
                (written, outcome, None)
            }
        };
        if let Err(e) = written.and_then(|_| self.out.flush()) {
            error!("Failed to write report for {}: {}", label, e);
        }
        self.outcomes.push(outcome);
        response
    }
}

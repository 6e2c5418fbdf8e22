/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::Method;
use std::fmt;

/// One route of the portfolio service together with its path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/search/{query}`
    SearchAssets {
        /// Free text search term
        query: String,
    },
    /// `GET /api/quote/{symbol}`
    Quote {
        /// Ticker
        symbol: String,
    },
    /// `POST /api/transactions`
    CreateTransaction,
    /// `GET /api/portfolio/{user_id}`
    Portfolio {
        /// Portfolio owner
        user_id: String,
    },
    /// `GET /api/transactions`
    AllTransactions,
    /// `GET /api/transactions/{user_id}`
    UserTransactions {
        /// Transaction owner
        user_id: String,
    },
    /// `PUT /api/transactions/{transaction_id}`
    UpdateTransaction {
        /// Service assigned id
        transaction_id: u64,
    },
    /// `DELETE /api/transactions/{transaction_id}`
    DeleteTransaction {
        /// Service assigned id
        transaction_id: u64,
    },
    /// `GET /api/settlement/{user_id}`
    SettlementBalance {
        /// Account owner
        user_id: String,
    },
    /// `POST /api/settlement/{user_id}` with `{balance}`
    SetSettlementBalance {
        /// Account owner
        user_id: String,
    },
    /// `POST /api/settlement/{user_id}` with `{amount, action}`
    AdjustSettlementBalance {
        /// Account owner
        user_id: String,
    },
    /// `GET /api/settlement_transactions/{user_id}`
    SettlementTransactions {
        /// Account owner
        user_id: String,
    },
    /// `DELETE /api/erase`
    EraseAll,
    /// `GET /api/top-movers`
    TopMovers,
    /// `GET /api/time_series/{symbol}`
    TimeSeries {
        /// Ticker
        symbol: String,
    },
}

impl Endpoint {
    /// HTTP method of the route
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateTransaction
            | Endpoint::SetSettlementBalance { .. }
            | Endpoint::AdjustSettlementBalance { .. } => Method::POST,
            Endpoint::UpdateTransaction { .. } => Method::PUT,
            Endpoint::DeleteTransaction { .. } | Endpoint::EraseAll => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Raw path segments, unencoded; the client encodes each one separately
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec!["api".to_string()];
        match self {
            Endpoint::SearchAssets { query } => {
                segments.extend(["search".to_string(), query.clone()])
            }
            Endpoint::Quote { symbol } => segments.extend(["quote".to_string(), symbol.clone()]),
            Endpoint::CreateTransaction | Endpoint::AllTransactions => {
                segments.push("transactions".to_string())
            }
            Endpoint::Portfolio { user_id } => {
                segments.extend(["portfolio".to_string(), user_id.clone()])
            }
            Endpoint::UserTransactions { user_id } => {
                segments.extend(["transactions".to_string(), user_id.clone()])
            }
            Endpoint::UpdateTransaction { transaction_id }
            | Endpoint::DeleteTransaction { transaction_id } => {
                segments.extend(["transactions".to_string(), transaction_id.to_string()])
            }
            Endpoint::SettlementBalance { user_id }
            | Endpoint::SetSettlementBalance { user_id }
            | Endpoint::AdjustSettlementBalance { user_id } => {
                segments.extend(["settlement".to_string(), user_id.clone()])
            }
            Endpoint::SettlementTransactions { user_id } => {
                segments.extend(["settlement_transactions".to_string(), user_id.clone()])
            }
            Endpoint::EraseAll => segments.push("erase".to_string()),
            Endpoint::TopMovers => segments.push("top-movers".to_string()),
            Endpoint::TimeSeries { symbol } => {
                segments.extend(["time_series".to_string(), symbol.clone()])
            }
        }
        segments
    }

    /// Path template filled with the raw parameters, e.g. `/api/search/AAPL`
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Heading printed above the response
    pub fn label(&self) -> String {
        match self {
            Endpoint::SearchAssets { query } => format!("Search Assets ({query})"),
            Endpoint::Quote { symbol } => format!("Get Quote ({symbol})"),
            Endpoint::CreateTransaction => "Create Transaction".to_string(),
            Endpoint::Portfolio { user_id } => format!("Get Portfolio ({user_id})"),
            Endpoint::AllTransactions => "Get All Transactions".to_string(),
            Endpoint::UserTransactions { user_id } => {
                format!("Get User Transactions ({user_id})")
            }
            Endpoint::UpdateTransaction { transaction_id } => {
                format!("Update Transaction ({transaction_id})")
            }
            Endpoint::DeleteTransaction { transaction_id } => {
                format!("Delete Transaction ({transaction_id})")
            }
            Endpoint::SettlementBalance { user_id } => {
                format!("Get Settlement Balance ({user_id})")
            }
            Endpoint::SetSettlementBalance { user_id } => {
                format!("Update Settlement Balance ({user_id})")
            }
            Endpoint::AdjustSettlementBalance { user_id } => {
                format!("Adjust Settlement Balance ({user_id})")
            }
            Endpoint::SettlementTransactions { user_id } => {
                format!("Get Settlement Transactions ({user_id})")
            }
            Endpoint::EraseAll => "Erase All Data".to_string(),
            Endpoint::TopMovers => "Get Top Movers".to_string(),
            Endpoint::TimeSeries { symbol } => format!("Get Time Series ({symbol})"),
        }
    }

    /// Phrase used in `Error <action>: <cause>` lines
    pub fn action(&self) -> &'static str {
        match self {
            Endpoint::SearchAssets { .. } => "searching assets",
            Endpoint::Quote { .. } => "fetching quote",
            Endpoint::CreateTransaction => "creating transaction",
            Endpoint::Portfolio { .. } => "fetching portfolio",
            Endpoint::AllTransactions => "fetching transactions",
            Endpoint::UserTransactions { .. } => "fetching user transactions",
            Endpoint::UpdateTransaction { .. } => "updating transaction",
            Endpoint::DeleteTransaction { .. } => "deleting transaction",
            Endpoint::SettlementBalance { .. } => "fetching settlement balance",
            Endpoint::SetSettlementBalance { .. } => "setting settlement balance",
            Endpoint::AdjustSettlementBalance { .. } => "adjusting settlement balance",
            Endpoint::SettlementTransactions { .. } => "fetching settlement transactions",
            Endpoint::EraseAll => "erasing data",
            Endpoint::TopMovers => "fetching top movers",
            Endpoint::TimeSeries { .. } => "fetching time series",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

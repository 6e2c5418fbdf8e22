/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Portfolio Harness Prelude
//!
//! Brings the client, the harness and the request models into scope with a
//! single import.
//!
//! ```rust
//! use portfolio_harness::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:3000");
//! assert_eq!(config.rest_api.base_url, "http://localhost:3000");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the harness
pub use crate::application::config::{Config, DemoConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICE AND CLIENT
// ============================================================================

/// Portfolio service trait
pub use crate::application::interfaces::portfolio::PortfolioService;

/// REST implementation of the portfolio service
pub use crate::application::client::Client;

/// Low level HTTP client
pub use crate::model::http::HttpClient;

// ============================================================================
// HARNESS
// ============================================================================

/// Request harness and demonstration sequence
pub use crate::application::demo::run_demo;
pub use crate::application::harness::Harness;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::endpoint::Endpoint;
pub use crate::model::requests::{
    CreateTransactionRequest, SettlementAdjustmentRequest, SettlementBalanceRequest,
    TimeSeriesQuery, UpdateTransactionRequest,
};
pub use crate::model::responses::{ApiResponse, ResponseBody};
pub use crate::presentation::{
    AssetType, Outcome, OutcomeResult, OutcomeTable, SettlementAction, TransactionType,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};

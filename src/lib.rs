//! # Portfolio Harness
//!
//! Manual integration harness for a locally running portfolio web service.
//! Every endpoint of the service (asset search, quotes, transactions,
//! portfolio summaries and settlement balances) is exposed as one call that
//! prints the HTTP status and the pretty-printed body, or an error line when
//! the service could not be reached.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use portfolio_harness::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::with_base_url("http://localhost:3000"))?;
//!     let mut harness = Harness::new(client, std::io::stdout());
//!     harness.search_assets("AAPL").await;
//!     harness.set_settlement_balance("user123", 10000.0).await;
//!     harness.print_summary();
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `PORTFOLIO_BASE_URL` | `http://localhost:3000` |
//! | `PORTFOLIO_TIMEOUT` | `30` (seconds) |
//! | `PORTFOLIO_USER_ID` | `user123` |
//! | `PORTFOLIO_ERASE_AFTER_RUN` | `false` |
//! | `LOGLEVEL` | `INFO` |
//!
//! Variables may also be placed in a `.env` file.

/// Client, configuration, harness and demo sequence
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Output rendering and shared enums
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

/// Base address of the portfolio service when `PORTFOLIO_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request to the portfolio service
pub const USER_AGENT: &str = "portfolio-harness/0.1.0";
/// User exercised by the demonstration sequence
pub const DEFAULT_DEMO_USER: &str = "user123";
/// Opening settlement balance seeded by the demonstration sequence
pub const DEFAULT_SETTLEMENT_BALANCE: f64 = 10000.0;
/// Transaction id used for update/delete when no create call returned one.
///
/// Nothing guarantees a transaction with this id exists on the service; the
/// demo logs a warning whenever it has to fall back to it.
pub const FALLBACK_TRANSACTION_ID: u64 = 1;

/// Rendering of single responses and errors
pub mod report;
/// Summary table of a harness run
pub mod summary;
/// Transaction and settlement enums shared by requests
pub mod transaction;

pub use summary::{Outcome, OutcomeResult, OutcomeTable};
pub use transaction::{AssetType, SettlementAction, TransactionType};

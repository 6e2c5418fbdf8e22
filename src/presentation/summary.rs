/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::endpoint::Endpoint;
use prettytable::format;
use prettytable::{Cell, Row, Table};
use std::fmt;

/// What happened to one harness call
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeResult {
    /// The service answered with this status
    Status(u16),
    /// No response was obtained
    Failed(String),
}

/// Record of one harness call, kept for the closing summary
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Heading printed for the call
    pub label: String,
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
    /// Status or failure
    pub result: OutcomeResult,
}

impl Outcome {
    /// Creates an outcome for `endpoint`
    pub fn new(endpoint: &Endpoint, result: OutcomeResult) -> Self {
        Self {
            label: endpoint.label(),
            method: endpoint.method().to_string(),
            path: endpoint.path(),
            result,
        }
    }

    /// True if the service answered with a 2xx status
    pub fn is_success(&self) -> bool {
        matches!(self.result, OutcomeResult::Status(status) if (200..300).contains(&status))
    }
}

impl fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeResult::Status(status) => write!(f, "{status}"),
            OutcomeResult::Failed(cause) => write!(f, "error: {cause}"),
        }
    }
}

/// Box-drawn table of every call made during a run
pub struct OutcomeTable<'a>(pub &'a [Outcome]);

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("#"),
            Cell::new("OPERATION"),
            Cell::new("METHOD"),
            Cell::new("PATH"),
            Cell::new("RESULT"),
        ]));

        for (index, outcome) in self.0.iter().enumerate() {
            // Long transport errors would blow up the column width
            let mut result = outcome.result.to_string();
            if result.chars().count() > 60 {
                result = format!("{}...", result.chars().take(57).collect::<String>());
            }

            table.add_row(Row::new(vec![
                Cell::new(&(index + 1).to_string()),
                Cell::new(&outcome.label),
                Cell::new(&outcome.method),
                Cell::new(&outcome.path),
                Cell::new(&result),
            ]));
        }

        let succeeded = self.0.iter().filter(|o| o.is_success()).count();
        write!(f, "{table}")?;
        writeln!(f, "{succeeded}/{} calls returned 2xx", self.0.len())
    }
}

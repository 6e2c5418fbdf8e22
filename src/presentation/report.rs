use crate::error::AppError;
use crate::model::responses::{ApiResponse, ResponseBody};
use std::io::{self, Write};

/// Writes `<label>: <status>` followed by the pretty-printed body
pub fn write_response<W: Write>(
    out: &mut W,
    label: &str,
    response: &ApiResponse,
) -> io::Result<()> {
    writeln!(out, "{label}: {}", response.status)?;
    if response.body != ResponseBody::Empty {
        writeln!(out, "{}", response.body.pretty())?;
    }
    Ok(())
}

/// Writes `Error <action>: <cause>`
pub fn write_error<W: Write>(out: &mut W, action: &str, error: &AppError) -> io::Result<()> {
    writeln!(out, "Error {action}: {error}")
}

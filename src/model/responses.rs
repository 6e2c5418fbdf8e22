/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Payload returned by the portfolio service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResponseBody {
    /// Body parsed as JSON
    Json(Value),
    /// Body that is not valid JSON, kept verbatim
    Text(String),
    /// Zero length body
    Empty,
}

impl ResponseBody {
    /// Classifies raw bytes as JSON, plain text or empty
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ResponseBody::Empty;
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                warn!("Response body is not JSON ({e}), keeping it as text");
                ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }

    /// JSON value, if the body parsed as JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Two-space indented rendering of the body
    pub fn pretty(&self) -> String {
        match self {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Empty => String::new(),
        }
    }
}

/// Status code and body of one round trip, whatever the status
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Numeric HTTP status
    pub status: u16,
    /// Response payload
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Creates a response from its parts
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Drains a `reqwest` response
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        Ok(Self::new(status, ResponseBody::from_bytes(&bytes)))
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up a top level field of a JSON object body
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_json().and_then(|value| value.get(name))
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A remote update that did not succeed.
///
/// Network, permission and validation failures all land here; nothing
/// downstream distinguishes between them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}{}", suffix(.code, .details, .hint))]
pub struct RemoteUpdateFailure {
    /// Human-readable message from the server or the transport.
    pub message: String,
    /// PostgREST / Postgres error code, e.g. `42501`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// HTTP status, absent for transport failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl RemoteUpdateFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

fn suffix(code: &Option<String>, details: &Option<String>, hint: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(code) = code {
        out.push_str(&format!(" (code {code})"));
    }
    if let Some(details) = details {
        out.push_str(&format!(": {details}"));
    }
    if let Some(hint) = hint {
        out.push_str(&format!(" hint: {hint}"));
    }
    out
}

/// Errors raised while building the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Supabase environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid Supabase URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

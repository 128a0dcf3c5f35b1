//! Supabase table access over the PostgREST HTTP interface.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{TableClient, UpdateResult};
use crate::config::SupabaseConfig;
use crate::error::RemoteUpdateFailure;
use crate::payload::UpdatePayload;

const REST_PATH: &str = "rest/v1/";

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// `TableClient` backed by a Supabase project's REST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: Client,
    rest_url: Url,
    schema: Option<String>,
}

impl PostgrestClient {
    /// Creates a client for the project described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be built.
    #[instrument(skip(config), fields(url = %config.url))]
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;
        let rest_url = rest_base(&config.url)?;

        debug!(rest_url = %rest_url, schema = ?config.schema, "Created PostgREST client");

        Ok(Self {
            client,
            rest_url,
            schema: config.schema.clone(),
        })
    }

    /// Base URL of the REST interface, ending in `/rest/v1/`.
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    fn table_url(&self, table: &str) -> Result<Url, RemoteUpdateFailure> {
        self.rest_url
            .join(table)
            .map_err(|e| RemoteUpdateFailure::new(format!("invalid table name {table:?}: {e}")))
    }
}

fn rest_base(project: &Url) -> anyhow::Result<Url> {
    let mut base = project.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(REST_PATH)?)
}

#[async_trait]
impl TableClient for PostgrestClient {
    #[instrument(skip(self, payload))]
    async fn update(&self, table: &str, payload: &UpdatePayload) -> UpdateResult {
        let url = self.table_url(table)?;

        let mut request = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .json(payload);
        if let Some(schema) = &self.schema {
            request = request.header("Content-Profile", schema.as_str());
        }

        debug!(table, "Sending update");

        let response = request.send().await.map_err(|e| {
            debug!(table, error = ?e, "HTTP request failed");
            RemoteUpdateFailure::new(format!("request failed: {e}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            debug!(table, error = ?e, "Failed to read response body");
            RemoteUpdateFailure::new(format!("failed to read response: {e}"))
                .with_status(status.as_u16())
        })?;

        if !status.is_success() {
            debug!(table, status = %status, body = %body, "Update rejected");
            return Err(failure_from_body(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            debug!(table, status = %status, "Update returned no body");
            return Ok(Value::Null);
        }

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            debug!(table, error = ?e, "Failed to parse response");
            RemoteUpdateFailure::new(format!("failed to parse response: {e}"))
                .with_status(status.as_u16())
        })?;

        debug!(
            table,
            rows = data.as_array().map(Vec::len).unwrap_or(0),
            "Update accepted"
        );
        Ok(data)
    }
}

fn failure_from_body(status: u16, body: &str) -> RemoteUpdateFailure {
    let body = body.trim();
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(PostgrestErrorBody {
            message: Some(message),
            code,
            details,
            hint,
        }) => RemoteUpdateFailure {
            message,
            code,
            details,
            hint,
            status: Some(status),
        },
        // Gateway and auth errors use their own shapes; keep the raw body.
        _ if body.is_empty() => {
            RemoteUpdateFailure::new(format!("HTTP {status}")).with_status(status)
        }
        _ => RemoteUpdateFailure::new(format!("HTTP {status}: {body}")).with_status(status),
    }
}

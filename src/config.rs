use reqwest::Url;

use crate::error::ConfigError;

const URL_VARS: &[&str] = &["SUPABASE_URL", "REACT_APP_SUPABASE_URL"];
const KEY_VARS: &[&str] = &[
    "SUPABASE_ANON_KEY",
    "SUPABASE_KEY",
    "REACT_APP_SUPABASE_ANON_KEY",
];
const SCHEMA_VARS: &[&str] = &["SUPABASE_SCHEMA"];

/// Connection settings for a Supabase project.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub url: Url,
    /// Anon or service-role key, sent as both `apikey` and bearer token.
    pub api_key: String,
    /// Postgres schema exposed through PostgREST; `public` when unset.
    pub schema: Option<String>,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &"<redacted>")
            .field("schema", &self.schema)
            .finish()
    }
}

impl SupabaseConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let raw_url = first(URL_VARS).ok_or(ConfigError::Missing(URL_VARS[0]))?;
        let api_key = first(KEY_VARS).ok_or(ConfigError::Missing(KEY_VARS[0]))?;
        let schema = first(SCHEMA_VARS);

        let url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: raw_url,
                reason: "not a base URL".into(),
            });
        }

        Ok(Self {
            url,
            api_key,
            schema,
        })
    }
}

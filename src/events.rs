use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::RemoteUpdateFailure;
use crate::payload::UpdatePayload;

/// Structured outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Dry run: the update that would have been sent.
    UpdatePlanned {
        run_id: Uuid,
        ts: DateTime<Utc>,
        table: String,
        payload: UpdatePayload,
    },
    UpdateSucceeded {
        run_id: Uuid,
        ts: DateTime<Utc>,
        table: String,
        data: Value,
    },
    UpdateFailed {
        run_id: Uuid,
        ts: DateTime<Utc>,
        table: String,
        error: RemoteUpdateFailure,
    },
}

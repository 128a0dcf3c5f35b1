use async_trait::async_trait;
use serde_json::Value;

use crate::error::RemoteUpdateFailure;
use crate::payload::UpdatePayload;

/// Outcome of a remote update: the returned rows, or the failure.
pub type UpdateResult = Result<Value, RemoteUpdateFailure>;

/// A table-oriented database client able to bulk-update a table.
///
/// Implementations own authentication and transport. `update` applies the
/// payload to every row of `table`; no filter is added.
#[async_trait]
pub trait TableClient {
    async fn update(&self, table: &str, payload: &UpdatePayload) -> UpdateResult;
}

#[async_trait]
impl<'a, C> TableClient for &'a C
where
    C: TableClient + Sync + ?Sized,
{
    async fn update(&self, table: &str, payload: &UpdatePayload) -> UpdateResult {
        (**self).update(table, payload).await
    }
}

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::CARDS_TABLE;
use crate::cli::Cli;
use crate::client::TableClient;
use crate::config::SupabaseConfig;
use crate::events::Event;
use crate::exit_codes::exit;
use crate::payload::UpdatePayload;
use crate::postgrest::PostgrestClient;
use crate::reporter::Reporter;

/// Sends the reset payload to the cards table once and reports the outcome.
pub struct UpdateRunner<C> {
    client: C,
    table: &'static str,
}

impl<C: TableClient> UpdateRunner<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            table: CARDS_TABLE,
        }
    }

    /// Issue the update and report it.
    ///
    /// A rejected update is reported and swallowed: the exit code is
    /// `SUCCESS` either way. Only a failure to write the report is an error.
    #[instrument(skip_all, fields(table = %self.table))]
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<i32> {
        let run_id = Uuid::new_v4();
        let payload = UpdatePayload::reset();

        let event = match self.client.update(self.table, &payload).await {
            Ok(data) => {
                info!(%run_id, "Cards updated");
                Event::UpdateSucceeded {
                    run_id,
                    ts: Utc::now(),
                    table: self.table.to_string(),
                    data,
                }
            }
            Err(error) => {
                info!(%run_id, %error, "Cards update failed");
                Event::UpdateFailed {
                    run_id,
                    ts: Utc::now(),
                    table: self.table.to_string(),
                    error,
                }
            }
        };

        reporter.record(event).context("failed to write outcome")?;
        Ok(exit::SUCCESS)
    }
}

/// Report the update that would be sent, without any client.
pub fn dry_run<W: Write>(reporter: &mut Reporter<W>) -> Result<i32> {
    reporter
        .record(Event::UpdatePlanned {
            run_id: Uuid::new_v4(),
            ts: Utc::now(),
            table: CARDS_TABLE.to_string(),
            payload: UpdatePayload::reset(),
        })
        .context("failed to write outcome")?;
    Ok(exit::SUCCESS)
}

/// Entry point used by the binary.
pub async fn execute(cli: Cli) -> Result<i32> {
    let mut reporter = Reporter::stdout(cli.json);

    if cli.dry_run {
        return dry_run(&mut reporter);
    }

    let config = match SupabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(exit::CONFIGURATION_FAILURE);
        }
    };
    let client = PostgrestClient::new(&config).context("failed to build Supabase client")?;

    UpdateRunner::new(client).run(&mut reporter).await
}

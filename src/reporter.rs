use std::io::{self, Stdout, Write};

use crate::events::Event;

/// Reporter renders each event as one human-readable or JSON line.
pub struct Reporter<W: Write> {
    out: W,
    events: Vec<Event>,
    json_mode: bool,
}

impl Reporter<Stdout> {
    pub fn stdout(json_mode: bool) -> Self {
        Self::new(io::stdout(), json_mode)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json_mode: bool) -> Self {
        Self {
            out,
            events: Vec::new(),
            json_mode,
        }
    }

    pub fn record(&mut self, event: Event) -> io::Result<()> {
        let line = if self.json_mode {
            serde_json::to_string(&event)?
        } else {
            human_line(&event)
        };
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        self.events.push(event);
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One-line summary of an event.
pub fn human_line(event: &Event) -> String {
    match event {
        Event::UpdatePlanned { table, payload, .. } => format!(
            "Dry run: would update table \"{}\" with {}",
            table,
            serde_json::to_string(payload).unwrap_or_default()
        ),
        Event::UpdateSucceeded { data, .. } => format!("Card update succeeded: {}", data),
        Event::UpdateFailed { error, .. } => format!("Card update failed: {}", error),
    }
}

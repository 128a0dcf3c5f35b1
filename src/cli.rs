use clap::Parser;

/// Reset the WIP flag, spells, tags and talent of every card.
#[derive(Parser, Debug, Default)]
#[command(name = "cardreset", version, about, long_about = None)]
pub struct Cli {
    /// Output the outcome as a JSON object instead of a sentence.
    #[arg(long)]
    pub json: bool,

    /// Print the update that would be sent, without contacting the server.
    #[arg(long)]
    pub dry_run: bool,
}

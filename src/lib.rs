//! `cardreset` - reset the work-in-progress fields of every card in a
//! Supabase `cards` table.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod payload;
pub mod postgrest;
pub mod reporter;
pub mod runner;

/// Table targeted by the reset.
pub const CARDS_TABLE: &str = "cards";

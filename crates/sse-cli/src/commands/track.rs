//! Prediction tracking commands

use crate::error::{CliError, CliResult};
use crate::output::{print_rows, print_structured, print_success, truncate};
use crate::Context;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;
use sse_store::{TrackingItem, TrackingStatus, TrackingStore, Vote};
use tabled::Tabled;

/// Tracking subcommands
#[derive(Subcommand, Debug)]
pub enum TrackCommands {
    /// List tracked predictions, newest first
    List,

    /// Show one tracked prediction
    Show {
        /// Tracking item id
        id: String,
    },

    /// Record whether a prediction came true
    Vote {
        /// Tracking item id
        id: String,
        /// accurate or inaccurate
        vote: Vote,
        /// What actually happened (kept for inaccurate votes)
        #[arg(long)]
        actual_outcome: Option<String>,
        /// When it happened (RFC 3339); defaults to now
        #[arg(long)]
        actual_at: Option<String>,
    },
}

#[derive(Serialize, Tabled)]
struct TrackingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
    #[tabled(rename = "Vote")]
    vote: String,
    #[tabled(rename = "Situation")]
    situation: String,
}

/// Execute track command
pub fn execute(command: TrackCommands, ctx: &Context) -> CliResult<()> {
    let store = TrackingStore::open(ctx.store_dir()?);
    match command {
        TrackCommands::List => {
            store.ensure_seed_item()?;
            let items = store.list()?;
            if print_structured(&items, ctx.format)? {
                return Ok(());
            }
            let rows = items
                .into_iter()
                .map(|item| TrackingRow {
                    status: status_label(item.status).to_string(),
                    predicted: item.prediction.predicted_outcome.id,
                    vote: item.vote.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
                    situation: truncate(&item.situation, 50),
                    id: item.id,
                })
                .collect();
            print_rows(rows, ctx.format)
        }
        TrackCommands::Show { id } => {
            let item = store
                .get(&id)?
                .ok_or_else(|| CliError::NotFound(format!("tracking item '{}'", id)))?;
            if print_structured(&item, ctx.format)? {
                return Ok(());
            }
            print_item(&item);
            Ok(())
        }
        TrackCommands::Vote {
            id,
            vote,
            actual_outcome,
            actual_at,
        } => {
            let actual_at = actual_at
                .as_deref()
                .map(super::parse_timestamp)
                .transpose()?;
            let item = store.vote(&id, vote, actual_outcome, actual_at)?;
            if print_structured(&item, ctx.format)? {
                return Ok(());
            }
            print_success(&format!("Recorded {} vote for {}", vote, item.id));
            Ok(())
        }
    }
}

fn status_label(status: TrackingStatus) -> &'static str {
    match status {
        TrackingStatus::Tracking => "tracking",
        TrackingStatus::Resolved => "resolved",
    }
}

fn print_item(item: &TrackingItem) {
    let outcome = &item.prediction.predicted_outcome;
    println!("{} {}", "Tracked Prediction".bold().cyan(), item.id.yellow());
    println!("{}", "=".repeat(60));
    println!("  Situation:  {}", item.situation);
    println!("  Predicted:  {} ({:.2})", outcome.label, outcome.confidence);
    println!(
        "  Mode:       {}   Horizon: {}",
        item.prediction.mode, item.prediction.horizon
    );
    println!("  Status:     {}", status_label(item.status));
    println!("  Started:    {}", item.started_at.to_rfc3339());
    if let Some(expected) = item.expected_at {
        println!("  Expected:   {}", expected.to_rfc3339());
    }
    match item.vote {
        Some(Vote::Accurate) => println!("  Vote:       {}", "accurate".green()),
        Some(Vote::Inaccurate) => {
            println!("  Vote:       {}", "inaccurate".red());
            if let Some(actual) = &item.actual_outcome {
                println!("  Actual:     {}", actual);
            }
        }
        None => println!("  Vote:       {}", "pending".dimmed()),
    }
    if let Some(actual_at) = item.actual_at {
        println!("  Resolved:   {}", actual_at.to_rfc3339());
    }
}

//! SSE CLI - Command-line interface for the Situational Simulation Engine
//!
//! This CLI provides a terminal interface to:
//! - Predict the likely outcome of a described situation
//! - Compare a base situation against a variant
//! - Browse the built-in demo examples
//! - Manage `@mention` profiles
//! - Track predictions and vote on their accuracy

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
pub mod config;
mod error;
pub mod output;

use commands::{compare, examples, predict, profile, track};
use config::CliConfig;
pub use error::{CliError, CliResult};

/// SSE CLI application
#[derive(Parser)]
#[command(name = "sse")]
#[command(about = "SSE - deterministic situational outcome prediction", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SSE_CONFIG")]
    config: Option<String>,

    /// Directory for profile and tracking stores
    #[arg(long, env = "SSE_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Predict the outcome of a situation
    Predict(predict::PredictArgs),

    /// Compare a base situation with a variant
    Compare(compare::CompareArgs),

    /// List the built-in demo examples
    Examples,

    /// Manage profiles referenced by @mentions
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Track predictions and record outcomes
    Track {
        #[command(subcommand)]
        command: track::TrackCommands,
    },

    /// Show effective configuration
    Config,
}

/// Settings shared by every command.
pub(crate) struct Context {
    pub config: CliConfig,
    pub store_dir: Option<PathBuf>,
    pub format: output::OutputFormat,
}

impl Context {
    pub fn store_dir(&self) -> CliResult<PathBuf> {
        self.config.resolve_store_dir(self.store_dir.as_deref())
    }
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing on stderr; stdout carries command output
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let ctx = Context {
        config,
        store_dir: cli.store_dir,
        format: cli.output,
    };

    match cli.command {
        Commands::Predict(args) => predict::execute(args, &ctx),
        Commands::Compare(args) => compare::execute(args, &ctx),
        Commands::Examples => examples::execute(&ctx),
        Commands::Profile { command } => profile::execute(command, &ctx),
        Commands::Track { command } => track::execute(command, &ctx),
        Commands::Config => show_config(&ctx),
    }
}

fn show_config(ctx: &Context) -> CliResult<()> {
    use colored::Colorize;

    let store_dir = ctx.store_dir().ok();
    let effective = serde_json::json!({
        "store_dir": store_dir,
        "default_depth": ctx.config.default_depth.unwrap_or_default(),
        "include_alternatives": ctx.config.include_alternatives.unwrap_or(false),
    });
    if output::print_structured(&effective, ctx.format)? {
        return Ok(());
    }

    println!("{}", "SSE Configuration".bold().cyan());
    println!("{}", "=".repeat(50));
    match store_dir {
        Some(dir) => println!("  Store dir:    {}", dir.display()),
        None => println!("  Store dir:    {}", "unavailable".yellow()),
    }
    println!(
        "  Depth:        {}",
        ctx.config.default_depth.unwrap_or_default()
    );
    println!(
        "  Alternatives: {}",
        ctx.config.include_alternatives.unwrap_or(false)
    );
    Ok(())
}

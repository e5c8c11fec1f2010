//! Prediction command

use crate::error::{CliError, CliResult};
use crate::output::{print_structured, print_success};
use crate::Context;
use clap::Args;
use colored::Colorize;
use sse_runtime::{example, predict, ExplanationDepth, PredictionResult, RunConfig};
use sse_store::{ProfileStore, TrackingStore};
use tracing::info;

/// Arguments for `sse predict`
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Free-text situation to predict
    #[arg(short, long, conflicts_with = "example", required_unless_present = "example")]
    pub situation: Option<String>,

    /// Run a built-in example by id (see `sse examples`)
    #[arg(short, long)]
    pub example: Option<String>,

    /// Explanation depth (default, deep)
    #[arg(short, long)]
    pub depth: Option<ExplanationDepth>,

    /// Include alternative outcomes
    #[arg(short, long)]
    pub alternatives: bool,

    /// Override the strategic recursion depth (clamped to 0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub strategic_depth: Option<i64>,

    /// Replace @tag mentions with stored profiles before predicting
    #[arg(long)]
    pub resolve_mentions: bool,

    /// Record the prediction in the tracking store
    #[arg(long)]
    pub track: bool,

    /// When the outcome is expected (RFC 3339), for tracked predictions
    #[arg(long, requires = "track")]
    pub expected_at: Option<String>,
}

/// Execute predict command
pub fn execute(args: PredictArgs, ctx: &Context) -> CliResult<()> {
    let mut config = RunConfig {
        depth: args
            .depth
            .or(ctx.config.default_depth)
            .unwrap_or_default(),
        include_alternatives: args.alternatives
            || ctx.config.include_alternatives.unwrap_or(false),
        example_id: None,
        strategic_depth: args.strategic_depth,
    };

    let mut situation = match (&args.example, &args.situation) {
        (Some(id), _) => {
            let demo = example(id)
                .ok_or_else(|| CliError::NotFound(format!("example '{}'", id)))?;
            config.example_id = Some(demo.id.to_string());
            demo.situation.to_string()
        }
        (None, Some(text)) => text.trim().to_string(),
        (None, None) => String::new(),
    };
    if situation.is_empty() {
        return Err(CliError::InvalidArgument(
            "situation text is required".into(),
        ));
    }

    if args.resolve_mentions {
        let profiles = ProfileStore::open(ctx.store_dir()?);
        let resolved = profiles.resolve_mentions(&situation)?;
        if !resolved.profiles.is_empty() {
            info!(profiles = resolved.profiles.len(), "Resolved mentions");
        }
        situation = resolved.text;
    }

    let result = predict(&situation, &config)?;

    let tracking_id = if args.track {
        let expected_at = args
            .expected_at
            .as_deref()
            .map(super::parse_timestamp)
            .transpose()?;
        let store = TrackingStore::open(ctx.store_dir()?);
        let item = store.create(situation.clone(), result.clone(), None, expected_at)?;
        Some(item.id)
    } else {
        None
    };

    if print_structured(&result, ctx.format)? {
        return Ok(());
    }
    print_prediction(&situation, &result);
    if let Some(id) = tracking_id {
        println!();
        print_success(&format!("Tracking prediction as {}", id));
    }
    Ok(())
}

pub(crate) fn print_prediction(situation: &str, result: &PredictionResult) {
    let outcome = &result.predicted_outcome;

    println!("{}", "Prediction".bold().cyan());
    println!("{}", "=".repeat(60));
    println!("  {} {}", "Situation:".bold(), situation.dimmed());
    println!();
    println!("  {} {}", "Outcome:".bold(), outcome.label);
    println!("      id: {}", outcome.id.yellow());
    println!("      confidence: {:.4}", outcome.confidence);
    println!("      rationale: {}", outcome.rationale.join(", "));
    println!();
    println!(
        "  {} {}   {} {}",
        "Mode:".bold(),
        result.mode,
        "Horizon:".bold(),
        result.horizon
    );
    println!();
    println!("  {}", "Explanation".bold());
    println!("      {}", result.explanation);
    println!();
    println!("  {}", "Strategy".bold());
    println!("      {}", result.belief_shift_summary);
    println!("      {}", result.signal_evaluation_summary);
    println!(
        "      coalition likelihood: {:.4}   recursion depth: {}",
        result.coalition_likelihood, result.recursion_depth_used
    );

    if !result.alternatives.is_empty() {
        println!();
        println!("  {}", "Alternatives".bold());
        for alt in &result.alternatives {
            println!(
                "    {} {} ({}, {:.2})",
                "•".blue(),
                alt.label,
                alt.id,
                alt.confidence
            );
        }
    }
}

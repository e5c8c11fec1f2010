//! Comparison command

use crate::error::{CliError, CliResult};
use crate::output::print_structured;
use crate::Context;
use clap::Args;
use colored::Colorize;
use sse_runtime::{compare, ExplanationDepth, RunConfig};

/// Arguments for `sse compare`
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Base situation
    pub base: String,

    /// Variant situation
    pub variant: String,

    /// Explanation depth (default, deep)
    #[arg(short, long)]
    pub depth: Option<ExplanationDepth>,

    /// Override the strategic recursion depth (clamped to 0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub strategic_depth: Option<i64>,
}

/// Execute compare command
pub fn execute(args: CompareArgs, ctx: &Context) -> CliResult<()> {
    if args.base.trim().is_empty() || args.variant.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "both base and variant situations are required".into(),
        ));
    }

    let config = RunConfig {
        depth: args
            .depth
            .or(ctx.config.default_depth)
            .unwrap_or_default(),
        strategic_depth: args.strategic_depth,
        ..RunConfig::default()
    };
    let report = compare(args.base.trim(), args.variant.trim(), &config)?;

    if print_structured(&report, ctx.format)? {
        return Ok(());
    }

    let cmp = &report.comparison;
    let delta = format!("{:+.4}", cmp.confidence_delta);
    let delta = if cmp.confidence_delta > 0.0 {
        delta.green()
    } else if cmp.confidence_delta < 0.0 {
        delta.red()
    } else {
        delta.normal()
    };

    println!("{}", "Comparison".bold().cyan());
    println!("{}", "=".repeat(60));
    for (title, result) in [("Base", &report.base), ("Variant", &report.variant)] {
        println!("  {}", title.bold());
        println!("      {}", result.predicted_outcome.label);
        println!(
            "      Mode {} | Horizon {} | Confidence {:.4}",
            result.mode, result.horizon, result.predicted_outcome.confidence
        );
    }
    println!();
    println!("  {} {}", "Confidence delta:".bold(), delta);
    println!("  {} {}", "Added factors:".bold(), join_or_none(&cmp.added_factors));
    println!("  {} {}", "Removed factors:".bold(), join_or_none(&cmp.removed_factors));
    println!("  {} {}", "Shared factors:".bold(), join_or_none(&cmp.shared_factors));
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join("; ")
    }
}

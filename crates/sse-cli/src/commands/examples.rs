//! Demo example listing

use crate::error::CliResult;
use crate::output::{print_rows, truncate};
use crate::Context;
use serde::Serialize;
use sse_runtime::examples;
use tabled::Tabled;

#[derive(Serialize, Tabled)]
struct ExampleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Expected Outcome")]
    expected_outcome_id: String,
    #[tabled(rename = "Situation")]
    situation: String,
}

/// Execute examples command
pub fn execute(ctx: &Context) -> CliResult<()> {
    let structured = !matches!(ctx.format, crate::output::OutputFormat::Table);
    let rows = examples()
        .iter()
        .map(|e| ExampleRow {
            id: e.id.to_string(),
            mode: e.expected_mode.to_string(),
            expected_outcome_id: e.expected_outcome_id.to_string(),
            situation: if structured {
                e.situation.to_string()
            } else {
                truncate(e.situation, 60)
            },
        })
        .collect();
    print_rows(rows, ctx.format)
}

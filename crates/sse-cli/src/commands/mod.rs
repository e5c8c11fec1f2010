//! CLI command implementations

pub mod compare;
pub mod examples;
pub mod predict;
pub mod profile;
pub mod track;

use chrono::{DateTime, Utc};

use crate::error::{CliError, CliResult};

/// Parse an RFC 3339 timestamp argument.
pub(crate) fn parse_timestamp(raw: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidArgument(format!("invalid timestamp '{}': {}", raw, e)))
}

//! Profile management commands

use std::collections::BTreeMap;

use crate::error::{CliError, CliResult};
use crate::output::{print_rows, print_structured, print_success, truncate};
use crate::Context;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;
use sse_store::{NewProfile, Profile, ProfileStore, ProfileUpdate};
use tabled::Tabled;

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Create a profile (replaces any profile with the same tag)
    Add {
        /// Display name
        name: String,
        /// Profile type (person, organization, group, ...)
        #[arg(short = 't', long = "type", default_value = "person")]
        profile_type: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Tag for @mentions (derived from the name when omitted)
        #[arg(long)]
        tag: Option<String>,
        /// Attribute as key=value; repeatable
        #[arg(short, long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,
    },

    /// Update fields of an existing profile
    Update {
        /// Profile tag
        tag: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short = 't', long = "type")]
        profile_type: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Replace all attributes; repeatable key=value
        #[arg(short, long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,
    },

    /// List profiles, newest first
    List,

    /// Show one profile
    Show {
        /// Profile tag
        tag: String,
    },
}

#[derive(Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    profile_type: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Execute profile command
pub fn execute(command: ProfileCommands, ctx: &Context) -> CliResult<()> {
    let store = ProfileStore::open(ctx.store_dir()?);
    match command {
        ProfileCommands::Add {
            name,
            profile_type,
            description,
            tag,
            attrs,
        } => {
            let profile = store.create(NewProfile {
                name,
                profile_type,
                description,
                attributes: parse_attributes(&attrs)?,
                tag,
            })?;
            show_saved(&profile, "Saved", ctx)
        }
        ProfileCommands::Update {
            tag,
            name,
            profile_type,
            description,
            attrs,
        } => {
            let attributes = if attrs.is_empty() {
                None
            } else {
                Some(parse_attributes(&attrs)?)
            };
            let changes = ProfileUpdate {
                name,
                profile_type,
                description,
                attributes,
            };
            let profile = store
                .update(&tag, changes)?
                .ok_or_else(|| CliError::NotFound(format!("profile '{}'", tag)))?;
            show_saved(&profile, "Updated", ctx)
        }
        ProfileCommands::List => {
            let profiles = store.list()?;
            if print_structured(&profiles, ctx.format)? {
                return Ok(());
            }
            let rows = profiles
                .into_iter()
                .map(|p| ProfileRow {
                    tag: format!("@{}", p.tag),
                    name: p.name,
                    profile_type: p.profile_type,
                    description: truncate(&p.description, 50),
                })
                .collect();
            print_rows(rows, ctx.format)
        }
        ProfileCommands::Show { tag } => {
            let profile = store
                .get(&tag)?
                .ok_or_else(|| CliError::NotFound(format!("profile '{}'", tag)))?;
            if print_structured(&profile, ctx.format)? {
                return Ok(());
            }
            print_profile(&profile);
            Ok(())
        }
    }
}

fn show_saved(profile: &Profile, verb: &str, ctx: &Context) -> CliResult<()> {
    if print_structured(profile, ctx.format)? {
        return Ok(());
    }
    print_success(&format!("{} profile @{}", verb, profile.tag));
    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("{} {}", profile.name.bold().cyan(), format!("@{}", profile.tag).yellow());
    println!("{}", "=".repeat(50));
    println!("  Type:        {}", profile.profile_type);
    println!("  Description: {}", profile.description);
    if !profile.attributes.is_empty() {
        println!("  Attributes:");
        for (key, value) in &profile.attributes {
            println!("      {}: {}", key, value);
        }
    }
    println!("  Created:     {}", profile.created_at.to_rfc3339());
    println!("  Updated:     {}", profile.updated_at.to_rfc3339());
}

fn parse_attributes(raw: &[String]) -> CliResult<BTreeMap<String, String>> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CliError::InvalidArgument(format!("attribute '{}' is not key=value", pair))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::InvalidArgument(format!(
                    "attribute '{}' has an empty key",
                    pair
                )));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

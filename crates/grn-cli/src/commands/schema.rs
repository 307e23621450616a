use anyhow::bail;
use schemars::schema_for;

use grn_core::entities::{Chair, Project, Session, SessionDescription, ValidationIssue};
use grn_core::responses::{SyncPlan, SyncResponse, ValidateResponse};

use crate::cli::root_commands::SchemaArgs;

const KNOWN_TYPES: &[&str] = &[
    "chair",
    "project",
    "session",
    "session_description",
    "sync_plan",
    "sync_response",
    "validate_response",
    "validation_issue",
];

/// Handle `grn schema`: print the JSON Schema for a wire type.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", schema_json(&args.type_name)?);
    Ok(())
}

fn schema_json(type_name: &str) -> anyhow::Result<String> {
    let schema = match type_name {
        "chair" => schema_for!(Chair),
        "project" => schema_for!(Project),
        "session" => schema_for!(Session),
        "session_description" => schema_for!(SessionDescription),
        "sync_plan" => schema_for!(SyncPlan),
        "sync_response" => schema_for!(SyncResponse),
        "validate_response" => schema_for!(ValidateResponse),
        "validation_issue" => schema_for!(ValidationIssue),
        other => bail!("unknown schema type {other:?} (known: {})", KNOWN_TYPES.join(", ")),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

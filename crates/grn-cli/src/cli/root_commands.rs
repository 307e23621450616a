use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write a starter .greenroom/config.toml.
    Init,
    /// Validate sessions and print the findings.
    Validate(ValidateArgs),
    /// Validate sessions and reconcile their labels.
    Sync(SyncArgs),
    /// Render the room-by-slot schedule grid.
    Grid,
    /// Dump the JSON schema for a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `grn validate`.
#[derive(Clone, Debug, Args)]
#[command(group = ArgGroup::new("scope").required(true).args(["session", "all"]))]
pub struct ValidateArgs {
    /// Validate one session by issue number.
    #[arg(long)]
    pub session: Option<u64>,

    /// Validate every session on the board.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `grn sync`.
#[derive(Clone, Debug, Args)]
#[command(group = ArgGroup::new("scope").required(true).args(["session", "all"]))]
pub struct SyncArgs {
    /// Sync one session by issue number.
    #[arg(long)]
    pub session: Option<u64>,

    /// Sync every session on the board.
    #[arg(long)]
    pub all: bool,

    /// File holding the issue body before the edit that triggered this run
    /// (the issue-edited event's `changes.body.from`). Governs whether the
    /// `check: comments` label is re-added.
    #[arg(long, requires = "session", conflicts_with = "all")]
    pub previous_body_file: Option<PathBuf>,

    /// Apply the label changes. Without this flag the plan is printed and
    /// nothing is mutated.
    #[arg(long)]
    pub apply: bool,
}

/// Arguments for `grn schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to dump, e.g. `validation_issue`, `session`, `project`.
    pub type_name: String,
}

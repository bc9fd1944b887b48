//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// URL-state timeline visualizer.
///
/// Keeps a timeline of dated entries in a reversible, URL-safe text blob
/// and renders it as a calendar grid, a line chart, or a list with
/// per-label duration totals.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new timeline file.
    Init {
        /// Timeline name.
        #[arg(long)]
        name: Option<String>,
    },

    /// Add an entry.
    Add(AddArgs),

    /// Edit an entry, replacing it wholesale.
    Edit(EditArgs),

    /// Remove an entry.
    Remove {
        /// Entry id (a unique prefix is enough).
        id: String,
    },

    /// Rename the timeline.
    Rename {
        /// New timeline name.
        name: String,
    },

    /// Show entries as a table, sorted by start month.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show total non-overlapping duration per label.
    Summary {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the timeline as a per-year calendar grid.
    Calendar,

    /// Show the timeline as a line chart.
    Line {
        /// Wrap the axis into rows instead of one long line.
        #[arg(long)]
        vertical: bool,
    },

    /// Print the timeline state blob.
    Export,

    /// Replace the timeline from a state blob.
    Import {
        /// The blob; read from stdin when omitted.
        blob: Option<String>,
    },
}

/// Fields for a new entry.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry name.
    #[arg(long)]
    pub name: String,

    /// Start month (YYYY-MM).
    #[arg(long)]
    pub start: String,

    /// End month (YYYY-MM); omit for an ongoing entry.
    #[arg(long)]
    pub end: Option<String>,

    /// Free-text note.
    #[arg(long, default_value = "")]
    pub note: String,

    /// Color token.
    #[arg(long, default_value = "#3B82F6")]
    pub color: String,

    /// Label; repeat for multiple labels.
    #[arg(long = "label")]
    pub labels: Vec<String>,
}

/// Replacement fields for an existing entry; anything omitted keeps its
/// current value.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry id (a unique prefix is enough).
    pub id: String,

    /// Entry name.
    #[arg(long)]
    pub name: Option<String>,

    /// Start month (YYYY-MM).
    #[arg(long)]
    pub start: Option<String>,

    /// End month (YYYY-MM).
    #[arg(long, conflicts_with = "ongoing")]
    pub end: Option<String>,

    /// Clear the end month, making the entry ongoing.
    #[arg(long)]
    pub ongoing: bool,

    /// Free-text note.
    #[arg(long)]
    pub note: Option<String>,

    /// Color token.
    #[arg(long)]
    pub color: Option<String>,

    /// Replace the label list; repeat for multiple labels.
    #[arg(long = "label")]
    pub labels: Option<Vec<String>>,
}

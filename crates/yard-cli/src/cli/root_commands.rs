use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::ValidateCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Export a rendered view (PNG/JPEG) as a paginated PDF.
    Export(ExportArgs),
    /// Fetch usage analytics from the backend.
    Analytics(AnalyticsArgs),
    /// Run a dialog's validation and submission flow without a UI.
    Validate {
        #[command(subcommand)]
        action: ValidateCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Rendered view to export (PNG or JPEG).
    pub image: PathBuf,
    /// Output PDF path.
    pub output: PathBuf,
    /// Paper size (a0-a6, letter, legal, tabloid). Overrides `export.page_format`.
    #[arg(long)]
    pub page_format: Option<String>,
    /// `portrait` or `landscape`. Overrides `export.orientation`.
    #[arg(long)]
    pub orientation: Option<String>,
    /// Layout unit (pt, mm, cm, in, px). Overrides `export.unit`.
    #[arg(long)]
    pub unit: Option<String>,
    /// Capture scale factor. Overrides `export.capture_scale`.
    #[arg(long)]
    pub scale: Option<f32>,
    /// Background colour for transparent pixels (`#rrggbb`).
    #[arg(long)]
    pub background: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Time range label understood by the backend.
    #[arg(long, default_value = "7d")]
    pub time_range: String,
    /// Project id.
    #[arg(long)]
    pub project: String,
}

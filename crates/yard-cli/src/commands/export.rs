use anyhow::Context;
use yard_config::ExportConfig;
use yard_export::{EncodedImageCapture, ExportOptions, export_to_pdf};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;

pub async fn handle(
    args: &ExportArgs,
    config: &ExportConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let options = resolve_options(args, config)?;
    let capture = EncodedImageCapture::from_path(&args.image);
    let summary = export_to_pdf(&capture, &args.output, &options)
        .await
        .with_context(|| format!("failed to export {}", args.image.display()))?;
    if flags.quiet {
        return Ok(());
    }
    output(&summary, flags.format)
}

/// Command-line overrides on top of the `[export]` config section.
fn resolve_options(args: &ExportArgs, config: &ExportConfig) -> anyhow::Result<ExportOptions> {
    let mut config = config.clone();
    if let Some(page_format) = &args.page_format {
        config.page_format.clone_from(page_format);
    }
    if let Some(orientation) = &args.orientation {
        config.orientation.clone_from(orientation);
    }
    if let Some(unit) = &args.unit {
        config.unit.clone_from(unit);
    }
    if let Some(scale) = args.scale {
        config.capture_scale = scale;
    }
    if let Some(background) = &args.background {
        config.background.clone_from(background);
    }
    ExportOptions::try_from(&config).context("invalid export options")
}

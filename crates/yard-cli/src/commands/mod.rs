pub mod analytics;
pub mod export;
pub mod validate;

use yard_config::YardConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    config: &YardConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Export(args) => export::handle(args, &config.export, flags).await,
        Commands::Analytics(args) => analytics::handle(args, &config.analytics, flags).await,
        Commands::Validate { action } => validate::handle(action, flags).await,
    }
}

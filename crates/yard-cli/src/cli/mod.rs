use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `yard` binary.
#[derive(Debug, Parser)]
#[command(name = "yard", version, about = "Switchyard - console report and dialog tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::ValidateCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "yard",
            "--format",
            "raw",
            "--verbose",
            "analytics",
            "--project",
            "p1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        let Commands::Analytics(args) = cli.command else {
            panic!("expected analytics command");
        };
        assert_eq!(args.time_range, "7d");
        assert_eq!(args.project, "p1");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["yard", "export", "in.png", "out.pdf", "--quiet"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn export_overrides_are_optional() {
        let cli = Cli::try_parse_from([
            "yard",
            "export",
            "dash.png",
            "dash.pdf",
            "--page-format",
            "a4",
            "--orientation",
            "landscape",
            "--scale",
            "1.5",
        ])
        .expect("cli should parse");

        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.page_format.as_deref(), Some("a4"));
        assert_eq!(args.orientation.as_deref(), Some("landscape"));
        assert_eq!(args.scale, Some(1.5));
        assert!(args.unit.is_none());
    }

    #[test]
    fn validate_api_key_splits_existing_providers() {
        let cli = Cli::try_parse_from([
            "yard",
            "validate",
            "api-key",
            "--provider",
            "gemini",
            "--key",
            "AIza...",
            "--existing",
            "openai,anthropic",
        ])
        .expect("cli should parse");

        let Commands::Validate {
            action: ValidateCommands::ApiKey(args),
        } = cli.command
        else {
            panic!("expected validate api-key");
        };
        assert_eq!(args.existing, vec!["openai", "anthropic"]);
    }

    #[test]
    fn update_member_requires_current_role() {
        let parsed = Cli::try_parse_from(["yard", "validate", "update-member", "--role", "admin"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["yard", "--format", "xml", "analytics", "--project", "p"]);
        assert!(parsed.is_err());
    }
}

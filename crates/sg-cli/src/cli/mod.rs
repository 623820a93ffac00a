use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `statguide` binary.
#[derive(Debug, Parser)]
#[command(
    name = "statguide",
    version,
    about = "Statistical test guide - answer a few questions, get a suitable test"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for inspection commands: json, table, raw
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `default_format` applies when `--format` was not given.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            color: self.color,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_is_interactive() {
        let cli = Cli::try_parse_from(["statguide"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(cli.format.is_none());
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["statguide", "--format", "json", "--verbose", "check"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["statguide", "paths", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Paths(_))));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["statguide", "--format", "xml", "check"]);
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case("json", OutputFormat::Json)]
    #[case("table", OutputFormat::Table)]
    #[case("raw", OutputFormat::Raw)]
    fn output_format_accepts_all_supported_values(
        #[case] value: &str,
        #[case] expected: OutputFormat,
    ) {
        let cli = Cli::try_parse_from(["statguide", "catalog", "--format", value])
            .expect("cli should parse");
        assert_eq!(cli.format, Some(expected));
    }

    #[test]
    fn consult_accepts_section() {
        let cli = Cli::try_parse_from(["statguide", "consult", "--section", "g"])
            .expect("cli should parse");
        let Some(Commands::Consult(args)) = cli.command else {
            panic!("expected consult");
        };
        assert_eq!(args.section.as_deref(), Some("g"));
    }

    #[test]
    fn catalog_id_is_positional_and_exact() {
        let cli = Cli::try_parse_from(["statguide", "catalog", "Welch's t-test"])
            .expect("cli should parse");
        let Some(Commands::Catalog(args)) = cli.command else {
            panic!("expected catalog");
        };
        assert_eq!(args.id.as_deref(), Some("Welch's t-test"));
    }

    #[test]
    fn global_flags_fall_back_to_configured_format() {
        let cli = Cli::try_parse_from(["statguide", "check"]).expect("cli should parse");
        let flags = cli.global_flags(OutputFormat::Raw);
        assert_eq!(flags.format, OutputFormat::Raw);

        let cli = Cli::try_parse_from(["statguide", "check", "-f", "json"])
            .expect("cli should parse");
        let flags = cli.global_flags(OutputFormat::Raw);
        assert_eq!(flags.format, OutputFormat::Json);
    }
}

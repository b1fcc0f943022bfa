use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `neowatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "neowatch",
    version,
    about = "neowatch - near-Earth-object threat level and proximity alerts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Email of the registered user to act as (overrides `general.user_email`)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Only list potentially hazardous objects
    #[arg(long, global = true)]
    pub hazardous: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            user: self.user.clone(),
            hazardous: self.hazardous,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{UserCommands, WatchCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "neowatch",
            "--format",
            "table",
            "--hazardous",
            "--verbose",
            "feed",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.hazardous);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Feed));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["neowatch", "threat", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Threat));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["neowatch", "--format", "xml", "feed"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn watch_toggle_takes_id_and_optional_name() {
        let cli = Cli::try_parse_from([
            "neowatch",
            "watch",
            "toggle",
            "2099942",
            "--name",
            "99942 Apophis",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Watch {
                action: WatchCommands::Toggle { asteroid_id, name },
            } => {
                assert_eq!(asteroid_id, "2099942");
                assert_eq!(name.as_deref(), Some("99942 Apophis"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn user_register_requires_email() {
        assert!(Cli::try_parse_from(["neowatch", "user", "register"]).is_err());

        let cli = Cli::try_parse_from([
            "neowatch",
            "user",
            "register",
            "--email",
            "ada@example.org",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Register { ref email, name: None }
            } if email == "ada@example.org"
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["neowatch", "--user", "ada@example.org", "alerts"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.user.as_deref(), Some("ada@example.org"));
        assert!(!flags.hazardous);
    }
}

use crate::console::VerbosityLevel;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Content profile (TOML) to show instead of the built-in portfolio
    #[arg(long)]
    pub content: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    Set { key: String, value: String },
}

#[derive(Debug, Subcommand)]
pub enum ContentAction {
    /// Validate a content profile and print a summary
    Check {
        #[arg(long)]
        file: Option<String>,
    },
}

impl Cli {
    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }

    pub fn get_effective_verbosity(&self, config_verbosity: VerbosityLevel) -> VerbosityLevel {
        if self.quiet || self.verbose > 0 {
            // CLI verbosity specified, use it
            self.get_verbosity()
        } else {
            // No CLI verbosity specified, use config
            config_verbosity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_check_keeps_global_flags_readable() {
        let cli =
            Cli::try_parse_from(["folio", "--content", "me.toml", "content", "check"]).unwrap();

        // The action is borrowed out of the command while the global
        // --content flag stays readable on the same Cli value
        let Some(Commands::Content { action }) = &cli.command else {
            panic!("expected the content subcommand");
        };
        let ContentAction::Check { file } = action;
        assert!(file.is_none());
        assert_eq!(cli.content.as_deref(), Some("me.toml"));
    }

    #[test]
    fn config_set_parses_key_and_value() {
        let cli = Cli::try_parse_from(["folio", "config", "set", "verbosity", "debug"]).unwrap();
        let Some(Commands::Config { action }) = &cli.command else {
            panic!("expected the config subcommand");
        };
        match action {
            ConfigAction::Set { key, value } => {
                assert_eq!(key, "verbosity");
                assert_eq!(value, "debug");
            }
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn cli_verbosity_beats_config_verbosity() {
        let cli = Cli::try_parse_from(["folio", "-v"]).unwrap();
        assert_eq!(
            cli.get_effective_verbosity(VerbosityLevel::Quiet),
            VerbosityLevel::Verbose
        );

        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(
            cli.get_effective_verbosity(VerbosityLevel::Debug),
            VerbosityLevel::Debug
        );
    }
}

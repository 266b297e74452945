//! Command-line configuration
//!
//! [`Cli`] is parsed from the process arguments and resolved into the
//! [`SessionConfig`] the session runs with. Log filtering is read from the
//! `RPNCALC_LOG` environment variable when set, otherwise from the `-v` count.

use clap::{ArgAction, Parser, ValueEnum};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "RPNCALC_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "rpncalc",
    about = "Interactive RPN calculator reading commands from standard input",
    version
)]
pub struct Cli {
    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// When to colour the banner and diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    Auto,
    Always,
    Never,
}

/// Settings a [`crate::session::Session`] runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub banner: bool,
    pub styled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            banner: true,
            styled: false,
        }
    }
}

impl Cli {
    pub fn session_config(&self, stdout_is_terminal: bool) -> SessionConfig {
        let styled = match self.color {
            ColorChoice::Auto => stdout_is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        SessionConfig {
            banner: !self.no_banner,
            styled,
        }
    }

    /// Filter used when `RPNCALC_LOG` is not set
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rpncalc"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.default_log_level(), "warn");
        assert_eq!(
            cli.session_config(true),
            SessionConfig {
                banner: true,
                styled: true
            }
        );
        assert_eq!(cli.session_config(false), SessionConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["rpncalc", "--no-banner", "--color", "always", "-vv"]).unwrap();
        assert_eq!(cli.default_log_level(), "debug");
        assert_eq!(
            cli.session_config(false),
            SessionConfig {
                banner: false,
                styled: true
            }
        );
    }

    #[test]
    fn test_color_never_wins_over_terminal() {
        let cli = Cli::try_parse_from(["rpncalc", "--color", "never"]).unwrap();
        assert!(!cli.session_config(true).styled);
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["rpncalc", "--color", "sometimes"]).is_err());
    }
}

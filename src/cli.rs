//! Command-line interface parsing for dailyword
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --plain flag for non-interactive output and --cache-dir for overriding
//! the on-disk cache location.

use std::path::PathBuf;

use clap::Parser;

/// dailyword - word of the day and practice texts in your terminal
#[derive(Parser, Debug)]
#[command(name = "dailyword")]
#[command(about = "Word of the day and short practice texts, cached per calendar day")]
#[command(version)]
pub struct Cli {
    /// Print today's content to stdout and exit instead of starting the TUI
    ///
    /// Examples:
    ///   dailyword             # Interactive TUI
    ///   dailyword --plain     # One-shot plain-text output
    #[arg(long)]
    pub plain: bool,

    /// Directory for the content cache (defaults to the platform cache dir)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["dailyword"]);
        assert!(!cli.plain);
        assert!(cli.cache_dir.is_none());
    }

    #[test]
    fn test_cli_parse_plain() {
        let cli = Cli::parse_from(["dailyword", "--plain"]);
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_parse_cache_dir() {
        let cli = Cli::parse_from(["dailyword", "--cache-dir", "/tmp/dw-cache"]);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/dw-cache")));
    }

    #[test]
    fn test_cli_parse_combined_flags() {
        let cli = Cli::parse_from(["dailyword", "--plain", "--cache-dir", "/tmp/dw-cache"]);
        assert!(cli.plain);
        assert!(cli.cache_dir.is_some());
    }
}

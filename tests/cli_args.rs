//! Integration tests for CLI argument handling
//!
//! Tests the --plain and --cache-dir flags from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dailyword"))
        .args(args)
        .output()
        .expect("Failed to execute dailyword")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dailyword"), "Help should mention dailyword");
    assert!(stdout.contains("plain"), "Help should mention --plain flag");
    assert!(
        stdout.contains("cache-dir"),
        "Help should mention --cache-dir flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dailyword"));
}

#[test]
fn test_unknown_flag_prints_error_and_exits() {
    let output = run_cli(&["--definitely-not-a-flag"]);
    assert!(!output.status.success(), "Expected unknown flag to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unexpected"),
        "Should print an argument error: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use dailyword::cli::Cli;

    #[test]
    fn test_cli_defaults_to_tui_mode() {
        let cli = Cli::parse_from(["dailyword"]);
        assert!(!cli.plain);
        assert!(cli.cache_dir.is_none());
    }

    #[test]
    fn test_cli_plain_flag() {
        let cli = Cli::parse_from(["dailyword", "--plain"]);
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_cache_dir_takes_a_value() {
        let cli = Cli::parse_from(["dailyword", "--cache-dir", "/tmp/somewhere"]);
        assert_eq!(
            cli.cache_dir.as_deref(),
            Some(std::path::Path::new("/tmp/somewhere"))
        );
    }
}

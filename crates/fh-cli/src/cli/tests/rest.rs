//! Tests for the checksum and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[test]
fn cli_parse_checksum() {
    match parse(&["fh", "checksum", "/tmp/file.bin"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, PathBuf::from("/tmp/file.bin"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_checksum_requires_path() {
    assert!(crate::cli::Cli::try_parse_from(["fh", "checksum"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["fh", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["fh"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["fh", "frobnicate"]).is_err());
}

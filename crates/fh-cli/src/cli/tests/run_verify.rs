//! Tests for the run and verify subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_run() {
    match parse(&["fh", "run"]) {
        CliCommand::Run { data_dir } => assert!(data_dir.is_none()),
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_data_dir() {
    match parse(&["fh", "run", "--data-dir", "/tmp/fh-test"]) {
        CliCommand::Run { data_dir } => {
            assert_eq!(data_dir, Some(PathBuf::from("/tmp/fh-test")));
        }
        _ => panic!("expected Run with --data-dir"),
    }
}

#[test]
fn cli_parse_verify() {
    match parse(&["fh", "verify", "/tmp/some-file"]) {
        CliCommand::Verify { path } => {
            assert_eq!(path, PathBuf::from("/tmp/some-file"));
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_requires_path() {
    assert!(crate::cli::Cli::try_parse_from(["fh", "verify"]).is_err());
}

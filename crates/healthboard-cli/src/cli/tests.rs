//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_show() {
    match parse(&["healthboard", "show"]) {
        CliCommand::Show { json } => assert!(!json),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_json() {
    match parse(&["healthboard", "show", "--json"]) {
        CliCommand::Show { json } => assert!(json),
        _ => panic!("expected Show with --json"),
    }
}

#[test]
fn cli_parse_base_url() {
    match parse(&["healthboard", "base-url"]) {
        CliCommand::BaseUrl { explain } => assert!(!explain),
        _ => panic!("expected BaseUrl"),
    }
}

#[test]
fn cli_parse_base_url_explain() {
    match parse(&["healthboard", "base-url", "--explain"]) {
        CliCommand::BaseUrl { explain } => assert!(explain),
        _ => panic!("expected BaseUrl with --explain"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["healthboard", "check"]) {
        CliCommand::Check { json, path } => {
            assert!(!json);
            assert!(path.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_json_and_path() {
    match parse(&["healthboard", "check", "--json", "--path", "/healthz"]) {
        CliCommand::Check { json, path } => {
            assert!(json);
            assert_eq!(path.as_deref(), Some("/healthz"));
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["healthboard", "download"]).is_err());
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["healthboard"]).is_err());
}

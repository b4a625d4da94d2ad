//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_now() {
    assert!(matches!(parse(&["wallclock", "now"]), CliCommand::Now));
}

#[test]
fn cli_parse_watch_defaults() {
    match parse(&["wallclock", "watch"]) {
        CliCommand::Watch { interval } => assert!(interval.is_none()),
        _ => panic!("expected Watch"),
    }
}

#[test]
fn cli_parse_watch_interval() {
    match parse(&["wallclock", "watch", "--interval", "5"]) {
        CliCommand::Watch { interval } => assert_eq!(interval, Some(5)),
        _ => panic!("expected Watch with --interval"),
    }
}

#[test]
fn cli_parse_endpoints() {
    assert!(matches!(
        parse(&["wallclock", "endpoints"]),
        CliCommand::Endpoints
    ));
}

#[test]
fn cli_parse_check() {
    match parse(&["wallclock", "check", "https://example.com/time"]) {
        CliCommand::Check { url } => assert_eq!(url, "https://example.com/time"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["wallclock", "frobnicate"]).is_err());
}

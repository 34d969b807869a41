//! Tests for health and model subcommands.

use super::parse;
use crate::cli::{CliCommand, ModelCommand};

#[test]
fn cli_parse_health() {
    match parse(&["linkscan", "health"]) {
        CliCommand::Health { socket } => assert!(socket.is_none()),
        _ => panic!("expected Health"),
    }
}

#[test]
fn cli_parse_health_with_socket() {
    match parse(&["linkscan", "health", "--socket", "/tmp/x.sock"]) {
        CliCommand::Health { socket } => {
            assert_eq!(socket.as_deref(), Some(std::path::Path::new("/tmp/x.sock")));
        }
        _ => panic!("expected Health with --socket"),
    }
}

#[test]
fn cli_parse_model_check() {
    match parse(&["linkscan", "model", "check", "/opt/model.json"]) {
        CliCommand::Model {
            command: ModelCommand::Check { path },
        } => assert_eq!(path, std::path::PathBuf::from("/opt/model.json")),
        _ => panic!("expected Model Check"),
    }
}

#[test]
fn cli_parse_model_inspect() {
    match parse(&["linkscan", "model", "inspect", "m.json"]) {
        CliCommand::Model {
            command: ModelCommand::Inspect { path },
        } => assert_eq!(path, std::path::PathBuf::from("m.json")),
        _ => panic!("expected Model Inspect"),
    }
}

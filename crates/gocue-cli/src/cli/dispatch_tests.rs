//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Shared flags: every rendering command accepts the same flag set
//! 2. Help visibility: `--verbatim` only shows up for `go`
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{cue_command, go_command, json_command};

#[test]
fn go_extracts_all_flags() {
    let m = go_command()
        .try_get_matches_from([
            "go",
            "types.json",
            "--package",
            "models",
            "--cue-package",
            "schema",
            "--exclude-import",
            "unsafe",
            "--exclude-import",
            "C",
            "--exclude-type",
            "Secret",
            "--proto-enums",
            "--verbatim",
            "-o",
            "out.go",
        ])
        .expect("go accepts all flags");

    let params = RenderParams::from_matches(&m, OutputSyntax::Go);

    assert_eq!(params.input, PathBuf::from("types.json"));
    assert_eq!(params.package.as_deref(), Some("models"));
    assert_eq!(params.cue_package.as_deref(), Some("schema"));
    assert_eq!(params.exclude_imports, ["unsafe", "C"]);
    assert_eq!(params.exclude_types, ["Secret"]);
    assert!(params.proto_enums);
    assert!(params.verbatim);
    assert_eq!(params.output, Some(PathBuf::from("out.go")));
}

#[test]
fn defaults_are_empty() {
    let m = cue_command()
        .try_get_matches_from(["cue", "-"])
        .expect("stdin input");

    let params = RenderParams::from_matches(&m, OutputSyntax::Cue);

    assert_eq!(params.input, PathBuf::from("-"));
    assert_eq!(params.package, None);
    assert!(params.exclude_imports.is_empty());
    assert!(params.exclude_types.is_empty());
    assert!(!params.proto_enums);
    assert_eq!(params.output, None);
}

#[test]
fn cue_accepts_but_ignores_verbatim() {
    let m = cue_command()
        .try_get_matches_from(["cue", "types.json", "--verbatim"])
        .expect("hidden flag accepted");

    let params = RenderParams::from_matches(&m, OutputSyntax::Cue);

    assert!(!params.verbatim);
}

#[test]
fn input_is_required() {
    let result = json_command().try_get_matches_from(["json"]);

    assert!(result.is_err());
}

#[test]
fn verbatim_hidden_outside_go() {
    let mut go = go_command();
    let mut cue = cue_command();

    let go_help = go.render_help().to_string();
    let cue_help = cue.render_help().to_string();

    assert!(go_help.contains("--verbatim"));
    assert!(!cue_help.contains("--verbatim"));
    assert!(cue_help.contains("--exclude-type"));
}

#[test]
fn subcommand_required() {
    let result = build_cli().try_get_matches_from(["gocue"]);

    assert!(result.is_err());
}

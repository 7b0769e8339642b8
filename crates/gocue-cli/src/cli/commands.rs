//! Command builders for the CLI.
//!
//! `go`, `cue` and `json` share one flag set so a script can switch output
//! syntax by changing the subcommand alone. `--verbatim` only affects `go`
//! and is hidden elsewhere.

use clap::Command;

use super::args::*;

/// Flags every rendering command accepts.
fn with_build_args(cmd: Command) -> Command {
    cmd.arg(input_arg())
        .arg(package_arg())
        .arg(cue_package_arg())
        .arg(exclude_import_arg())
        .arg(exclude_type_arg())
        .arg(proto_enums_arg())
        .arg(output_file_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gocue")
        .about("Project Go type declarations into Go and CUE definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(go_command())
        .subcommand(cue_command())
        .subcommand(json_command())
}

/// Render declaration syntax.
pub fn go_command() -> Command {
    let cmd = Command::new("go")
        .about("Render Go type declarations")
        .after_help(
            r#"EXAMPLES:
  gocue go types.json                        # formatted Go source
  gocue go types.json --exclude-type Secret  # drop a type everywhere
  gocue go types.json --verbatim -o out.go   # raw rendering to a file"#,
        )
        .arg(verbatim_arg());
    with_build_args(cmd)
}

/// Render schema syntax.
pub fn cue_command() -> Command {
    let cmd = Command::new("cue")
        .about("Render CUE definitions")
        .after_help(
            r#"EXAMPLES:
  gocue cue types.json                       # CUE schema on stdout
  gocue cue types.json --cue-package schema  # override the package clause
  gocue cue - --proto-enums < types.json     # promote protobuf enums"#,
        )
        .arg(verbatim_arg().hide(true));
    with_build_args(cmd)
}

/// Dump the intermediate representation.
pub fn json_command() -> Command {
    let cmd = Command::new("json")
        .about("Dump the intermediate representation as JSON")
        .arg(verbatim_arg().hide(true));
    with_build_args(cmd)
}

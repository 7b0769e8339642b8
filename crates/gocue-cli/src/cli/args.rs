//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! hidden where a command accepts but ignores it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Module JSON file, `-` for stdin (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Module JSON file, or - for stdin")
}

/// Go package name (--package).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .long("package")
        .value_name("NAME")
        .help("Go package name (defaults to the module's package)")
}

/// CUE package name (--cue-package).
pub fn cue_package_arg() -> Arg {
    Arg::new("cue_package")
        .long("cue-package")
        .value_name("NAME")
        .help("CUE package name (defaults to the Go package name)")
}

/// Drop imports by path (--exclude-import, repeatable).
pub fn exclude_import_arg() -> Arg {
    Arg::new("exclude_import")
        .long("exclude-import")
        .value_name("PATH")
        .action(ArgAction::Append)
        .help("Drop the import with this path (repeatable)")
}

/// Drop declarations and fields by name (--exclude-type, repeatable).
pub fn exclude_type_arg() -> Arg {
    Arg::new("exclude_type")
        .long("exclude-type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Drop declarations and struct fields with this name (repeatable)")
}

/// Promote protobuf enum value tables (--proto-enums).
pub fn proto_enums_arg() -> Arg {
    Arg::new("proto_enums")
        .long("proto-enums")
        .action(ArgAction::SetTrue)
        .help("Promote protoc-gen-go enum value tables to string enums")
}

/// Skip Go formatting (--verbatim).
pub fn verbatim_arg() -> Arg {
    Arg::new("verbatim")
        .long("verbatim")
        .action(ArgAction::SetTrue)
        .help("Emit Go source without reformatting")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

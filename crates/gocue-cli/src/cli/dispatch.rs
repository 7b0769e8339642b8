//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::OutputSyntax;
use crate::commands::render::RenderArgs;

pub struct RenderParams {
    pub syntax: OutputSyntax,
    pub input: PathBuf,
    pub package: Option<String>,
    pub cue_package: Option<String>,
    pub exclude_imports: Vec<String>,
    pub exclude_types: Vec<String>,
    pub proto_enums: bool,
    pub verbatim: bool,
    pub output: Option<PathBuf>,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches, syntax: OutputSyntax) -> Self {
        Self {
            syntax,
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            package: m.get_one::<String>("package").cloned(),
            cue_package: m.get_one::<String>("cue_package").cloned(),
            exclude_imports: strings(m, "exclude_import"),
            exclude_types: strings(m, "exclude_type"),
            proto_enums: m.get_flag("proto_enums"),
            // Only meaningful for Go output.
            verbatim: syntax == OutputSyntax::Go && m.get_flag("verbatim"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            syntax: p.syntax,
            input: p.input,
            package: p.package,
            cue_package: p.cue_package,
            exclude_imports: p.exclude_imports,
            exclude_types: p.exclude_types,
            proto_enums: p.proto_enums,
            verbatim: p.verbatim,
            output: p.output,
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

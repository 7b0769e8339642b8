mod cli;
mod commands;
mod error;
mod logging;

use cli::{OutputSyntax, RenderParams, build_cli};

fn main() {
    logging::init();

    let matches = build_cli().get_matches();

    let (m, syntax) = match matches.subcommand() {
        Some(("go", m)) => (m, OutputSyntax::Go),
        Some(("cue", m)) => (m, OutputSyntax::Cue),
        Some(("json", m)) => (m, OutputSyntax::Json),
        _ => unreachable!("clap should have caught this"),
    };

    let params = RenderParams::from_matches(m, syntax);
    commands::render::run(params.into());
}

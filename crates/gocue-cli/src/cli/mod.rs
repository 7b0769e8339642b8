mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::RenderParams;

/// Which rendering a subcommand produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputSyntax {
    Go,
    Cue,
    Json,
}

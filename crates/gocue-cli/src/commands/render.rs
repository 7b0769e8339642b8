use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use gocue_lib::ast::Module;
use gocue_lib::emit::Verbatim;
use gocue_lib::transform::{EnumSynthesizer, ProtoEnumConvention};
use gocue_lib::{File, FileBuilder, Transform};

use crate::cli::OutputSyntax;
use crate::error::CliError;

pub struct RenderArgs {
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

pub fn run(args: RenderArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub fn execute(args: &RenderArgs) -> Result<(), CliError> {
    let module = load_module(&args.input)?;
    let file = build_file(args, &module)?;
    let rendered = render(args, &file)?;
    write_output(args.output.as_deref(), &rendered)
}

pub fn load_module(path: &Path) -> Result<Module, CliError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(serde_json::from_str(&text)?)
}

pub fn build_file(args: &RenderArgs, module: &Module) -> Result<File, CliError> {
    let mut builder = FileBuilder::new();
    if let Some(name) = &args.package {
        builder = builder.package_name(name);
    }
    if let Some(name) = &args.cue_package {
        builder = builder.cue_package_name(name);
    }
    for path in &args.exclude_imports {
        let path = path.clone();
        builder = builder.transform(Transform::exclude_import(move |imp| imp.path == path));
    }
    for name in &args.exclude_types {
        builder = builder.transform(Transform::exclude_type_named(name));
    }
    if args.proto_enums {
        builder = builder.transform(EnumSynthesizer::new(ProtoEnumConvention));
    }

    let file = builder.build(module)?;
    tracing::debug!(
        package = file.package_name(),
        types = file.code().len(),
        imports = file.imports().len(),
        "built file"
    );
    Ok(file)
}

fn render(args: &RenderArgs, file: &File) -> Result<String, CliError> {
    let rendered = match args.syntax {
        OutputSyntax::Go if args.verbatim => file.go_with(&Verbatim)?,
        OutputSyntax::Go => file.go()?,
        OutputSyntax::Cue => file.cue(),
        OutputSyntax::Json => file.reflect()?,
    };
    Ok(rendered)
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    let mut text = rendered.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }

    let Some(path) = output else {
        print!("{}", text);
        return io::stdout().flush().map_err(|source| CliError::Write {
            path: PathBuf::from("-"),
            source,
        });
    };

    fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

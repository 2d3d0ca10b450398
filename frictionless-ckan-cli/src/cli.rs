use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use frictionless_ckan::{ConvertError, Converter, ConverterConfig, LicensePolicy};
use serde_json::Value;
use thiserror::Error;

/// What kind of Frictionless descriptor the input holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Package,
    Resource,
}

/// Parsed command line options
#[derive(Debug, Clone)]
pub struct Options {
    pub target: Target,
    /// Input file, `None` for stdin
    pub input: Option<PathBuf>,
    /// Output file, `None` for stdout
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub config: ConverterConfig,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("missing command, expected `package` or `resource`")]
    MissingCommand,
    #[error("{path}: {source}")]
    File { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Descriptor to convert; reads stdin when omitted or `-`")
        .value_name("FILE")
        .index(1)
}

pub fn command() -> Command {
    Command::new("frictionless-ckan")
        .about("Convert Frictionless data-package descriptors into CKAN dataset JSON")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write the converted JSON to FILE instead of stdout")
                .global(true),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the converted JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("package")
                .about("Convert a data package (datapackage.json) into a CKAN dataset")
                .arg(input_arg())
                .arg(
                    Arg::new("consume-single-license")
                        .long("consume-single-license")
                        .help("Drop a single-entry `licenses` list once it is promoted to license_id/title/url")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("known-key")
                        .long("known-key")
                        .short('k')
                        .value_name("KEY")
                        .help("Keep KEY as a top-level dataset field instead of moving it into extras")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("resource")
                .about("Convert a single data resource into a CKAN resource")
                .arg(input_arg()),
        )
        .after_help(
            "EXAMPLES:\n\
             \x20 frictionless-ckan package datapackage.json --pretty\n\
             \x20 frictionless-ckan package -k spatial -k temporal < datapackage.json\n\
             \x20 frictionless-ckan resource resource.json -o ckan-resource.json",
        )
}

fn path_arg(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches
        .get_one::<String>(id)
        .filter(|value| value.as_str() != "-")
        .map(PathBuf::from)
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> CliResult<Self> {
        let (target, sub) = match matches.subcommand() {
            Some(("package", sub)) => (Target::Package, sub),
            Some(("resource", sub)) => (Target::Resource, sub),
            _ => return Err(CliError::MissingCommand),
        };

        let mut config = ConverterConfig::new();
        if target == Target::Package {
            if sub.get_flag("consume-single-license") {
                config = config.with_license_policy(LicensePolicy::Consume);
            }
            if let Some(keys) = sub.get_many::<String>("known-key") {
                config = config.with_known_keys(keys.cloned());
            }
        }

        Ok(Self {
            target,
            input: path_arg(sub, "input"),
            output: path_arg(sub, "output"),
            pretty: sub.get_flag("pretty"),
            config,
        })
    }
}

/// Convert one JSON document and render the result as JSON text
pub fn convert_document(options: &Options, text: &str) -> CliResult<String> {
    let document: Value = serde_json::from_str(text).map_err(CliError::InvalidJson)?;
    let converter = Converter::new(options.config.clone());

    let converted = match options.target {
        Target::Package => converter.package_value(document)?,
        Target::Resource => converter.resource_value(document)?,
    };

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&converted)
    } else {
        serde_json::to_string(&converted)
    };
    rendered.map_err(CliError::Serialization)
}

fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::File {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> CliResult<()> {
    match path {
        Some(path) => fs::write(path, format!("{text}\n")).map_err(|source| CliError::File {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

pub fn run(options: &Options) -> CliResult<()> {
    let source = options
        .input
        .as_deref()
        .map_or_else(|| "stdin".to_owned(), |path| path.display().to_string());
    tracing::info!(kind = ?options.target, %source, "converting descriptor");

    let text = read_input(options.input.as_deref())?;
    let rendered = convert_document(options, &text)?;
    write_output(options.output.as_deref(), &rendered)?;

    tracing::debug!(bytes = rendered.len(), "wrote converted descriptor");
    Ok(())
}

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::{Arg, ArgMatches, Command};
use tracing::{debug, info};

use ruby_yaml_i18n::{
    CodecError, DocumentCodec, codec_for_extension, decode_flat_json, encode_flat_json, flatten,
    unflatten,
};

fn cli() -> Command {
    let input = Arg::new("input").help("Path to the input file").required(true);
    let format = Arg::new("format")
        .long("format")
        .short('f')
        .help("Document format: yaml or json (default: from the file extension)");

    Command::new("ruby-yaml-i18n")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Rails-style YAML locale files to flat messages and back")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log every folded plural and skipped entry")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("flatten")
                .about("Print a nested document as flat JSON with {{PLURAL|...}} markers")
                .arg(input.clone())
                .arg(format.clone()),
        )
        .subcommand(
            Command::new("unflatten")
                .about("Rebuild a nested document from flat JSON")
                .arg(input)
                .arg(format.default_value("yaml")),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn select_codec(matches: &ArgMatches, path: &Path) -> Result<Box<dyn DocumentCodec>, CodecError> {
    if let Some(format) = matches.get_one::<String>("format") {
        return codec_for_extension(format);
    }
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    codec_for_extension(extension)
}

fn run_flatten(matches: &ArgMatches) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(input) = matches.get_one::<String>("input") else {
        return Err("Missing input path".into());
    };
    let path = Path::new(input);
    let codec = select_codec(matches, path)?;
    let bytes = fs::read(path).map_err(|e| format!("Failed to read '{}': {}", input, e))?;

    let doc = codec.decode(&bytes)?;
    let flat = flatten(&doc)?;
    info!("Flattened {} into {} messages", input, flat.len());
    Ok(encode_flat_json(&flat)?)
}

fn run_unflatten(matches: &ArgMatches) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(input) = matches.get_one::<String>("input") else {
        return Err("Missing input path".into());
    };
    let codec = select_codec(matches, Path::new(input))?;
    let bytes = fs::read(input).map_err(|e| format!("Failed to read '{}': {}", input, e))?;

    let flat = decode_flat_json(&bytes)?;
    debug!("Read {} flat messages from {}", flat.len(), input);
    let doc = unflatten(&flat);
    Ok(codec.encode(&doc)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let output = match matches.subcommand() {
        Some(("flatten", sub)) => run_flatten(sub)?,
        Some(("unflatten", sub)) => run_unflatten(sub)?,
        _ => return Err("Unknown command".into()),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

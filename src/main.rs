//! Command-line interface for xsdavro

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use xsdavro::{ConverterConfig, SchemaConverter, XsdTranslator};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsdavro")]
#[command(author, version, about = "Convert XML Schema (XSD) files to Apache Avro schemas", long_about = None)]
struct Cli {
    /// Directory containing XML schema files
    #[arg(short, long, value_name = "DIR")]
    source_dir: PathBuf,

    /// Directory where Avro schema files will be written
    #[arg(short, long, value_name = "DIR")]
    output_dir: PathBuf,

    /// Namespace for generated Avro named types
    #[arg(short, long)]
    namespace: String,

    /// Glob pattern selecting schema files (repeatable; default **/*.xsd)
    #[arg(short, long = "include", value_name = "PATTERN")]
    includes: Vec<String>,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = ConverterConfig::new(cli.source_dir, cli.output_dir, cli.namespace)
        .with_includes(cli.includes);
    let converter = SchemaConverter::new(config, XsdTranslator::new());

    match converter.convert_all() {
        Ok(outputs) => {
            println!("Converted {} schema(s)", outputs.len());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}

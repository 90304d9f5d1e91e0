use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use slashpick::config::Config;
use slashpick::document::loader::{load_document_file, load_document_from_stdin};
use slashpick::query::{Evaluator, Extraction, Truthiness};
use slashpick::store::{get_values, DirectoryStore};

/// slashpick - Pull values out of nested documents with slash-delimited paths
#[derive(Parser)]
#[command(name = "slashpick")]
#[command(version)]
#[command(about = "Pull values out of JSON/YAML documents with slash-delimited paths", long_about = None)]
struct Cli {
    /// Paths to extract, e.g. `user/name` or `orders/[n]/total`
    #[arg(required = true)]
    paths: Vec<String>,

    /// Document file to query (omit to read from stdin)
    #[arg(short, long, conflicts_with = "name")]
    file: Option<PathBuf>,

    /// Fetch the document by name from the store directory
    #[arg(short, long)]
    name: Option<String>,

    /// Store directory for --name (default: `store_dir` from the config file)
    #[arg(long, requires = "name")]
    store: Option<PathBuf>,

    /// Keep 0, false and "" when filtering array results
    #[arg(long)]
    strict: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load();
    let truthiness = if cli.strict {
        Truthiness::Strict
    } else {
        config.truthiness
    };
    let pretty = config.pretty && !cli.compact;

    let extraction = if let Some(name) = &cli.name {
        let store_dir = cli
            .store
            .clone()
            .or_else(|| config.store_dir.clone())
            .context("--name needs --store or `store_dir` in the config file")?;
        log::debug!("fetching '{}' from store {}", name, store_dir.display());

        let store = DirectoryStore::new(store_dir);
        get_values(&store, name, cli.paths.clone(), truthiness)
    } else {
        let document = if let Some(file_path) = &cli.file {
            log::debug!("reading {}", file_path.display());
            load_document_file(file_path)?
        } else if !io::stdin().is_terminal() {
            log::debug!("reading stdin");
            load_document_from_stdin()?
        } else {
            anyhow::bail!("No input: pass --file, --name, or pipe a document on stdin");
        };

        Evaluator::with_truthiness(&document, truthiness).extract(cli.paths.clone())
    };

    match extraction {
        Some(found) => {
            let mut stdout = io::stdout().lock();
            write_value(&mut stdout, &found, pretty, config.indent_size)?;
            Ok(())
        }
        None => {
            log::debug!("no values found");
            std::process::exit(1);
        }
    }
}

fn write_value<W: Write>(out: &mut W, found: &Extraction, pretty: bool, indent: usize) -> Result<()> {
    let value: Value = found.clone().into_value();
    if pretty {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
        value
            .serialize(&mut serializer)
            .context("Failed to write output")?;
    } else {
        serde_json::to_writer(&mut *out, &value).context("Failed to write output")?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

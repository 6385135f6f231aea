//! rpngrid - Evaluate a grid of postfix formulas.

mod config;
mod logging;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use rpngrid_core::Document;
use rpngrid_core::storage::{WriteOptions, parse_delimiter, write_delimited_to};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "rpngrid")]
#[command(version)]
#[command(about = "Evaluate a delimited grid of postfix (RPN) formulas")]
#[command(after_help = "\
Each field is a whitespace-separated postfix expression of numbers, cell
references (A1, B12, AA3) and the operators + - * /. Cells that cannot be
evaluated are written as the error marker.

Example:
  printf '5,A1 2 *\\n3 4 +,B1 A2 /\\n' > grid.csv && rpngrid grid.csv")]
struct Cli {
    /// Input file, one grid row per line
    input: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Field delimiter (default ",")
    #[arg(short, long, value_name = "CHAR")]
    delimiter: Option<String>,

    /// Text written for cells that cannot be evaluated (default "#ERR")
    #[arg(long, value_name = "TEXT")]
    error_marker: Option<String>,

    /// Read settings from this file instead of the user config
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore the user config file
    #[arg(long)]
    no_config: bool,

    /// Print the evaluation order to stderr, one address per line
    #[arg(long)]
    order: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RPNGRID_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = if cli.no_config {
        config::Config::default()
    } else {
        let (config, warnings) = config::load_config(cli.config.as_ref());
        for warning in warnings {
            warn!("{}", warning);
        }
        config
    };

    if let Some(delimiter) = &cli.delimiter {
        config.delimiter = parse_delimiter(delimiter)?;
    }
    if let Some(marker) = cli.error_marker {
        config.error_marker = marker;
    }
    config::check_error_marker(&config.error_marker, config.delimiter).map_err(|e| anyhow!(e))?;

    let mut doc = Document::open(&cli.input, config.delimiter)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    let summary = doc.evaluate();

    if cli.order {
        for cell_ref in doc.evaluation_order() {
            eprintln!("{}", cell_ref);
        }
    }

    let options = WriteOptions {
        delimiter: config.delimiter,
        error_marker: config.error_marker,
    };
    match cli.output {
        Some(path) => {
            doc.write_file(&path, &options)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                cells = summary.cells,
                errors = summary.errors,
                "wrote output"
            );
        }
        None => write_delimited_to(io::stdout().lock(), doc.grid(), &options)
            .context("Failed to write output")?,
    }

    Ok(())
}

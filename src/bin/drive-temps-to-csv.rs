//! CLI tool to extract drive temperatures from a raw health dump.
//!
//! Usage:
//!   drive-temps-to-csv --filename <dump.json> --debug
//!   drive-temps-to-csv --filename <dump.json> -o <temps.csv>
//!
//! Without `--debug` or `--output` the dump is processed and the lines are
//! discarded.

use clap::Parser;
use drive_temps::{Pipeline, load_dump};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Extracts drive temperature values from health data returned by the
/// storage appliance.
#[derive(Parser)]
#[command(name = "drive-temps-to-csv")]
struct Cli {
    /// Path to file containing raw JSON data gathered from the appliance
    #[arg(long)]
    filename: Option<String>,

    /// Enable output of transformed data to stdout
    #[arg(long)]
    debug: bool,

    /// Also write transformed data to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show record counts and skip reasons on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(filename) = cli.filename.as_deref().filter(|name| !name.is_empty()) else {
        eprintln!("Please specify filename containing raw JSON data");
        process::exit(1);
    };

    let records = match load_dump(Path::new(filename)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let mut sinks: Vec<Box<dyn Write>> = Vec::new();
    if cli.debug {
        sinks.push(Box::new(io::stdout().lock()));
    }
    if let Some(out_path) = &cli.output {
        if let Some(parent) = out_path.parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!(
                "Error creating output directory for '{}'",
                out_path.display()
            );
            process::exit(1);
        }
        match File::create(out_path) {
            Ok(file) => sinks.push(Box::new(BufWriter::new(file))),
            Err(e) => {
                eprintln!("Error writing output file '{}': {e}", out_path.display());
                process::exit(1);
            }
        }
    }

    let pipeline = Pipeline::new();
    let result = pipeline
        .run(&records, |line| -> io::Result<()> {
            for sink in sinks.iter_mut() {
                writeln!(sink, "{line}")?;
            }
            Ok(())
        })
        .and_then(|report| {
            for sink in sinks.iter_mut() {
                sink.flush()?;
            }
            Ok(report)
        });

    match result {
        Ok(report) => {
            if cli.verbose {
                eprintln!("Input:    {filename}");
                eprintln!("{report}");
            }
        }
        Err(e) => {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }
}

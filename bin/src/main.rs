mod config;
mod prompt;
mod stats;

use std::io;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use objcull::ReadOptions;
use objcull::session::{self, Outcome, SessionOptions};
use crate::config::{Config, LogFormat};
use crate::prompt::ConsolePrompt;

#[derive(Parser)]
#[command(name = "objcull")]
#[command(about = "Remove vertices from an OBJ model and drop the faces that used them")]
#[command(version)]
struct Args {
    /// Input OBJ file (asked for on the console when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output OBJ file (asked for on the console when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Zero-based vertex indices to remove, comma separated (e.g. "0,4,7")
    #[arg(short, long, value_delimiter = ',')]
    remove: Option<Vec<usize>>,

    /// Write the result back over the input file
    #[arg(long)]
    overwrite: bool,

    /// Skip reading the saved file back for comparison
    #[arg(long)]
    no_verify: bool,

    /// Also bounds-check texture and normal indices when reading
    #[arg(long)]
    strict_indices: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Logging output filters; comma-separated
    #[arg(long, env = "OBJCULL_LOG")]
    log_filter: Option<String>,

    /// Logging output format
    #[arg(long)]
    log_format: Option<LogFormat>,
}

/// Log to stderr so prompts on stdout stay readable.
fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Full => subscriber.init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Handle config generation
    if args.generate_config {
        let config_path = args.config.unwrap_or_else(|| PathBuf::from("objcull.json"));
        Config::save_default(&config_path)?;
        return Ok(());
    }

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if args.input.is_some() {
        config.input.path = args.input;
    }
    if args.output.is_some() {
        config.output.path = args.output;
    }
    if let Some(remove) = args.remove {
        config.removal.vertices = remove;
    }
    if args.overwrite {
        config.output.overwrite = true;
    }
    if args.no_verify {
        config.output.verify = false;
    }
    if args.strict_indices {
        config.input.strict_indices = true;
    }
    if let Some(log_filter) = args.log_filter {
        config.logging.filter = log_filter;
    }
    if let Some(log_format) = args.log_format {
        config.logging.format = log_format;
    }

    initialize_tracing(&config.logging.filter, config.logging.format);

    let options = SessionOptions {
        read: ReadOptions {
            strict_indices: config.input.strict_indices,
        },
        verify: config.output.verify,
    };

    let stdin = io::stdin();
    let mut console = ConsolePrompt::new(&config, stdin.lock(), io::stdout());

    let outcome = session::run(&mut console, options).context("Failed to process model")?;

    match outcome {
        Outcome::Saved { path, report, verified } => {
            stats::print_summary(&path, &report, verified);
        }
        Outcome::Aborted(reason) => {
            println!("Nothing was saved ({:?})", reason);
        }
    }

    Ok(())
}

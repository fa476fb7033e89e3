//! # oeval CLI entry point
//!
//! Parses command-line arguments, initialises tracing, and dispatches to
//! the subcommand handlers. Reports go to stdout, logs to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oeval_cli::schema::{run_schema, SchemaArgs};
use oeval_cli::validate::{run_validate, ValidateArgs};

/// OpenEval item validator.
///
/// Checks contributed items against the item schema and reports every
/// missing, null, empty, or mistyped field in one pass.
#[derive(Parser, Debug)]
#[command(name = "oeval", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Schema file to use instead of the bundled item schema.
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a file of items against the schema.
    Validate(ValidateArgs),

    /// List schema fields and how each one is checked.
    Schema(SchemaArgs),
}

/// Exit code when the schema or the input cannot be loaded.
const EXIT_LOAD_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "oeval starting");

    let schema = cli.schema.as_deref();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, schema, &mut out),
        Commands::Schema(args) => run_schema(args, schema, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_LOAD_FAILURE)
        }
    }
}

//! loxc CLI - scan Lox source into tokens.
//!
//! With a script argument, prints the script's tokens and exits with 65 if
//! any lexical error was reported. Without one, starts an interactive
//! prompt that scans each line as it is entered.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxc_drv::{Config, DriverError, OutputFormat, Session, EXIT_SOFTWARE, EXIT_USAGE};

/// loxc - Lexical scanner for Lox
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Script to scan (starts an interactive prompt when omitted)
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOXC_CONFIG")]
    config: Option<PathBuf>,

    /// Token output format
    #[arg(short = 'F', long, value_enum, env = "LOXC_FORMAT")]
    format: Option<OutputFormat>,

    /// Print diagnostics without source snippets
    #[arg(long, env = "LOXC_NO_SNIPPETS")]
    no_snippets: bool,

    /// Disable color in log output
    #[arg(long, env = "LOXC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_exit_code(&e));
        },
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            let code = e
                .downcast_ref::<DriverError>()
                .map_or(EXIT_SOFTWARE, DriverError::exit_code);
            process::exit(code);
        },
    }
}

/// `--help` and `--version` succeed; anything else is a usage error.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

/// Loads configuration, installs logging and runs the script or prompt.
///
/// Returns the process exit status.
fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = apply_cli(load_config(cli.config.as_deref())?, &cli);
    init_logging(config.verbose, cli.no_color)?;
    tracing::debug!(?config, "starting");

    let session = Session::new(config);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match &cli.script {
        Some(path) => {
            let status = session.run_file(path, &mut out, &mut err)?;
            Ok(status.exit_code())
        },
        None => {
            session.run_prompt(&mut io::stdin().lock(), &mut out, &mut err)?;
            Ok(0)
        },
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> loxc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Command-line flags take precedence over the configuration file.
fn apply_cli(mut config: Config, cli: &Cli) -> Config {
    if cli.verbose {
        config.verbose = true;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_snippets {
        config.show_snippets = false;
    }
    config
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only tokens. `RUST_LOG` wins over
/// the verbosity setting when it is set.
fn init_logging(verbose: bool, no_color: bool) -> loxc_drv::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

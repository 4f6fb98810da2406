use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hydra_app::app::AppRunner;
use hydra_app::config::Config;
use hydra_app::error::AppResult;
use hydra_app::logging;

/// Config file loaded when no path is given.
///
/// Resolved against the crate directory recorded at compile time, so an
/// installed binary still reads it from the source tree it was built in.
const DEFAULT_CONFIG: &str = "config.yaml";

/// Load a YAML configuration file and print it.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to load instead of the bundled config.yaml
    config: Option<PathBuf>,

    /// Log loading steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn print_config(cfg: Config) -> AppResult<()> {
    let rendered = cfg.pretty()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let runner = match cli.config {
        Some(path) => AppRunner::new(".", path),
        None => AppRunner::new(env!("CARGO_MANIFEST_DIR"), DEFAULT_CONFIG),
    };

    match runner.run(print_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

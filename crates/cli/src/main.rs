//! Pipeline hazard analyser CLI.
//!
//! Reads a program file and analyses it under every configured policy. It performs:
//! 1. **Load:** Decode the program text, failing fast on unreadable or empty input.
//! 2. **Analyse:** One run per configuration, each on its own copy of the program.
//! 3. **Report:** Write `<run>_<N>.txt` files and echo each summary to stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stallscope_core::common::constants::DEFAULT_INPUT;
use stallscope_core::sim::load_program;
use stallscope_core::{Analyzer, Config};

#[derive(Parser, Debug)]
#[command(
    name = "stallscope",
    author,
    version,
    about = "Count pipeline stalls with and without forwarding and branch prediction",
    long_about = "Analyse a MIPS-like program (one instruction per line, e.g. `ADD R1 R2 R3`) \
                  under three policies: no forwarding and no branch prediction, forwarding \
                  without prediction, and forwarding with prediction.\n\n\
                  Examples:\n  stallscope\n  stallscope prog.txt -o reports --seed 7\n  \
                  stallscope prog.txt --config runs.json --no-files"
)]
struct Cli {
    /// Program file to analyse.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for report files (overrides the config file).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Seed for the branch misprediction draw (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not write report files.
    #[arg(long)]
    no_files: bool,

    /// Do not print run summaries.
    #[arg(long)]
    no_summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Builds the session configuration: config file first, then flag overrides.
    fn session_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dir) = &self.out_dir {
            config.output.dir.clone_from(dir);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_files {
            config.output.write_files = false;
        }
        if self.no_summary {
            config.output.echo_summary = false;
        }
        Ok(config)
    }
}

/// Installs the stderr log subscriber.
fn logging_setup(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging_setup(cli.verbose);

    let config = cli.session_config()?;
    let program = load_program(&cli.input)?;

    let analyzer = Analyzer::new(config);
    let outcomes = analyzer.run(&program);

    let written = analyzer
        .write_reports(&outcomes)
        .context("failed to write reports")?;
    for path in &written {
        info!(path = %path.display(), "report written");
    }

    if analyzer.config().output.echo_summary {
        for outcome in &outcomes {
            println!("\n{}", outcome.summary());
        }
    }
    Ok(())
}

//! Command-line front end: sorts integers read from stdin, or runs the
//! benchmark analysis and writes its CSV tables.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use bench::{AnalysisConfig, ConfigError, HarnessError, run_analysis};
use clap::{Args, Parser, Subcommand};
use hybrid_sort::{Threshold, sort_with_threshold};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "hybrid-sort")]
#[command(version, about = "Hybrid merge/insertion sort and its benchmark harness")]
pub struct Cli {
    /// Subcommand; defaults to `sort`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a count `n` and `n` integers from stdin, print them sorted on one line
    Sort {
        /// Largest range length handed to insertion sort
        #[arg(long, default_value_t = Threshold::DEFAULT, allow_hyphen_values = true)]
        threshold: Threshold,
    },
    /// Time merge sort and hybrid sort across sizes and thresholds, write CSV tables
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// TOML configuration file; defaults apply for anything it omits
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the CSV tables
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Trials per measurement
    #[arg(long)]
    pub trials: Option<usize>,

    /// Seed for the input generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl AnalyzeArgs {
    /// Command-line flags win over the configuration file.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(trials) = self.trials {
            config.sweep.trials = trials;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = seed;
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed input: {0}")]
    Input(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Default filter directive when `RUST_LOG` is unset. Sorting keeps stdout
/// clean, so only warnings are shown there.
pub fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if matches!(cli.command, Some(Commands::Analyze(_))) {
        "info"
    } else {
        "warn"
    }
}

pub fn init_tracing(cli: &Cli) {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(cli))),
        )
        .try_init();
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        None => run_sort(Threshold::DEFAULT),
        Some(Commands::Sort { threshold }) => run_sort(threshold),
        Some(Commands::Analyze(args)) => run_analyze(&args),
    }
}

fn run_sort(threshold: Threshold) -> Result<(), CliError> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    sort_stream(stdin, stdout, threshold)
}

fn run_analyze(args: &AnalyzeArgs) -> Result<(), CliError> {
    if args.print_config {
        let mut stdout = io::stdout().lock();
        stdout.write_all(AnalysisConfig::default_toml().as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    args.apply(&mut config);
    debug!(?config, "resolved analysis config");

    let report = run_analysis(&config)?;
    let written = report.write_to_dir(&config.output.directory, &config.output)?;
    info!(files = written.len(), "analysis complete");
    Ok(())
}

/// Reads `n` and then `n` integers, sorts them with `threshold`, and writes them
/// space-separated on a single line. Tokens after the `n`th value are ignored.
pub fn sort_stream<R: Read, W: Write>(
    mut input: R,
    output: W,
    threshold: Threshold,
) -> Result<(), CliError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut values = parse_input(&text)?;
    if !values.is_empty() {
        sort_with_threshold(&mut values, threshold);
    }
    write_line(output, &values)?;
    Ok(())
}

pub fn parse_input(text: &str) -> Result<Vec<i64>, CliError> {
    let mut tokens = text.split_ascii_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| CliError::Input("missing element count".to_string()))?;
    let count: i64 = count_token
        .parse()
        .map_err(|_| CliError::Input(format!("invalid element count {count_token:?}")))?;
    let count = usize::try_from(count)
        .map_err(|_| CliError::Input(format!("negative element count {count}")))?;

    let mut values = Vec::with_capacity(count.min(1 << 20));
    for index in 0..count {
        let token = tokens.next().ok_or_else(|| {
            CliError::Input(format!("expected {count} values, found {index}"))
        })?;
        let value = token
            .parse()
            .map_err(|_| CliError::Input(format!("invalid integer {token:?} at position {index}")))?;
        values.push(value);
    }
    Ok(values)
}

fn write_line<W: Write>(mut out: W, values: &[i64]) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out)?;
    out.flush()
}

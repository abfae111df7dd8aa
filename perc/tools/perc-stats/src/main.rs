#![forbid(unsafe_code)]

use std::fmt::Write;

use clap::{builder::RangedU64ValueParser, Parser, ValueEnum};
use log::LevelFilter;
use perc::{PercolationStats, Sampling, TrialConfig};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Estimates the percolation threshold of an n-by-n grid.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Grid side length
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    n: usize,

    /// Number of independent trials
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    trials: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = SamplingArg::Resample)]
    sampling: SamplingArg,

    /// Run trials on all cores
    #[arg(long)]
    parallel: bool,

    /// Log progress to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SamplingArg {
    Resample,
    Shuffle,
}

impl From<SamplingArg> for Sampling {
    fn from(value: SamplingArg) -> Self {
        match value {
            SamplingArg::Resample => Sampling::Resample,
            SamplingArg::Shuffle => Sampling::Shuffle,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut config = TrialConfig::new(args.n, args.trials)
        .sampling(args.sampling.into())
        .parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }

    let stats = PercolationStats::with_config(&config)?;
    print!("{}", report(&stats)?);
    Ok(())
}

fn report(stats: &PercolationStats) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "mean                    = {}", stats.mean())?;
    writeln!(out, "stddev                  = {}", stats.stddev())?;
    writeln!(
        out,
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    )?;
    Ok(out)
}

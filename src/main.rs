use std::{error::Error, num::NonZeroUsize, process};

use clap::Parser;
use sumsq::{
    BenchConfig, bench,
    config::{self, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SEED},
    report::{self, Format},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sumsq-bench",
    about = "Compares a naive and a streaming sum of squares",
    version,
    rename_all = "kebab-case"
)]
pub struct BenchmarkCmd {
    /// Number of generated items; overrides the `N` environment variable
    #[arg(short = 'n', long = "items", value_parser = config::parse_item_count)]
    items: Option<NonZeroUsize>,
    /// Timed repetitions per reducer
    #[arg(short = 'r', long = "repeat", default_value = "5", value_parser = config::parse_repeat)]
    repeat: NonZeroUsize,
    /// Seed of the input generator
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Smallest generated value
    #[arg(long = "min", default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: i32,
    /// Largest generated value
    #[arg(long = "max", default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: i32,
    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: Format,
}

fn main() {
    let args = BenchmarkCmd::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sumsq=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Runs the benchmark described by `args` and prints the report.
fn run(args: BenchmarkCmd) -> Result<(), Box<dyn Error>> {
    let config = match args.items {
        Some(items) => BenchConfig::new().with_items(items),
        None => BenchConfig::from_env()?,
    }
    .with_repeat(args.repeat)
    .with_seed(args.seed)
    .with_range(args.min, args.max)?;

    let comparison = bench::run(&config)?;
    let rendered = report::render(&comparison, args.format)?;
    match args.format {
        Format::Text => print!("{rendered}"),
        Format::Json => println!("{rendered}"),
    }

    Ok(())
}

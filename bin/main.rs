use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use qmcrs::minimize::{Minimizer, MinimizerOptions, MintermReader};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    None,
}

impl LogLevel {
    fn to_trace(&self) -> Option<tracing::Level> {
        Some(match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::None => return None,
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a text file with comma- or whitespace-separated decimal
    /// minterm indices.
    #[arg(short, long, value_name = "minterms.txt")]
    minterms_path: String,

    /// Number of Boolean variables the function ranges over.
    #[arg(short = 'n', long, default_value_t = 6)]
    variable_count: usize,

    /// Print the minterms satisfying the minimized expression.
    #[arg(short, long)]
    enumerate_minterms: bool,

    /// Verbosity level. See `tracing::Level` for more information.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    verbosity: LogLevel,

    /// Print timing and size statistics.
    #[arg(short, long)]
    print_statistics: bool,
}

#[derive(Debug, Clone, Default)]
struct Statistics {
    minimization: Option<Duration>,
    minterms: Option<usize>,
    products: Option<usize>,
}

impl Statistics {
    fn print(&self) {
        if let Some(minimization) = self.minimization {
            println!("minimization time: {minimization:.2?}");
        }
        if let Some(minterms) = self.minterms {
            println!("input minterms   : {minterms}");
        }
        if let Some(products) = self.products {
            println!("output products  : {products}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Some(level) = args.verbosity.to_trace() {
        tracing_subscriber::fmt().with_max_level(level).init();
    }

    let f = File::open(&args.minterms_path)
        .with_context(|| format!("could not open '{}'", args.minterms_path))?;
    let mut reader = BufReader::new(f);
    let minterms = MintermReader::new(&mut reader)
        .parse_minterms(args.variable_count)
        .context("could not parse the minterm list")?;

    let options = MinimizerOptions::builder()
        .variable_count(args.variable_count)
        .build();
    let minimizer = Minimizer::new(options);

    let mut statistics = Statistics::default();
    statistics.minterms = Some(minterms.len());

    let minimization_start = Instant::now();
    let expression = minimizer
        .minimize(&minterms)
        .context("could not minimize the function")?;
    statistics.minimization = Some(minimization_start.elapsed());
    statistics.products = Some(expression.terms().len());

    println!("{expression}");

    if args.enumerate_minterms {
        for minterm in expression.satisfying_minterms() {
            println!("{minterm}");
        }
    }

    if args.print_statistics {
        statistics.print();
    }

    Ok(())
}

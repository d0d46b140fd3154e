//! OverlapSampler CLI entry point
//!
//! Samples window-boundary coordinate maps for every overlap of a PAF file.

use clap::{Parser, Subcommand, ValueEnum};
use overlap_sampler::core::{SamplingConfig, DEFAULT_SAMPLE_STEP};
use overlap_sampler::formats;
use std::path::PathBuf;
use std::time::Instant;

/// Log verbosity (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum LogLevelArg {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    /// Every resolved coordinate
    Trace,
}

impl LogLevelArg {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}

#[derive(Parser)]
#[command(name = "overlap-sampler")]
#[command(about = "Sample target-to-query coordinate maps for windowed consensus")]
#[command(version)]
#[command(author = "OverlapSampler Contributors")]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long = "log-level", global = true, default_value = "warn")]
    log_level: LogLevelArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample every overlap of a PAF file (alignments from the cg:Z: tag)
    Sample {
        /// Input PAF file (plain, gzip or bzip2)
        input: PathBuf,
        /// Output file (optional, stdout if not specified)
        output: Option<PathBuf>,
        /// Window length, the sampling interval on the target
        #[arg(short = 'w', long = "window-length", default_value_t = DEFAULT_SAMPLE_STEP)]
        window_length: u64,
        /// Extension radius sampled around each window boundary (0 disables)
        #[arg(short = 'e', long, default_value = "0")]
        extension: u64,
        /// Number of threads (0 = number of CPUs)
        #[arg(short = 't', long, default_value = "1")]
        threads: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_filter()),
    )
    .init();
    let start = Instant::now();

    match cli.command {
        Commands::Sample { input, output, window_length, extension, threads } => {
            let config = SamplingConfig::new(window_length, extension)
                .map_err(|e| anyhow::anyhow!("Invalid sampling parameters: {}", e))?;

            eprintln!("Sampling overlaps: {:?}", input);
            let stats = formats::convert_paf(&input, output.as_ref(), &config, threads)?;

            eprintln!("\n=== Sampling Statistics ===");
            eprintln!("Total records:   {}", stats.total);
            eprintln!("Sampled:         {}", stats.success);
            eprintln!("Failed:          {}", stats.failed);
            eprintln!("Empty maps:      {}", stats.empty);
            eprintln!("Sampled points:  {}", stats.points);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}

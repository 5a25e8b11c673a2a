//! CLI entrypoint for the string-copy benchmark.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use strxbench::chunk::Packing;
use strxbench::config::{BenchConfig, ConfigError, Revision};
use strxbench::driver::{Harness, SizeBudget};
use strxbench::timing::Clock;
use strxbench::variants;

/// Time bounded string-copy primitives over a chunked hex buffer.
#[derive(Debug, Parser)]
#[command(name = "strxbench")]
#[command(about = "Compare strncpy, strxcpy, strlcpy, snprintf and memcpy on chunked copies")]
struct Cli {
    /// Total source length in bytes (revision default if omitted).
    len: Option<usize>,
    /// Chunk size in bytes (revision default if omitted).
    step: Option<usize>,
    /// Harness revision supplying defaults.
    #[arg(long, value_enum, default_value_t = Revision::Second)]
    revision: Revision,
    /// Source stride between chunk starts [default: 2 * step].
    #[arg(long)]
    stride: Option<usize>,
    /// Destination placement, overriding the revision.
    #[arg(long, value_enum)]
    packing: Option<Packing>,
    /// Size passed to strlcpy-style copies, overriding the revision.
    #[arg(long, value_enum)]
    size_budget: Option<SizeBudget>,
    /// Clock used to time each pass.
    #[arg(long, value_enum, default_value_t = Clock::Cpu)]
    clock: Clock,
    /// Only run the named variant (repeatable).
    #[arg(long = "variant", value_name = "KEY")]
    variants: Vec<String>,
    /// List variant keys and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let base = BenchConfig::for_revision(self.revision);
        BenchConfig {
            len: self.len.unwrap_or(base.len),
            step: self.step.unwrap_or(base.step),
            stride: self.stride,
            packing: self.packing.unwrap_or(base.packing),
            size_budget: self.size_budget.unwrap_or(base.size_budget),
            clock: self.clock,
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let selected = variants::select(&cli.variants)?;
    let mut harness = Harness::new(cli.config())?;
    let config = harness.config();

    log::info!(
        "len={} step={} stride={} packing={:?} size_budget={:?} clock={:?}",
        config.len,
        config.step,
        config.effective_stride(),
        config.packing,
        config.size_budget,
        config.clock
    );

    let mut total = Duration::ZERO;
    for variant in &selected {
        let timing = harness.time(variant);
        total += timing.elapsed();
        println!("{timing}");
    }
    log::info!("{} variants in {:.3} sec", selected.len(), total.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list {
        for v in variants::available() {
            println!("{:<16} {}", v.key, v.label);
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use strxbench::chunk::Packing;
    use strxbench::driver::SizeBudget;
    use strxbench::timing::Clock;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_follow_revision() {
        let config = Cli::parse_from(["strxbench"]).config();
        assert_eq!((config.len, config.step), (3_000_000, 11));
        assert_eq!(config.packing, Packing::Packed);

        let config = Cli::parse_from(["strxbench", "--revision", "1"]).config();
        assert_eq!((config.len, config.step), (2_000_000, 10));
        assert_eq!(config.packing, Packing::Strided);
        assert_eq!(config.size_budget, SizeBudget::Chunk);
    }

    #[test]
    fn test_positionals_and_overrides() {
        let cli = Cli::parse_from([
            "strxbench",
            "5000",
            "7",
            "--stride",
            "7",
            "--packing",
            "strided",
            "--size-budget",
            "chunk-plus-nul",
            "--clock",
            "wall",
            "--variant",
            "strxcpy",
            "--variant",
            "gitstrlcpy",
        ]);
        let config = cli.config();
        assert_eq!((config.len, config.step), (5000, 7));
        assert_eq!(config.effective_stride(), 7);
        assert_eq!(config.packing, Packing::Strided);
        assert_eq!(config.size_budget, SizeBudget::ChunkPlusNul);
        assert_eq!(config.clock, Clock::Wall);
        assert_eq!(cli.variants, ["strxcpy", "gitstrlcpy"]);
    }

    #[test]
    fn test_rejects_non_numeric_len() {
        assert!(Cli::try_parse_from(["strxbench", "lots"]).is_err());
    }
}

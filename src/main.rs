use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_roster::io::{read_guards, write_schedule};
use u_roster::{RosterConfig, RosterError, RosterPipeline, RosterReport};

#[derive(Parser, Debug)]
#[command(name = "u-roster")]
#[command(about = "Builds and optimizes a guard duty roster", long_about = None)]
struct Args {
    /// Guard file (one guard per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Roster output path
    #[arg(short, long)]
    output: PathBuf,

    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Horizon length in days
    #[arg(long)]
    days: Option<usize>,

    /// Local search iterations
    #[arg(long)]
    max_iter: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &Args) -> Result<RosterConfig, RosterError> {
    let mut config = match &args.config {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };
    if let Some(days) = args.days {
        config = config.with_days(days);
    }
    if let Some(max_iter) = args.max_iter {
        config = config.with_max_iter(max_iter);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<RosterReport, RosterError> {
    let config = resolve_config(args)?;
    let guards = read_guards(&args.input)?;

    tracing::info!(
        input = %args.input.display(),
        guards = guards.len(),
        days = config.days,
        "loaded guard pool"
    );

    let outcome = RosterPipeline::new(&guards, config).run()?;
    write_schedule(&args.output, &outcome.schedule)?;

    Ok(RosterReport::from_outcome(&outcome, guards.len()))
}

fn main() -> ExitCode {
    enable_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            println!("\nRoster written to {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("u-roster: {err}");
            ExitCode::FAILURE
        }
    }
}

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use rr_scenario::{Scenario, StepOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Relay registry scenario runner.
#[derive(Parser, Debug)]
#[command(
    name = "rr",
    version,
    about = "Replay relay-registry scenarios",
    long_about = "Replays a JSON scenario file against a fresh in-memory relay \
                  registry, checking each step's expected outcome and \
                  optionally printing the final registry state."
)]
struct Cli {
    /// Path to the scenario file to replay.
    #[arg(env = "RR_SCENARIO")]
    scenario: PathBuf,

    /// Print the final registry state as pretty JSON on stdout.
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Suppress log output to stderr (run silently).
    #[arg(short, long, default_value_t = false, env = "RR_QUIET")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::from_default_env().add_directive("rr_cli=info".parse()?)
    };
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let raw = fs::read_to_string(&cli.scenario)
        .with_context(|| format!("reading scenario {}", cli.scenario.display()))?;
    let scenario = Scenario::from_json(&raw).context("parsing scenario")?;

    info!(
        admin = %scenario.admin,
        steps = scenario.steps.len(),
        "Replaying scenario"
    );

    let replay = rr_scenario::run(&scenario).context("replaying scenario")?;

    for (index, outcome) in replay.outcomes.iter().enumerate() {
        match outcome {
            StepOutcome::Ok => info!(step = index, "ok"),
            StepOutcome::Failed(e) => info!(step = index, code = e.code(), "failed: {e}"),
        }
    }

    info!(
        nodes = replay.registry.len(),
        admin = %replay.registry.admin(),
        block_height = replay.registry.block_height(),
        "Replay complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&replay.registry)?);
    }

    Ok(())
}

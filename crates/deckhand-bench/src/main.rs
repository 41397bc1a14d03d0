use std::path::PathBuf;

use clap::Parser;

use deckhand_bench::config::{ResolvedOutputs, ScenarioConfig};
use deckhand_bench::logging::init_logging;
use deckhand_bench::runner::ReplayRunner;

/// Scenario replay harness for the Deckhand decision engine.
#[derive(Debug, Parser)]
#[command(
    name = "deckhand-bench",
    author,
    version,
    about = "Deterministic scripted-match replay harness"
)]
struct Cli {
    /// Path to the YAML scenario file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/scenario.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the strategy bound at match start.
    #[arg(long, value_name = "KEY")]
    strategy: Option<String>,

    /// Exit after validating the configuration (no replay is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ScenarioConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(strategy) = cli.strategy {
        config.strategy = Some(strategy);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let turns = config.turns.len();

    println!(
        "Loaded scenario '{run_id}' with {turns} scripted turn{}",
        if turns == 1 { "" } else { "s" }
    );

    let _logging_guard = init_logging(&config.logging, &outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: replay skipped.");
        return Ok(());
    }

    let runner = ReplayRunner::new(config, outputs);
    let summary = runner.run()?;
    println!(
        "Replay complete for '{run_id}': {} turns → {} rows at {}",
        summary.turns_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );

    Ok(())
}

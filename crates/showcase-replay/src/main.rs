#![deny(warnings)]

use std::path::PathBuf;

use clap::Parser;
use showcase_core::ShufflePolicy;

use showcase_replay::config::{ReplayConfig, ResolvedOutputs};
use showcase_replay::logging::init_logging;
use showcase_replay::runner::ReplayRunner;

/// Scripted session replay for the recipe grid.
#[derive(Debug, Parser)]
#[command(
    name = "showcase-replay",
    author,
    version,
    about = "Deterministic replay of recipe grid sessions"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "replay/replay.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the shuffle seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the shuffle policy (`reshuffle` or `stable`).
    #[arg(long, value_name = "POLICY")]
    shuffle: Option<ShufflePolicy>,

    /// Override the initial viewport width in pixels.
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Exit after validating the configuration (nothing is replayed).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ReplayConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(seed) = cli.seed {
        config.session.seed = Some(seed);
    }

    if let Some(shuffle) = cli.shuffle {
        config.session.shuffle = shuffle;
    }

    if let Some(width) = cli.width {
        config.session.viewport_width = Some(width);
    }

    config.validate()?;
    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let steps = config.script.len();

    println!(
        "Loaded replay '{run_id}' with {steps} step{} ({} shuffle)",
        if steps == 1 { "" } else { "s" },
        config.session.shuffle.as_str()
    );

    let _logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = ReplayRunner::new(config, outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: replay skipped.");
        return Ok(());
    }

    let summary = runner.run()?;
    let stats = &summary.stats;
    println!(
        "Replay complete for '{run_id}' (seed {}): {} renders, {} no-ops, {} activations → {} frames at {}",
        summary.seed,
        stats.renders,
        stats.unchanged,
        stats.activations,
        summary.frames_written,
        summary.frames_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    println!(
        "Final state: category '{}', page {}/{}",
        stats.final_category, stats.final_page, stats.final_total_pages
    );
    if let Some(telemetry_path) = summary.telemetry_path.as_ref() {
        println!("Telemetry log: {}", telemetry_path.display());
    }

    Ok(())
}

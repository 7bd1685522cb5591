//! match-runner: run a headless match to completion and report the result.
//!
//! Usage:
//!   match-runner --seed 7 --monster phantom --difficulty hard
//!   match-runner --config match.json --json

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hunted_core::commands::SimCommand;
use hunted_core::enums::{Difficulty, MonsterType};
use hunted_sim::{MatchConfig, Simulation};

/// Run one AI-vs-AI hunt headlessly.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON match config. Missing fields take defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the config seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// easy, normal or hard.
    #[arg(short, long, value_parser = parse_lowercase::<Difficulty>)]
    difficulty: Option<Difficulty>,

    /// behemoth, leviathan or phantom.
    #[arg(short, long, value_parser = parse_lowercase::<MonsterType>)]
    monster: Option<MonsterType>,

    /// Seconds per tick.
    #[arg(long, default_value_t = hunted_core::constants::DT)]
    step: f64,

    /// Stop after this much simulated time even if the match is still going.
    #[arg(long)]
    max_secs: Option<f64>,

    /// Print the summary as JSON on stdout.
    #[arg(long)]
    json: bool,
}

/// Parse a CLI word through the type's lowercase serde names.
fn parse_lowercase<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase())).map_err(|e| e.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_config(args: &Args) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config from {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(monster) = args.monster {
        config.monster = monster;
    }
    config.validate().context("invalid match config")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    if !(args.step.is_finite() && args.step > 0.0) {
        bail!("--step must be a positive number of seconds, got {}", args.step);
    }
    let config = build_config(&args)?;
    let limit = args.max_secs.unwrap_or(config.match_duration_secs);
    info!(
        seed = config.seed,
        monster = ?config.monster,
        difficulty = ?config.difficulty,
        hunters = config.hunters.len(),
        "running match"
    );

    let mut sim = Simulation::new(config);
    sim.queue_command(SimCommand::Start);
    sim.tick(0.0);
    while sim.is_running() && sim.time().elapsed_secs < limit {
        sim.tick(args.step);
    }

    let summary = sim.summary();
    if args.json {
        let text = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{text}");
    } else {
        info!(
            outcome = ?summary.outcome,
            winner = ?summary.outcome.map(|o| o.winner()),
            time = summary.time,
            evolution_stage = summary.evolution_stage,
            hunters_killed = summary.hunters_killed,
            damage_dealt = summary.damage_dealt,
            "match finished"
        );
    }
    Ok(())
}

//! Cat Chase entry point
//!
//! Headless driver: plays sessions with a scripted pilot and reports the
//! outcome. Windowing and drawing are left to a graphics front end that
//! consumes `cat_chase::renderer::render`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use cat_chase::Tuning;
use cat_chase::autopilot::{create_pilot, pilot_ids};
use cat_chase::runner::{RunConfig, RunSummary, run_realtime, run_session};

#[derive(Parser, Debug)]
#[command(name = "cat-chase")]
#[command(about = "Headless runner for the Cat Chase arena simulation")]
struct Cli {
    /// Tuning JSON file (missing fields keep their defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available pilots
    ListPilots,
    /// Print the default tuning as JSON
    DefaultConfig,
    /// Simulate a session with a fixed frame rate, as fast as possible
    Run {
        #[arg(long, default_value = "chaser")]
        pilot: String,
        /// Session seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 60 * 120)]
        max_frames: u32,
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a session against the wall clock
    Play {
        #[arg(long, default_value = "chaser")]
        pilot: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { config, command } = Cli::parse();
    let tuning = match config {
        Some(path) => Tuning::load(&path)
            .with_context(|| format!("failed to load tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    match command {
        Commands::ListPilots => {
            for id in pilot_ids() {
                println!("{id}");
            }
        }
        Commands::DefaultConfig => {
            println!("{}", Tuning::default().to_json()?);
        }
        Commands::Run {
            pilot,
            seed,
            max_frames,
            fps,
            json,
        } => {
            let mut pilot =
                create_pilot(&pilot).ok_or_else(|| anyhow!("unknown pilot '{pilot}'"))?;
            let seed = seed.unwrap_or_else(clock_seed);
            log::info!("Cat Chase starting with seed: {seed}");
            let config = RunConfig {
                seed,
                max_frames,
                fps,
                tuning,
            };
            let summary = run_session(pilot.as_mut(), &config)?;
            report(&summary, json)?;
        }
        Commands::Play {
            pilot,
            seed,
            seconds,
            fps,
            json,
        } => {
            let mut pilot =
                create_pilot(&pilot).ok_or_else(|| anyhow!("unknown pilot '{pilot}'"))?;
            let seed = seed.unwrap_or_else(clock_seed);
            log::info!("Cat Chase starting with seed: {seed}");
            let summary = run_realtime(pilot.as_mut(), seed, tuning, seconds, fps)?;
            report(&summary, json)?;
        }
    }

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn report(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!(
        "pilot={} seed={} frames={} score={} lives={} time_left={:.2} game_over={}",
        summary.pilot,
        summary.seed,
        summary.frames,
        summary.score,
        summary.lives,
        summary.time_left,
        summary.game_over
    );
    for line in &summary.hud {
        println!("  {line}");
    }
    Ok(())
}

//! Boxes level demo entry point
//!
//! Runs one session against a simulated host with a manual clock. Peripherals only log.
//!
//! Without `--replay` an auto-player presses one button per second and is right
//! most of the time. With `--replay` the sensor events in FILE (a JSON array of
//! `{ "atMs", "boardId", "valueType", "sensorId", "value" }`) are applied in time order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Deserialize;

use boxes_level::sim::{BoxSize, Level, SensorEvent, SensorId};
use boxes_level::{LevelConfig, Peripherals, SimHost};

/// Host clock step per tick
const TICK_MS: u64 = 250;
/// Auto-player presses once every this many ticks
const TICKS_PER_PRESS: u64 = 4;
/// Auto-player accuracy
const BOT_ACCURACY: f64 = 0.8;
/// Stop the auto-player after this much simulated time
const SESSION_LIMIT_MS: u64 = 10 * 60 * 1000;

#[derive(Parser)]
#[command(name = "boxes-level", about = "Play one Boxes level session against a simulated host")]
struct Args {
    /// Level config JSON; missing or bad keys take defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for target generation and the auto-player
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Replay sensor events from this JSON file instead of auto-playing
    #[arg(long)]
    replay: Option<PathBuf>,
}

/// A sensor event with its host time
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedEvent {
    at_ms: u64,
    #[serde(flatten)]
    event: SensorEvent,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Boxes level (native) starting...");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => LevelConfig::load_or_default(path),
        None => LevelConfig::default(),
    };

    let mut level = Level::new(config, SimHost::playing(), Peripherals::logging(), args.seed);
    level.start();

    match &args.replay {
        Some(path) => replay(&mut level, path)?,
        None => auto_play(&mut level, args.seed),
    }

    level.end();
    let host = level.host();
    println!(
        "Session over after {}s: score {}{}",
        level.elapsed_s(),
        host.score,
        host.end_reasons
            .first()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default()
    );
    Ok(())
}

/// Advance the host clock one step and poll the level
fn step(level: &mut Level<SimHost>) {
    level.host_mut().advance_ms(TICK_MS);
    level.tick();
}

fn press_and_release(level: &mut Level<SimHost>, sensor_id: SensorId) {
    level.on_sensor(&SensorEvent::digital(sensor_id, 1));
    level.on_sensor(&SensorEvent::digital(sensor_id, 0));
}

/// Auto-player: presses a current target most of the time, a random button otherwise
fn auto_play(level: &mut Level<SimHost>, seed: u64) {
    let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(1));
    let mut ticks = 0u64;

    while level.host().end_reasons.is_empty() && level.host().now_ms < SESSION_LIMIT_MS {
        step(level);
        ticks += 1;
        if ticks % TICKS_PER_PRESS != 0 {
            continue;
        }

        let target = [BoxSize::Large, BoxSize::Small]
            .into_iter()
            .find_map(|size| level.button_box(size).correct_sensor_id());
        let sensor_id = match target {
            Some(id) if rng.random_bool(BOT_ACCURACY) => id,
            _ => {
                let size = if rng.random_bool(0.5) { BoxSize::Large } else { BoxSize::Small };
                let buttons = level.button_box(size).buttons();
                buttons[rng.random_range(0..buttons.len())].sensor_id
            }
        };
        press_and_release(level, sensor_id);
    }
}

/// Apply a recorded event script
fn replay(level: &mut Level<SimHost>, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read replay {}", path.display()))?;
    let mut events: Vec<TimedEvent> = serde_json::from_str(&text)
        .with_context(|| format!("could not parse replay {}", path.display()))?;
    events.sort_by_key(|e| e.at_ms);
    log::info!("Replaying {} sensor events", events.len());

    for timed in &events {
        while level.host().now_ms + TICK_MS <= timed.at_ms {
            step(level);
        }
        let now = level.host().now_ms;
        level.host_mut().advance_ms(timed.at_ms.saturating_sub(now));
        level.tick();
        let outcome = level.on_sensor(&timed.event);
        log::info!("{} ms: sensor {} -> {:?}", timed.at_ms, timed.event.sensor_id, outcome);
    }
    Ok(())
}

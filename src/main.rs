//! Raceline headless demo driver
//!
//! Runs the simulation at a fixed tick rate with a policy at the wheel:
//! crash resets the run with the crash penalty, a wall-clock watchdog resets
//! a car that stops making gate progress, and every episode is logged.
//!
//! Usage: `raceline [track.json] [chase|random]`

use std::time::{Duration, Instant};

use raceline::consts::{CRASH_PENALTY, STUCK_PENALTY};
use raceline::policy::{ChasePolicy, Policy, RandomPolicy};
use raceline::sim::{Controls, Simulation, TrackLayout};
use raceline::tuning::SimConfig;

/// Target tick rate
const TICK_HZ: u32 = 60;
/// Demo run length (ten minutes of simulated time)
const MAX_TICKS: u64 = 10 * 60 * TICK_HZ as u64;
/// Wall-clock watchdog: reset when gate progress stalls this long
const STUCK_TIMEOUT: Duration = Duration::from_secs(30);
/// Seed for the exploration policy
const DEMO_SEED: u64 = 42;

fn load_layout(path: &str) -> Result<TrackLayout, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(TrackLayout::from_json(&json)?)
}

fn main() {
    env_logger::init();

    let layout = match std::env::args().nth(1) {
        Some(path) => match load_layout(&path) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("Failed to load track {path}: {e}");
                std::process::exit(1);
            }
        },
        None => TrackLayout::default_circuit(),
    };

    let mut policy: Box<dyn Policy> = match std::env::args().nth(2).as_deref() {
        Some("random") => {
            log::info!("Exploration policy, seed {DEMO_SEED}");
            Box::new(RandomPolicy::new(DEMO_SEED))
        }
        _ => Box::new(ChasePolicy::default()),
    };

    let mut sim = Simulation::new(SimConfig::default(), layout);
    log::info!(
        "Driving {} gates at {TICK_HZ} Hz for {MAX_TICKS} ticks",
        sim.track().gate_count()
    );

    let tick_len = Duration::from_secs(1) / TICK_HZ;
    let mut last_progress = Instant::now();
    let mut controls = Controls::default();
    let mut episode = 0u32;
    let mut total_reward = 0.0f32;

    for _ in 0..MAX_TICKS {
        let started = Instant::now();

        let obs = sim.tick(&controls);
        let mut reward = obs.reward;

        if obs.crashed {
            log::info!("episode {episode}: crashed after {} gates", obs.gates_crossed);
            sim.reset();
            reward = CRASH_PENALTY;
            episode += 1;
            last_progress = Instant::now();
        } else if reward > 0.0 {
            log::info!(
                "episode {episode}: gate crossed, {}/{} (reward {reward})",
                obs.gates_crossed,
                sim.track().gate_count()
            );
            last_progress = Instant::now();
        } else if last_progress.elapsed() > STUCK_TIMEOUT {
            log::info!("episode {episode}: stuck, resetting");
            sim.reset();
            reward = STUCK_PENALTY;
            episode += 1;
            last_progress = Instant::now();
        }

        policy.reinforce(reward, &obs);
        controls = policy.decide(&obs);
        total_reward += reward;

        // Frame pacing: sleep off the remainder; when a tick ran long, start
        // the next one immediately
        let elapsed = started.elapsed();
        if elapsed < tick_len {
            std::thread::sleep(tick_len - elapsed);
        }
    }

    log::info!("Done: {episode} resets, total reward {total_reward:.1}");
}

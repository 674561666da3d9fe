//! Headless match runner.
//!
//! Spawns hostiles around the owner, walks the owner in a loop and lets the
//! companion fend for itself until it dies or the frame budget runs out.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sidekick::simulation::DEFAULT_CONTACT_RADIUS;
use sidekick::{init_logging, Arena, GameConfig, OwnerInput, Simulation};

/// Runs a scripted companion match without a renderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 1800)]
    ticks: u64,
    /// Seed for hostile placement and target choice
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Hostiles spawned at the start
    #[arg(long, default_value_t = 6)]
    hostiles: u32,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Pixels-to-units factor
    #[arg(long, default_value_t = 0.01)]
    unit_scale: f32,
    /// Distance in world units at which the companion touches a hostile
    #[arg(long, default_value_t = DEFAULT_CONTACT_RADIUS)]
    contact_radius: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut placement = ChaCha8Rng::seed_from_u64(args.seed);
    let mut arena = Arena::new(args.unit_scale, args.dt);
    for _ in 0..args.hostiles {
        let spot = Vec2::new(placement.gen_range(-5.0..5.0), placement.gen_range(-4.0..4.0));
        arena.spawn_hostile(spot);
    }

    let mut sim = Simulation::new(&config, arena, ChaCha8Rng::seed_from_u64(args.seed ^ 1))
        .context("building simulation")?
        .with_hostile_speed(0.2)
        .with_contact_radius(args.contact_radius);

    let ran = sim.run(args.ticks, patrol_input);

    let companion = sim.companion();
    info!(
        "ran {ran} frames: companion {:?} with {}/{} life, {} hostiles left",
        companion.state(),
        companion.current_life(),
        companion.max_life(),
        sim.arena().active_hostiles()
    );
    Ok(())
}

/// Walks the owner around a square, firing every half second.
fn patrol_input(frame: u64, position: Vec2) -> OwnerInput {
    let leg = (frame / 120) % 4;
    let axis = match leg {
        0 => Vec2::X,
        1 => Vec2::Y,
        2 => Vec2::NEG_X,
        _ => Vec2::NEG_Y,
    };
    OwnerInput {
        axis,
        aim: position + axis,
        shoot_axis: 0.0,
        mouse_pressed: frame % 30 == 0,
    }
}

//! Colored Circles headless driver
//!
//! Runs a seeded game with the autoplay player at a fixed frame rate and
//! reports how it went. Useful for soak testing the simulation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use colored_circles::{
    Settings,
    consts::MAX_FRAME_DT,
    sim::{Autoplay, GameEvent, GameState, Rect, tick},
};

#[derive(Debug, Parser)]
#[command(name = "colored-circles", about = "Run a headless autoplay game")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Arena width
    #[arg(long, default_value_t = 1080.0)]
    width: f32,
    /// Arena height
    #[arg(long, default_value_t = 1920.0)]
    height: f32,
    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
    /// Give up after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_frames: u32,
    /// Number of games to play back to back (restarting in between)
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_settings: Option<PathBuf>,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(path) = &args.write_settings {
        settings.save(path)?;
        return Ok(());
    }

    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }
    if !(args.width > 0.0 && args.height > 0.0) {
        bail!("arena must have a positive size, got {}x{}", args.width, args.height);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let bounds = Rect::from_size(args.width, args.height);
    let dt = (1.0 / args.fps).min(MAX_FRAME_DT);
    log::info!(
        "Colored Circles: seed={} arena={}x{} balls={}",
        seed,
        args.width,
        args.height,
        settings.palette.len()
    );

    let mut state = GameState::new(seed, bounds, settings);
    let mut autoplay = Autoplay::default();

    for game in 1..=args.games {
        if game > 1 {
            state.restart(bounds);
        }
        let frames = play(&mut state, &mut autoplay, bounds, dt, args.max_frames);
        match frames {
            Some(frames) => log::info!(
                "Game {} complete in {} frames ({:.1}s)",
                game,
                frames,
                frames as f32 * dt
            ),
            None => {
                log::warn!(
                    "Game {} gave up after {} frames with {} balls left",
                    game,
                    args.max_frames,
                    state.balls.len()
                );
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&state.snapshot())
            .context("serializing final snapshot")?;
        println!("{json}");
    }

    Ok(())
}

/// Play until the game completes. Returns the frame count, or None on timeout.
fn play(
    state: &mut GameState,
    autoplay: &mut Autoplay,
    bounds: Rect,
    dt: f32,
    max_frames: u32,
) -> Option<u32> {
    for frame in 1..=max_frames {
        if let Some(event) = autoplay.next_event(state, dt) {
            state.pointer(event);
        }
        tick(state, bounds, dt);

        for event in state.drain_events() {
            match event {
                GameEvent::Absorbed { id, color } => {
                    log::info!("Frame {}: ball {} absorbed ({:08X})", frame, id, color.0)
                }
                GameEvent::TargetColorChanged { color } => {
                    log::debug!("Frame {}: target is now {:08X}", frame, color.0)
                }
                GameEvent::Completed => return Some(frame),
            }
        }
    }
    None
}

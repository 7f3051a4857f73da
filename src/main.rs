//! Star Sweep headless driver
//!
//! Runs the simulation at a fixed 16 ms cadence with a scripted pilot,
//! renders every frame into a recording surface and logs game events.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use star_sweep::Tuning;
use star_sweep::platform::{FrameClock, KeyboardState};
use star_sweep::renderer::{ImageAtlas, RecordingSurface};
use star_sweep::sim::{FrameSnapshot, GamePhase, GameState, tick};
use star_sweep::ui::render_frame;

const FRAME_MS: f64 = 16.0;
const DEFAULT_SEED: u64 = 0x5eed;
const DEFAULT_FRAMES: u64 = 3600;

/// Run a scripted game without a display and report how it went.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for enemy spawns; the same seed replays the same game.
    #[arg(long, value_name = "SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Number of 16 ms frames to simulate.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_FRAMES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    frames: u64,
    /// JSON file overriding game balance values.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
    /// Print the effective tuning as JSON and exit.
    #[arg(long)]
    print_tuning: bool,
    /// Print the final frame snapshot as JSON.
    #[arg(long)]
    dump: bool,
}

/// Scripted key presses: confirm menus, then circle and shoot
fn pilot(keys: &mut KeyboardState, phase: GamePhase, frame: u64) {
    for key in ["w", "s", "a", "d", "q", "e", " ", "Escape", "Enter"] {
        keys.key_up(key);
    }
    match phase {
        GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => keys.key_down("Enter"),
        GamePhase::Playing => {
            keys.key_down("e");
            keys.key_down(" ");
            // Drift forward in short bursts
            if frame % 120 < 30 {
                keys.key_down("w");
            }
        }
        GamePhase::PlayerKilled => {}
    }
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Tuning::from_json(&std::fs::read_to_string(path)?)?),
        None => Ok(Tuning::default()),
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let tuning = load_tuning(args.tuning.as_ref())?;
    if args.print_tuning {
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    let mut state = GameState::new(args.seed, tuning);
    let mut keys = KeyboardState::new();
    let mut clock = FrameClock::new();
    let mut surface = RecordingSurface::new();
    let images = ImageAtlas::with_default_sheets();

    log::info!("Running {} frames with seed {}", args.frames, args.seed);

    for frame in 0..args.frames {
        let dt = clock.tick(frame as f64 * FRAME_MS);
        pilot(&mut keys, state.phase, frame);
        tick(&mut state, &mut keys, dt);

        for event in state.drain_events() {
            log::debug!("[{}] {:?}", state.time_ticks, event);
        }

        surface.clear_commands();
        render_frame(&mut surface, &images, &FrameSnapshot::capture(&state));
    }

    let snapshot = FrameSnapshot::capture(&state);
    log::info!(
        "Finished in {:?} with score {} and {} lives ({} draw calls last frame)",
        snapshot.phase,
        snapshot.score,
        snapshot.lives,
        surface.commands.len()
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Star Sweep (headless) starting...");
    run(CliArgs::parse())
}

//! Tile Sweep headless runner
//!
//! Drives the game controller with a simulated 60 Hz clock and a random
//! walk of arrow-key presses until the run ends or the frame cap is hit.

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tile_sweep::sim::{Direction, FrameOutcome};
use tile_sweep::{ConfigError, Game, GameConfig};

/// Simulated frame length (60 Hz display refresh)
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Parser)]
#[command(name = "tile-sweep", about = "Run a headless Tile Sweep session")]
struct Args {
    /// World seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames even if the run is still going
    #[arg(long, default_value_t = 20_000)]
    max_frames: u64,

    /// Press a random arrow key every N frames (0 = never)
    #[arg(long, default_value_t = 10)]
    input_every: u64,

    /// JSON file with config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            GameConfig::from_json(&json)
        }
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut game = Game::with_seed(config, seed)?;
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    let mut now_ms = 0.0;
    let mut last = None;
    for frame_index in 0..args.max_frames {
        if args.input_every > 0 && frame_index % args.input_every == 0 {
            let direction = match pilot.random_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            game.on_directional_input(direction);
        }

        let outcome = game.on_frame(now_ms);
        now_ms += FRAME_MS;
        let over = outcome.is_over();
        last = Some(outcome);
        if over {
            break;
        }
    }

    match &last {
        Some(FrameOutcome::GameOver(snapshot)) => {
            log::info!("Run ended: {}", snapshot.message);
        }
        Some(FrameOutcome::Running(snapshot)) => {
            log::info!("Frame cap reached at frame {}", snapshot.frame);
        }
        None => log::warn!("No frames simulated"),
    }

    let state = game.state();
    if args.json {
        match serde_json::to_string_pretty(&last) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    } else {
        println!("seed:          {}", seed);
        println!("frames:        {}", state.frames);
        println!("keys:          {}", state.player.keys);
        println!("health:        {}%", state.player.health.percent());
        println!("system health: {}%", state.system_health.percent());
        println!("tiles:         {}", state.store.tile_count());
        if let Some(FrameOutcome::GameOver(snapshot)) = &last {
            println!("{} - GAME OVER", snapshot.message);
        }
    }
    Ok(())
}

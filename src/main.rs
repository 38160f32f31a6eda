//! Tileworld entry point
//!
//! Headless native driver: generates a world, feeds a scripted key sequence
//! from a separate thread, and prints a text view of the world once per
//! second of simulated time.
//!
//! Usage: `tileworld [settings.json] [ticks]`

use std::thread;
use std::time::Duration;

use tileworld::Settings;
use tileworld::render::ascii_frame;
use tileworld::schedule::{FixedRate, run_with_viewport};
use tileworld::sim::{SharedInput, World};

/// Default run length (10 seconds at 60 Hz)
const DEFAULT_TICKS: u64 = 600;

/// Scripted key events: (delay before event in ms, key code, pressed)
const SCRIPT: &[(u64, &str, bool)] = &[
    (500, "ArrowRight", true),
    (1500, "Space", true),
    (200, "Space", false),
    (1500, "ArrowRight", false),
    (100, "ArrowLeft", true),
    (1000, "Space", true),
    (200, "Space", false),
    (1500, "ArrowLeft", false),
    // Not a recognised action; ignored by the input layer
    (100, "Escape", true),
];

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tileworld (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let ticks = args
        .next()
        .and_then(|t| t.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let mut world = match World::new(&settings) {
        Ok(world) => world,
        Err(e) => {
            log::error!("World generation failed: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Seed {} (pass it in settings to replay this world)", world.seed);

    let input = SharedInput::new();
    let script_input = input.clone();
    thread::spawn(move || {
        for &(delay_ms, code, pressed) in SCRIPT {
            thread::sleep(Duration::from_millis(delay_ms));
            if !script_input.apply_key(code, pressed) {
                log::debug!("Ignoring unrecognised key {}", code);
            }
        }
    });

    let tile_size = world.physics.tile_size;
    let print_every = u64::from(settings.tick_rate_hz.max(1));
    let mut driver = FixedRate::new(settings.tick_rate_hz).with_limit(ticks);

    let ran = run_with_viewport(
        &mut world,
        &input,
        &mut driver,
        (settings.viewport_width, settings.viewport_height),
        |frame| {
            if frame.events.jumped {
                log::info!("tick {}: jump", frame.tick);
            }
            if frame.tick % print_every == 0 {
                log::info!(
                    "tick {}: pos=({:.1}, {:.1}) vel=({:.2}, {:.2}) grounded={}",
                    frame.tick,
                    frame.player.pos.x,
                    frame.player.pos.y,
                    frame.player.vel.x,
                    frame.player.vel.y,
                    frame.player.grounded
                );
                println!("{}", ascii_frame(&frame, tile_size));
            }
        },
    );

    log::info!("Ran {} ticks", ran);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the scheduler; nothing to run here
}

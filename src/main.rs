use anyhow::{Context, Result};
use std::env;
use std::process::exit;
use tilecam::game::{run, Game};
use tilecam::input::{Event, Key, ScriptedEvents};
use tilecam::logging::init_logging;
use tilecam::render::RecordingCanvas;
use tilecam::settings::{Settings, SETTINGS_FILE_NAME};
use tilecam::tile_world::TileWorld;
use tilecam::timer::FrameTimer;
use tracing::{error, info};

/// a lap around the level
fn demo_script() -> ScriptedEvents {
    ScriptedEvents::new()
        .frame(vec![Event::press(Key::Right)])
        .idle(60)
        .frame(vec![Event::release(Key::Right), Event::press(Key::Down)])
        .idle(45)
        .frame(vec![Event::release(Key::Down), Event::press(Key::Left)])
        .idle(60)
        .frame(vec![Event::release(Key::Left), Event::press(Key::Up)])
        .idle(45)
        .frame(vec![Event::release(Key::Up)])
}

fn play() -> Result<()> {
    let settings_path = env::args().nth(1).unwrap_or_else(|| SETTINGS_FILE_NAME.to_owned());
    let settings = Settings::read(&settings_path)
        .with_context(|| format!("reading settings from {}", settings_path))?;
    let world = TileWorld::load(&settings.map_path, settings.layout)
        .with_context(|| format!("loading level {}", settings.map_path.display()))?;

    let mut game = Game::new(&settings, world, settings.seed);
    let mut canvas = RecordingCanvas::new();
    let summary = run(
        &mut game,
        &mut demo_script(),
        &mut canvas,
        &mut FrameTimer::new(),
        settings.frame_cap,
    );
    info!(
        frames = summary.frames,
        outcome = ?summary.outcome,
        presented = canvas.frames_presented(),
        health = game.dot().health(),
        "demo finished"
    );
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("unable to install log subscriber: {}", e);
    }
    if let Err(e) = play() {
        error!("{:#}", e);
        exit(1);
    }
}

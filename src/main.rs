//! Photo Tetris runner (default binary).
//!
//! Owns the frame loop: render the latest snapshot, dispatch key presses to
//! the session, then advance it by the measured frame time. Rendering goes
//! through the framebuffer renderer in `photo_tetris::term`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use photo_tetris::config::RunConfig;
use photo_tetris::core::{GameSession, GameSnapshot};
use photo_tetris::input::{handle_key_event, should_quit};
use photo_tetris::term::{FrameBuffer, GameView, PhotoSet, TerminalRenderer, Viewport};
use photo_tetris::types::FRAME_MS;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!("starting with seed {}", config.seed);

    let photos = PhotoSet::load_all(&config.photos);
    let session = GameSession::with_config(config.session_config(photos.len()));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &photos);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {:#}", err);
    }
    result
}

/// The screen belongs to the renderer, so logs only go to a file.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: GameSession, photos: &PhotoSet) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, photos, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.tick(ms);
        }
    }
}

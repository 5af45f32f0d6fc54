//! Terminal Tetris runner (default binary).
//!
//! One loop drives everything: render, wait for input until the next frame, then
//! feed the monotonic clock to the gravity scheduler.

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_lite::config::{parse_args, RunConfig};
use tetris_lite::core::GameState;
use tetris_lite::event_log::EventLog;
use tetris_lite::input::{handle_key_event, should_quit};
use tetris_lite::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("[Game] error: {:#}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args, RunConfig::from_env())?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut log = match &config.event_log {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game = GameState::new(seed);
    let result = run(&mut term, &mut game, &config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    println!(
        "[Game] seed={} episodes={} final score={} lines={} level={}",
        seed,
        game.episode_id(),
        game.score(),
        game.lines(),
        game.level()
    );
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    config: &RunConfig,
    mut log: Option<&mut EventLog>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(config.frame_ms as u64);
    let clock = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame.
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        game.tick(clock.elapsed().as_millis() as u64);

        if let Some(ev) = game.take_last_event() {
            if let Some(log) = log.as_deref_mut() {
                log.record_lock(game.episode_id(), &ev)?;
                if ev.game_over {
                    log.record_game_over(&game.snapshot())?;
                }
            }
        }
    }
}

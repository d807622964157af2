//! Terminal Blockfall runner.
//!
//! Owns the clock, the keyboard and the high-score file; the engine only sees
//! actions and elapsed milliseconds.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameSnapshot, GameState, PieceSpawner};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{CoreEvent, GameAction};
use blockfall::{Config, FileHighScoreStore, HighScoreStore};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let store = FileHighScoreStore::new(&config.high_score_path);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Send logs to `BLOCKFALL_LOG_PATH`; stdout belongs to the game screen.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, store: &impl HighScoreStore) -> Result<()> {
    let high_score = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "could not load high score, starting from 0");
        0
    });
    let spawner = match config.seed {
        Some(seed) => PieceSpawner::new(seed),
        None => PieceSpawner::from_entropy(),
    };
    info!(seed = spawner.seed(), high_score, "blockfall starting");

    let mut game = GameState::with_spawner(spawner, high_score);
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut actions: Vec<GameAction> = Vec::with_capacity(8);

    let tick = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    actions.extend(input.handle_key_event(key));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed < tick {
            continue;
        }
        last_tick = Instant::now();
        actions.extend(input.update());

        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        game.step(elapsed_ms, actions.drain(..));

        for event in game.drain_events() {
            if let CoreEvent::GameOver {
                high_score,
                new_record: true,
                ..
            } = event
            {
                match store.save(high_score) {
                    Ok(()) => info!(high_score, "new high score saved"),
                    Err(e) => warn!(error = %e, "could not save high score"),
                }
            }
        }
    }
}

//! Terminal runner (default binary).
//!
//! Drives the core game loop with crossterm input and the framebuffer
//! renderer. Time is the wall clock since startup in milliseconds; the
//! frame scheduler is polled once per frame after input is drained.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blocktris::core::{FrameScheduler, GameLoop, PieceFactory, Rules};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::term::{GameView, TerminalRenderer, TerminalSink};
use blocktris::types::FRAME_MS;

type TerminalGame = GameLoop<FrameScheduler, TerminalSink>;

#[derive(Debug, Parser)]
#[command(name = "blocktris", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for the piece generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the default rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Write log records to this file (filter with RUST_LOG, default info)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let rules = match &args.rules {
        Some(path) => load_rules(path)?,
        None => Rules::default(),
    };
    let factory = match args.seed {
        Some(seed) => {
            info!("using seed {seed}");
            PieceFactory::random(seed)
        }
        None => PieceFactory::from_entropy(),
    };

    let sink = TerminalSink::new(TerminalRenderer::new(), GameView::default());
    let mut game = GameLoop::new(rules, factory, FrameScheduler::new(), sink)
        .context("invalid rules")?;

    game.renderer_mut().terminal_mut().enter()?;
    let result = run(&mut game);

    // Always try to restore terminal state.
    let _ = game.renderer_mut().terminal_mut().exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_rules(path: &Path) -> Result<Rules> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    let rules: Rules = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse rules file {}", path.display()))?;
    info!("loaded rules from {}", path.display());
    Ok(rules)
}

fn run(game: &mut TerminalGame) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    game.play(now_ms())?;

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.handle_action(action, now_ms())? {
                            game.redraw()?;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    game.renderer_mut().invalidate();
                    game.redraw()?;
                }
                _ => {}
            }
        }

        // Deliver the pending tick once per frame.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if let Some(tick) = game.scheduler_mut().take_due() {
                game.on_tick(tick, now_ms())?;
            }
        }
    }
}

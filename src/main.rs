mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};

use arcade_shooter::compute::{init_state, tick, toggle_pause};
use arcade_shooter::config::{Config, CONFIG_ENV_VAR};
use arcade_shooter::entities::{GameState, GameStatus};
use arcade_shooter::input::{HostCommand, KeyTracker};
use arcade_shooter::score_store::{finish_session, FileScoreStore, ScoreStore, SessionSummary};

use display::TerminalSurface;

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    best_score: u32,
) -> std::io::Result<MenuResult> {
    display::draw_menu(out, best_score)?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        })) = rx.recv()
        {
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit)
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum SessionEnd {
    GameOver,
    Quit,
}

/// Drive one session until the player loses or quits.
///
/// Each frame: drain pending key events into the tracker, handle pause/quit
/// edges, then tick once with the held-key snapshot. While paused the loop
/// only waits for input; the state is left untouched.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    best_score: u32,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<(SessionEnd, GameState)> {
    let frame_time = Duration::from_secs(1) / config.timing.fps;
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();

    let (cols, rows) = terminal::size()?;
    let (width, height) = (config.play_area.width, config.play_area.height);
    let mut surface = TerminalSurface::new(width, height, cols, rows);
    let mut state = init_state(width, height, config.rules.to_rules(), best_score);
    info!(width, height, best_score, "session started");

    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Host-side clock; keeps advancing while paused so held keys expire.
    let mut clock: u64 = 0;

    loop {
        let frame_start = Instant::now();
        clock += 1;

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.handle(&key, clock) {
                Some(HostCommand::Quit) => return Ok((SessionEnd::Quit, state)),
                Some(HostCommand::TogglePause) => {
                    state = toggle_pause(&state);
                    if state.status == GameStatus::Paused {
                        surface.present(out)?;
                        display::draw_pause_overlay(out)?;
                    } else {
                        keys.clear();
                    }
                }
                None => {}
            }
        }

        if state.status == GameStatus::Playing {
            let input = keys.snapshot(clock);
            state = tick(&state, &input, &mut rng, &mut surface);
            surface.present(out)?;
        }

        if state.status == GameStatus::GameOver {
            return Ok((SessionEnd::GameOver, state));
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn wait_for_key(rx: &mpsc::Receiver<Event>) {
    // Drop keys still queued from play so the notice is not skipped instantly.
    while rx.try_recv().is_ok() {}
    while let Ok(ev) = rx.recv() {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = ev
        {
            break;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("loading configuration")?;
    let _log_guard =
        arcade_shooter::log::init_logger(&config.logging).context("initialising logging")?;

    let store = FileScoreStore::new(config.storage.high_score_path());
    info!(path = %store.path().display(), "best score slot");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events; terminals without the protocol ignore it.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the game loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &config, &store, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(
    out: &mut W,
    config: &Config,
    store: &FileScoreStore,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut best_score = store.load();

    loop {
        match show_menu(out, rx, best_score)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let (end, state) = game_loop(out, config, best_score, rx)?;
                match end {
                    SessionEnd::Quit => {
                        info!(score = state.score, "session abandoned");
                        break;
                    }
                    SessionEnd::GameOver => {
                        let summary = match finish_session(&state, store) {
                            Ok(summary) => summary,
                            Err(e) => {
                                warn!(error = %e, "could not persist best score");
                                SessionSummary::unsaved(&state)
                            }
                        };
                        best_score = summary.best_score;
                        display::draw_game_over(out, &summary)?;
                        wait_for_key(rx);
                    }
                }
            }
        }
    }
    Ok(())
}

mod audio;
mod audio_api;
mod config;
mod export;
mod seq;
mod session;
mod shared;
mod sounds;
mod tui;

use std::path::PathBuf;
use std::time::Instant;

use crossterm::terminal;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use session::Session;
use shared::InputEvent;
use tui::mode::TuiState;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let board_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let cfg = config::load(&board_dir);

    let audio = audio::start_audio()?;
    let mut session = Session::new(cfg);
    // decode defaults before entering raw mode so warnings stay readable
    session.preload_defaults();
    for cmd in session.drain_commands() {
        audio.send(cmd);
    }

    terminal::enable_raw_mode()?;
    let _guard = RawModeGuard; // auto drops when out of scope
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    let tick_rate = std::time::Duration::from_millis(16); // ~60fps
    let mut tui_state = TuiState::default();

    loop {
        let now = Instant::now();
        session.tick(now);
        for cmd in session.drain_commands() {
            audio.send(cmd);
        }

        let ds = session.display_state(now);
        term.draw(|frame| {
            tui::view::render(frame, frame.area(), &ds, tui_state.prompt_line());
        })?;

        let events = tui::input::poll_input(tick_rate, &mut tui_state)?;
        for event in events {
            if event == InputEvent::Quit {
                drop(term);
                drop(audio);
                return Ok(());
            }
            session.handle_input(event, Instant::now());
        }
        for cmd in session.drain_commands() {
            audio.send(cmd);
        }
    }
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

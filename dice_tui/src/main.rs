//! dice_tui - Interactive TUI for weighted dice simulations

mod app;
mod ui;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dice_core::{load_config, GameConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Interactive explorer for weighted dice games
#[derive(Parser, Debug)]
#[command(name = "dice_tui")]
struct Args {
    /// TOML game configuration (defaults to two fair six-sided dice)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed (overrides the config value)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            load_config(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        }
        None => GameConfig::fair(6, 2),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut app =
        App::from_config(&config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Char('5'), _) => app.set_tab(4),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Char('d'), _) => app.next_die(),
                    (KeyCode::Char('p'), _) | (KeyCode::Enter, _) => app.play(),
                    (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.increase_rolls(),
                    (KeyCode::Char('-'), _) => app.decrease_rolls(),
                    (KeyCode::Char('r'), _) => app.reset_weights(),
                    (KeyCode::Char('s'), _) => app.reseed(),
                    (KeyCode::Char('w'), _) => app.toggle_form(),
                    (KeyCode::Char('c'), _) => app.toggle_combo_view(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Log to the file named by `DICE_TUI_LOG`, if set; stdout belongs to the UI
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var("DICE_TUI_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

//! GRIDFALL - a falling-block puzzle for the terminal

mod board;
mod game;
mod input;
mod piece;
mod rng;
mod score;
mod settings;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use game::Game;
use input::{InputEvent, InputMap};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

fn main() -> io::Result<()> {
    // Session id distinguishes log files from concurrent instances.
    let session_id: u32 = rand::random();
    let log_dir = std::env::temp_dir().join("gridfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_file = format!("{:08x}.log", session_id);

    // The terminal is busy drawing the game, so logs go to a file.
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "gridfall starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    // Write the settings back so a first run leaves an editable file behind.
    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    if let Ok(game) = &result {
        let score = game.score();
        println!("Thanks for playing GRIDFALL!");
        println!("Final score: {} | Lines: {}", score.points, score.lines);
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<Game> {
    let mut game = Game::new(Duration::from_millis(settings.gameplay.drop_interval_ms));
    let input = InputMap::from_settings(settings);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, &game, settings))?;

        // Wait for input up to one frame, then advance the gravity clock by
        // however long really elapsed.
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match input.map(key) {
                    Some(InputEvent::Play(command)) => {
                        game.command(command);
                    }
                    Some(InputEvent::Restart) => {
                        tracing::info!("manual restart");
                        game.reset();
                    }
                    Some(InputEvent::Quit) => return Ok(game),
                    None => {}
                },
                _ => {}
            }
        }

        let now = Instant::now();
        game.tick(now - last_frame);
        last_frame = now;
    }
}

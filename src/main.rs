//! dailyword - word of the day and practice texts in your terminal
//!
//! Fetches a word of the day and a few short practice paragraphs from two
//! content APIs, caches the result for the current calendar day, and renders
//! it as a scrollable terminal view with manual refresh.

mod app;
mod cache;
mod cli;
mod content;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::{App, AppState};
use cache::{DailyCacheGate, DailyContent, FileStore};
use cli::Cli;
use content::ContentFetcher;

/// Initializes the tracing subscriber.
///
/// Silent unless RUST_LOG is set; events go to stderr, which stays off the
/// alternate screen the TUI draws on.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Daily => {
            ui::render_daily(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while content is being resolved
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading daily content...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Prints today's content as plain text for the --plain flag
fn print_plain(daily: &DailyContent) {
    println!("Updated on: {}", daily.updated_on);

    for word in &daily.bundle.words {
        println!();
        println!("Word of the day: {}", word.word);
        for definition in &word.definitions {
            match &definition.part_of_speech {
                Some(pos) => println!("  ({}) {}", pos, definition.text),
                None => println!("  {}", definition.text),
            }
        }
        if let Some(note) = &word.note {
            println!("  {}", note);
        }
    }

    if !daily.bundle.texts.is_empty() {
        println!();
        println!("Texts of the day:");
        for text in &daily.bundle.texts {
            println!("  {}", text);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let store = match &cli.cache_dir {
        Some(dir) => FileStore::with_dir(dir.clone()),
        None => FileStore::new()
            .unwrap_or_else(|| FileStore::with_dir(std::env::temp_dir().join("dailyword"))),
    };
    let fetcher = ContentFetcher::new()?;
    let gate = DailyCacheGate::new(store, fetcher);

    if cli.plain {
        let daily = gate.todays_content().await?;
        print_plain(&daily);
        return Ok(());
    }

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::new(gate);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger initial content load
    app.load_content().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Handle a requested refresh through the same load path as startup
        if app.refresh_requested {
            app.refresh_requested = false;
            app.state = AppState::Loading;
            terminal.draw(|f| render_ui(f, &app))?;
            app.load_content().await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

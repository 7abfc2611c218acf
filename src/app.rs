//! Application state management for dailyword
//!
//! This module contains the main application state, handling keyboard input,
//! content loading, and the transition out of the initial loading view.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::cache::{DailyCacheGate, FileStore};
use crate::content::{ContentBundle, ContentFetcher};

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while content is being resolved
    Loading,
    /// Daily content view
    Daily,
}

/// Main application struct managing state and content
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Flag indicating a manual refresh has been requested
    pub refresh_requested: bool,
    /// Scroll offset for the daily view
    pub scroll_offset: u16,
    /// The content currently on display, if any
    pub content: Option<ContentBundle>,
    /// Day the displayed content was fetched
    pub updated_on: Option<NaiveDate>,
    /// Message from the last failed load, shown in the status banner
    pub last_error: Option<String>,
    /// Cache gate resolving today's content
    gate: DailyCacheGate<FileStore, ContentFetcher>,
}

impl App {
    /// Creates a new App instance in the loading state
    pub fn new(gate: DailyCacheGate<FileStore, ContentFetcher>) -> Self {
        Self {
            state: AppState::Loading,
            should_quit: false,
            show_help: false,
            refresh_requested: false,
            scroll_offset: 0,
            content: None,
            updated_on: None,
            last_error: None,
            gate,
        }
    }

    /// Resolves today's content through the cache gate.
    ///
    /// Invoked on startup and again whenever the user requests a refresh;
    /// both triggers go through the same path. On success the view is
    /// replaced and rescrolled to the top. On failure the previously shown
    /// content (if any) stays up and only the error banner changes.
    pub async fn load_content(&mut self) {
        match self.gate.todays_content().await {
            Ok(daily) => {
                self.content = Some(daily.bundle);
                self.updated_on = Some(daily.updated_on);
                self.last_error = None;
                self.scroll_offset = 0;
            }
            Err(err) => {
                tracing::warn!(%err, "daily content load failed");
                self.last_error = Some(err.to_string());
            }
        }

        self.state = AppState::Daily;
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit the application
    /// - `Up`/`k`, `Down`/`j`: Scroll the daily view
    /// - `r`: Request a refresh
    /// - `?`: Toggle the help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys while shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Daily => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn create_test_app() -> (App, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = FileStore::with_dir(temp_dir.path().to_path_buf());
        let fetcher = ContentFetcher::new().expect("Failed to build fetcher");
        (App::new(DailyCacheGate::new(store, fetcher)), temp_dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_app_starts_loading() {
        let (app, _temp_dir) = create_test_app();
        assert_eq!(app.state, AppState::Loading);
        assert!(!app.should_quit);
        assert!(app.content.is_none());
    }

    #[test]
    fn test_quit_allowed_during_loading() {
        let (mut app, _temp_dir) = create_test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_keys_ignored_during_loading() {
        let (mut app, _temp_dir) = create_test_app();
        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.refresh_requested);
    }

    #[test]
    fn test_quit_from_daily_view() {
        let (mut app, _temp_dir) = create_test_app();
        app.state = AppState::Daily;

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_down_and_up() {
        let (mut app, _temp_dir) = create_test_app();
        app.state = AppState::Daily;

        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll_offset, 2);

        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let (mut app, _temp_dir) = create_test_app();
        app.state = AppState::Daily;

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_refresh_key_sets_flag() {
        let (mut app, _temp_dir) = create_test_app();
        app.state = AppState::Daily;

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.refresh_requested);
    }

    #[test]
    fn test_help_overlay_toggles_and_swallows_keys() {
        let (mut app, _temp_dir) = create_test_app();
        app.state = AppState::Daily;

        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        // Quit must not fire while the overlay is up; the key closes it
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}

//! UI rendering module for dailyword
//!
//! This module contains the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod daily;
pub mod help_overlay;

pub use daily::render as render_daily;
pub use help_overlay::render as render_help_overlay;

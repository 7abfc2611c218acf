//! Daily content screen rendering
//!
//! Renders the scrollable daily view: the word of the day with its
//! definitions, the practice texts, the day the content was last updated,
//! and a status banner when the last load failed.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{ContentBundle, WordOfTheDay};

/// Renders the daily content view
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &app.last_error {
        lines.push(Line::from(Span::styled(
            format!("Refresh failed: {}", error),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    if let Some(updated_on) = app.updated_on {
        lines.push(Line::from(Span::styled(
            format!("Updated on: {}", updated_on),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    match &app.content {
        Some(bundle) => append_bundle_lines(&mut lines, bundle),
        None => {
            lines.push(Line::from(Span::styled(
                "No content available. Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .title(" dailyword ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));

    frame.render_widget(paragraph, chunks[0]);
    frame.render_widget(footer(), chunks[1]);
}

/// Appends the word and text sections for a bundle
fn append_bundle_lines(lines: &mut Vec<Line<'static>>, bundle: &ContentBundle) {
    lines.push(section_header("Word of the day"));
    if bundle.words.is_empty() {
        lines.push(Line::from(Span::raw("  (none today)")));
    }
    for word in &bundle.words {
        append_word_lines(lines, word);
    }

    lines.push(Line::from(""));
    lines.push(section_header("Texts of the day"));
    for text in &bundle.texts {
        lines.push(Line::from(format!("  {}", text)));
        lines.push(Line::from(""));
    }
}

/// Appends one word record: the word, its definitions, and its note
fn append_word_lines(lines: &mut Vec<Line<'static>>, word: &WordOfTheDay) {
    lines.push(Line::from(Span::styled(
        format!("  {}", word.word),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    for definition in &word.definitions {
        let text = match &definition.part_of_speech {
            Some(pos) => format!("    ({}) {}", pos, definition.text),
            None => format!("    {}", definition.text),
        };
        lines.push(Line::from(text));
    }

    if let Some(note) = &word.note {
        lines.push(Line::from(Span::styled(
            format!("    {}", note),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

/// Styled section header line
fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Bottom key-hint line
fn footer() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        " r refresh | j/k scroll | ? help | q quit",
        Style::default().fg(Color::DarkGray),
    )))
}

//! Shared helpers for driving the app without a real terminal.
//!
//! Events are synthesized crossterm key presses; frames are drawn into a
//! `TestBackend` and flattened to text for assertions.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use draftgen::screens::{RenderContext, Screen};
use draftgen::{App, Config};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Type `text` one key press at a time
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
}

/// Flatten a buffer to lines of text
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut result = Ok(());
    terminal.draw(|frame| result = app.draw(frame)).unwrap();
    result.unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn render_screen(screen: &mut dyn Screen, config: &Config, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let ctx = RenderContext::new(config);
    let mut result = Ok(());
    terminal
        .draw(|frame| {
            let area = frame.area();
            result = screen.render(frame, area, &ctx);
        })
        .unwrap();
    result.unwrap();
    buffer_text(terminal.backend().buffer())
}

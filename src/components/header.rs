use crate::styles::theme;
use crate::utils::date;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Banner shown on every screen
pub const SYSTEM_BANNER: &str = "SYSTEM: DRAFTGEN-OS V1.0.4";

/// Common header component for all screens.
///
/// The date is captured when the header is built, so a screen shows the
/// date it was opened on rather than re-reading the clock every frame.
#[derive(Debug, Clone)]
pub struct Header {
    title: String,
    date: String,
}

impl Header {
    /// Rows used by the header, divider included
    pub const HEIGHT: u16 = 3;

    /// Build a header stamped with today's local date
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_date(title, date::today())
    }

    pub fn with_date(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Render the banner, section title and date, with a divider underneath
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(self.date.chars().count() as u16),
            ])
            .split(inner);

        let left = Paragraph::new(vec![
            Line::styled(SYSTEM_BANNER, t.muted_style()),
            Line::styled(format!(">> {}", self.title), t.title_style()),
        ]);
        frame.render_widget(left, chunks[0]);

        let date = Paragraph::new(self.date.as_str())
            .style(t.text_style())
            .alignment(Alignment::Right);
        frame.render_widget(date, chunks[1]);
    }
}

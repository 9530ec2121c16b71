use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Key hint line at the bottom of a screen
pub struct Footer;

impl Footer {
    /// Render `text` formatted as `Key: Label | Key: Label`, keys highlighted
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(Paragraph::new(Self::line(text)).alignment(Alignment::Center), area);
    }

    fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(keys, t.accent_style()));
                spans.push(Span::styled(format!(": {}", label), t.muted_style()));
            } else {
                spans.push(Span::styled(part, t.muted_style()));
            }
        }
        Line::from(spans)
    }
}

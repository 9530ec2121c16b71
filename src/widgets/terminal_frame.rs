//! The double-bordered frame every screen is drawn inside.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Passive wrapper: draws the outer border and hands back the inner area.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalFrame;

impl TerminalFrame {
    pub fn new() -> Self {
        Self
    }

    fn block(self) -> Block<'static> {
        let t = theme();
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(t.border_style())
            .style(t.background_style())
            .padding(Padding::new(2, 2, 1, 0))
    }

    /// Area available to the framed content
    pub fn inner(self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for TerminalFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_area_accounts_for_border_and_padding() {
        let inner = TerminalFrame::new().inner(Rect::new(0, 0, 80, 24));
        assert_eq!(inner, Rect::new(3, 2, 74, 21));
    }
}

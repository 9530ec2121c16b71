//! Prompt-style text input widget.
//!
//! Renders a [`TextInput`] as a single terminal line: a prompt, then either
//! the typed text or a placeholder. The cursor is placed by
//! [`TextInputWidgetExt::render_text_input_widget`] since a plain `Widget`
//! cannot touch the frame cursor.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A widget for rendering a TextInput as a prompt line.
///
/// # Example
/// ```
/// use draftgen::utils::TextInput;
/// use draftgen::widgets::TextInputWidget;
///
/// let input = TextInput::with_text("connect");
/// let widget = TextInputWidget::new(&input)
///     .prompt("> ")
///     .placeholder("awaiting_command...")
///     .focused(true);
/// // frame.render_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    prompt: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            prompt: "",
            placeholder: None,
            focused: false,
            disabled: false,
        }
    }

    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// A disabled input keeps its text but shows no cursor.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn line(&self) -> Line<'a> {
        let t = theme();
        let prompt = Span::styled(self.prompt, t.title_style());
        let body = if self.input.is_empty() {
            Span::styled(self.placeholder.unwrap_or(""), t.placeholder_style())
        } else if self.disabled {
            Span::styled(self.input.text().to_string(), t.muted_style())
        } else {
            Span::styled(self.input.text().to_string(), t.text_style())
        };
        Line::from(vec![prompt, body])
    }

    /// Cursor cell for a focused, enabled input rendered at `area`.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled || area.width == 0 || area.height == 0 {
            return None;
        }
        // Display width, so wide characters advance the cursor two cells
        let offset = Span::raw(self.prompt).width() + Span::raw(self.input.before_cursor()).width();
        let max_x = area.width.saturating_sub(1) as usize;
        Some(Position::new(area.x + offset.min(max_x) as u16, area.y))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

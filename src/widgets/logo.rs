//! The [`DraftgenLogo`] widget renders the DRAFTGEN wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// A widget that renders the DRAFTGEN wordmark on the auth screen.
///
/// # Examples
///
/// ```rust
/// use draftgen::widgets::DraftgenLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(DraftgenLogo::regular(), frame.area());
/// # }
/// ```
///
/// Renders:
///
/// ```text
/// ╺┳┓┏━┓┏━┓┏━╸╺┳╸┏━╸┏━╸┏┓╻
///  ┃┃┣┳┛┣━┫┣╸  ┃ ┃╺┓┣╸ ┃┗┫
/// ╺┻┛╹┗╸╹ ╹╹   ╹ ┗━┛┗━╸╹ ╹
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DraftgenLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Box drawing wordmark (3 lines)
    #[default]
    Regular,
    /// Plain text for terminals too narrow for the wordmark
    Plain,
}

impl DraftgenLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn plain() -> Self {
        Self::new(Size::Plain)
    }

    /// The largest logo that fits in `width` cells
    pub const fn fitting(width: u16) -> Self {
        if width >= Size::Regular.width() {
            Self::regular()
        } else {
            Self::plain()
        }
    }

    /// Width of the logo in terminal cells
    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    /// Height of the logo in lines
    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for DraftgenLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.as_str())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => indoc! {"
                ╺┳┓┏━┓┏━┓┏━╸╺┳╸┏━╸┏━╸┏┓╻
                 ┃┃┣┳┛┣━┫┣╸  ┃ ┃╺┓┣╸ ┃┗┫
                ╺┻┛╹┗╸╹ ╹╹   ╹ ┗━┛┗━╸╹ ╹
            "},
            Self::Plain => "DRAFTGEN\n",
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Regular => 24,
            Self::Plain => 8,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Regular => 3,
            Self::Plain => 1,
        }
    }
}

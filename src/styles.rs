//! Theme and style system for DRAFTGEN
//!
//! The dark theme mimics a phosphor terminal (green on black); light and
//! no-color variants exist for terminals where that is unreadable.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Selection indicator shown on the focused folder card
pub const SELECTED_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::LightGreen,
    accent: Color::Yellow,
    success: Color::LightGreen,
    warning: Color::Yellow,
    text: Color::Green,
    text_muted: Color::DarkGray,
    border: Color::Green,
    border_focused: Color::LightGreen,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles, logo, focused elements
    pub primary: Color,
    /// Highlighted command phrases
    pub accent: Color,

    pub success: Color,
    pub warning: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - green phosphor on the terminal background
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::LightGreen,
            accent: Color::Yellow,
            success: Color::LightGreen,
            warning: Color::Yellow,
            text: Color::Green,
            text_muted: Color::DarkGray,
            border: Color::Green,
            border_focused: Color::LightGreen,
            background: Color::Reset,
        }
    }

    /// Light theme - darker variants for light backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            accent: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            background: Color::Reset,
        }
    }

    /// No-color theme. Style helpers below skip fg/bg in this mode so the
    /// terminal defaults are used without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            accent: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for the accented command phrase
    pub fn accent_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.warning)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for inert controls
    pub fn disabled_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for placeholder text in inputs
    pub fn placeholder_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC);
        }
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("phosphor".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for style in [t.title_style(), t.disabled_style(), t.accent_style()] {
            assert!(style.fg.is_none());
            assert!(style.bg.is_none());
        }
    }

    #[test]
    fn test_dark_theme_is_green() {
        let t = Theme::dark();
        assert_eq!(t.text_style().fg, Some(Color::Green));
    }
}

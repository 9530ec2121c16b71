//! Project directory screen.
//!
//! Shows the folders it was built with as a grid of cards, in the order
//! given. Rows that do not fit scroll into view as the selection moves.
//! The "new directory" and "logout" controls are drawn but disabled in
//! mock mode.

use crate::components::{FolderCard, Footer, Header};
use crate::folder::Folder;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::widgets::TerminalFrame;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

const PROJECTS_PATH: &str = "/root/projects";
const CARD_GAP: u16 = 2;

/// Header controls of the directory view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryControl {
    NewDirectory,
    Logout,
}

impl DirectoryControl {
    pub const ALL: [DirectoryControl; 2] = [DirectoryControl::NewDirectory, DirectoryControl::Logout];

    pub fn label(self) -> &'static str {
        match self {
            DirectoryControl::NewDirectory => "[+] NEW DIRECTORY",
            DirectoryControl::Logout => "[X] LOGOUT",
        }
    }

    /// Neither control has behavior in mock mode.
    pub fn is_enabled(self) -> bool {
        false
    }

    fn for_action(action: Action) -> Option<Self> {
        match action {
            Action::Create => Some(DirectoryControl::NewDirectory),
            Action::Logout => Some(DirectoryControl::Logout),
            _ => None,
        }
    }
}

/// Lay out `count` cards row-major inside `area`.
///
/// Returns one rect per card that fits; cards past the bottom edge are
/// left out, so the result may be shorter than `count`.
pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
    let columns = grid_columns(area.width);
    let width = FolderCard::WIDTH.min(area.width);
    let mut areas = Vec::with_capacity(count);

    for index in 0..count {
        let row = (index / columns) as u16;
        let col = (index % columns) as u16;
        let y = area.y + row * (FolderCard::HEIGHT + 1);
        if y + FolderCard::HEIGHT > area.bottom() {
            break;
        }
        let x = area.x + col * (FolderCard::WIDTH + CARD_GAP);
        areas.push(Rect::new(x, y, width, FolderCard::HEIGHT));
    }

    areas
}

/// Number of card columns that fit in `width` (at least one)
pub fn grid_columns(width: u16) -> usize {
    ((width + CARD_GAP) / (FolderCard::WIDTH + CARD_GAP)).max(1) as usize
}

/// Number of full card rows that fit in `height`
pub fn grid_rows(height: u16) -> usize {
    ((height + 1) / (FolderCard::HEIGHT + 1)) as usize
}

/// Cue for cards scrolled out of view, if any
pub fn scroll_hint(above: usize, below: usize) -> Option<String> {
    let mut parts = Vec::new();
    if above > 0 {
        parts.push(format!("▲ {} more above", above));
    }
    if below > 0 {
        parts.push(format!("▼ {} more below", below));
    }
    (!parts.is_empty()).then(|| parts.join("   "))
}

pub struct DirectoryScreen {
    folders: Vec<Folder>,
    header: Header,
    selected: usize,
    columns: usize,
    /// First visible row of the grid
    scroll: usize,
    visible_rows: usize,
}

impl DirectoryScreen {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self::with_header(folders, Header::new("PROJECT_DIRECTORY"))
    }

    pub fn with_header(folders: Vec<Folder>, header: Header) -> Self {
        Self {
            folders,
            header,
            selected: 0,
            columns: 1,
            scroll: 0,
            visible_rows: 0,
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn selected(&self) -> Option<&Folder> {
        self.folders.get(self.selected)
    }

    /// Index of the first visible row
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll the least amount that puts the selected row in view.
    /// Before the first render the viewport is unknown and nothing moves.
    fn scroll_to_selected(&mut self) {
        if self.visible_rows == 0 {
            return;
        }
        let row = self.selected / self.columns;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + self.visible_rows {
            self.scroll = row + 1 - self.visible_rows;
        }

        let total_rows = self.folders.len().div_ceil(self.columns);
        self.scroll = self.scroll.min(total_rows.saturating_sub(self.visible_rows));
    }

    pub fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return ScreenAction::None;
        };

        if let Some(control) = DirectoryControl::for_action(action) {
            if !control.is_enabled() {
                debug!("{} is disabled in mock mode", control.label());
            }
            return ScreenAction::None;
        }

        let last = self.folders.len().saturating_sub(1);
        match action {
            Action::MoveLeft => self.selected = self.selected.saturating_sub(1),
            Action::MoveRight => self.selected = (self.selected + 1).min(last),
            Action::MoveUp => {
                if self.selected >= self.columns {
                    self.selected -= self.columns;
                }
            }
            Action::MoveDown => {
                if self.selected + self.columns <= last {
                    self.selected += self.columns;
                }
            }
            Action::GoToTop | Action::Home => self.selected = 0,
            Action::GoToEnd | Action::End => self.selected = last,
            Action::Confirm => {
                if let Some(folder) = self.selected() {
                    return FolderCard::new(folder).activate();
                }
            }
            Action::Quit | Action::Cancel => return ScreenAction::Quit,
            _ => {}
        }
        self.scroll_to_selected();
        ScreenAction::None
    }

    fn path_row(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut controls = Vec::new();
        for (i, control) in DirectoryControl::ALL.iter().enumerate() {
            if i > 0 {
                controls.push(Span::raw("  "));
            }
            let style = if control.is_enabled() {
                t.text_style()
            } else {
                t.disabled_style()
            };
            controls.push(Span::styled(control.label(), style));
        }
        let controls = Line::from(controls);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(controls.width() as u16),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled(format!("📁 {}", PROJECTS_PATH), t.title_style())),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(controls).alignment(Alignment::Right),
            chunks[1],
        );
    }
}

impl Screen for DirectoryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let frame_widget = TerminalFrame::new();
        let inner = frame_widget.inner(area);
        frame.render_widget(frame_widget, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(1), // path and controls
                Constraint::Length(1),
                Constraint::Min(0), // grid
                Constraint::Length(1), // scroll cue
                Constraint::Length(1), // key hints
            ])
            .split(inner);

        self.header.render(frame, chunks[0]);
        self.path_row(frame, chunks[1]);

        let grid = chunks[3];
        self.columns = grid_columns(grid.width);
        self.visible_rows = grid_rows(grid.height);
        self.scroll_to_selected();

        let first = (self.scroll * self.columns).min(self.folders.len());
        let shown = &self.folders[first..];
        let areas = card_areas(grid, shown.len());
        for (offset, (folder, card_area)) in shown.iter().zip(&areas).enumerate() {
            let card = FolderCard::new(folder).selected(first + offset == self.selected);
            frame.render_widget(card, *card_area);
        }

        if let Some(hint) = scroll_hint(first, shown.len() - areas.len()) {
            frame.render_widget(
                Paragraph::new(hint)
                    .style(theme().muted_style())
                    .alignment(Alignment::Center),
                chunks[4],
            );
        }

        Footer::render(frame, chunks[5], &ctx.config.keymap.footer_directory());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, ctx)),
            _ => Ok(ScreenAction::None),
        }
    }
}

use crate::folder::Folder;
use crate::screens::ScreenAction;
use crate::styles::{theme, SELECTED_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Summary card for one folder.
///
/// The record is rendered as given; nothing is validated.
#[derive(Debug, Clone, Copy)]
pub struct FolderCard<'a> {
    folder: &'a Folder,
    selected: bool,
}

impl<'a> FolderCard<'a> {
    /// Card size in cells, borders included
    pub const WIDTH: u16 = 34;
    pub const HEIGHT: u16 = 8;

    pub fn new(folder: &'a Folder) -> Self {
        Self {
            folder,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// What activating the card means: open this folder by id
    pub fn activate(&self) -> ScreenAction {
        ScreenAction::OpenFolder(self.folder.id.clone())
    }

    fn title(&self) -> String {
        let marker = if self.selected { SELECTED_SYMBOL } else { "" };
        format!(" {}📁 {} ", marker, self.folder.name)
    }

    fn stat_line(label: &'static str, value: u32, width: u16) -> Line<'static> {
        let t = theme();
        let value = value.to_string();
        let gap = (width as usize).saturating_sub(label.len() + value.len()).max(1);
        Line::from(vec![
            Span::styled(label, t.muted_style()),
            Span::raw(" ".repeat(gap)),
            Span::styled(value, t.text_style()),
        ])
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let t = theme();
        vec![
            Line::styled(format!("ID: {}", self.folder.id), t.muted_style()),
            Line::default(),
            Self::stat_line("KNOWLEDGE_ITEMS", self.folder.knowledge_items, width),
            Self::stat_line("DRAFTS", self.folder.drafts, width),
            Line::styled("> CLICK TO OPEN", t.accent_style()),
        ]
    }
}

impl Widget for FolderCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let (border_type, border_style) = if self.selected {
            (BorderType::Thick, t.border_focused_style())
        } else {
            (BorderType::Plain, t.border_style())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Span::styled(self.title(), t.title_style()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder() -> Folder {
        Folder::new("DEMO-1", "scifi-novel-draft", 2, 0)
    }

    #[test]
    fn test_activate_opens_by_id() {
        let folder = folder();
        assert_eq!(
            FolderCard::new(&folder).activate(),
            ScreenAction::OpenFolder("DEMO-1".to_string())
        );
    }

    #[test]
    fn test_stat_lines_align_values_right() {
        let folder = folder();
        let lines = FolderCard::new(&folder).lines(30);
        assert_eq!(lines[0].to_string(), "ID: DEMO-1");
        let stats = lines[2].to_string();
        assert_eq!(stats.len(), 30);
        assert!(stats.starts_with("KNOWLEDGE_ITEMS"));
        assert!(stats.ends_with(" 2"));
        assert!(lines[3].to_string().ends_with(" 0"));
    }

    #[test]
    fn test_selected_title_has_marker() {
        let folder = folder();
        assert!(FolderCard::new(&folder).selected(true).title().contains(SELECTED_SYMBOL));
        assert!(!FolderCard::new(&folder).title().contains(SELECTED_SYMBOL));
    }

    #[test]
    fn test_empty_id_renders_as_is() {
        let folder = Folder::new("", "untitled", 0, 0);
        assert_eq!(FolderCard::new(&folder).lines(20)[0].to_string(), "ID: ");
    }
}

//! Project folder records shown in the directory view.

/// Metadata for one project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub knowledge_items: u32,
    pub drafts: u32,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, knowledge_items: u32, drafts: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            knowledge_items,
            drafts,
        }
    }
}

/// The folders available in mock mode.
pub fn demo_folders() -> Vec<Folder> {
    vec![Folder::new("DEMO-1", "scifi-novel-draft", 2, 0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_folders() {
        let folders = demo_folders();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].id, "DEMO-1");
        assert_eq!(folders[0].name, "scifi-novel-draft");
        assert_eq!(folders[0].knowledge_items, 2);
        assert_eq!(folders[0].drafts, 0);
    }
}

//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset.
    /// An overridden action loses its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All bindings, overrides first, with overridden preset bindings removed
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action` (e.g. "Enter")
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint text for the auth screen
    pub fn footer_auth(&self) -> String {
        format!(
            "{}: Submit | {}: Quit",
            self.key_display(Action::Confirm),
            self.key_display(Action::Cancel)
        )
    }

    /// Footer hint text for the directory screen
    pub fn footer_directory(&self) -> String {
        format!(
            "{}/{}: Select | {}: Open | {}: Quit",
            self.key_display(Action::MoveLeft),
            self.key_display(Action::MoveRight),
            self.key_display(Action::Confirm),
            self.key_display(Action::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Create)],
        };
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Create));
        // Preset binding for the overridden action is shadowed
        let action = keymap.get_action(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(action, None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        let action = keymap.get_action(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::MoveRight));
    }

    #[test]
    fn test_footer_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::Quit)],
        };
        assert!(keymap.footer_directory().ends_with("X: Quit"));
        assert_eq!(Keymap::default().footer_auth(), "Enter: Submit | Esc: Quit");
    }
}

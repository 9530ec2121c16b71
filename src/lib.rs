//! DRAFTGEN - terminal front end for a writing assistant
//!
//! In mock mode the app shows an authentication gateway that accepts a
//! single command, then a static project directory.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod folder;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::{App, SessionState, View};
pub use config::Config;
pub use folder::Folder;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};

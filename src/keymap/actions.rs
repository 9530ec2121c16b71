//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in the folder grid
    MoveUp,
    /// Move selection down in the folder grid
    MoveDown,
    /// Move selection left (or the cursor, in the command field)
    MoveLeft,
    /// Move selection right (or the cursor, in the command field)
    MoveRight,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Confirmation ============
    /// Submit the command / open the selected folder (Enter)
    Confirm,
    /// Cancel / leave (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,

    // ============ Directory controls ============
    /// Create a new directory (control is disabled in mock mode)
    Create,
    /// Log out (control is disabled in mock mode)
    Logout,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,
}

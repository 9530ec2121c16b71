//! Screen controllers for the application.
//!
//! Each screen implements the [`Screen`] trait: it owns its state, renders
//! itself, and answers events with a [`ScreenAction`] for the [`App`] to
//! apply.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   session.connected == false  → AuthScreen   │
//! │   session.connected == true   → Directory    │
//! │                                              │
//! │   AuthScreen::tick  ──Connect──►  App flips  │
//! │                                   the flag   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! [`App`]: crate::app::App

pub mod auth;
pub mod directory;
pub mod screen_trait;

pub use auth::{AuthCommand, AuthScreen, AuthState, AuthStatus, CONNECT_COMMAND, CONNECT_DELAY};
pub use directory::{DirectoryControl, DirectoryScreen};
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};

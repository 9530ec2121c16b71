//! Screen trait and associated types.
//!
//! Screens own their state, handle events by returning a [`ScreenAction`]
//! instead of mutating application state, and receive read-only context
//! objects for configuration.

use crate::config::Config;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event or a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// The connect command was accepted and its delay has elapsed.
    Connect,
    /// A folder card was activated.
    OpenFolder(String),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     state: MyState,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Advance time-based state. Called on every pass of the event loop.
    fn tick(&mut self, _now: Instant) -> ScreenAction {
        ScreenAction::None
    }

    /// Earliest instant at which `tick` has something to do.
    ///
    /// The event loop uses this to shorten its poll timeout.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    /// Called before the screen is torn down. Pending work must not
    /// outlive this call.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
